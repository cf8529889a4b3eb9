//! HTTP measurement sink
//!
//! Delivers hits to a v1-style collect endpoint as form payloads. Delivery
//! is fire-and-forget on the shell's runtime: no retries, failures are
//! logged and dropped.

use parking_lot::RwLock;
use tokio::runtime::Handle;
use url::Url;
use uuid::Uuid;

use crate::hit::HitKind;
use crate::sink::AnalyticsSink;
use crate::Result;

pub struct HttpSink {
    client: reqwest::Client,
    endpoint: Url,
    /// Random per-install client identifier
    client_id: Uuid,
    runtime: Handle,
    location: RwLock<Option<String>>,
}

impl HttpSink {
    pub fn new(endpoint: &str, runtime: Handle) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: Url::parse(endpoint)?,
            client_id: Uuid::new_v4(),
            runtime,
            location: RwLock::new(None),
        })
    }

    pub fn client_id(&self) -> Uuid {
        self.client_id
    }

    fn payload(&self, kind: HitKind, location: Option<&str>) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("v", "1".to_string()),
            ("cid", self.client_id.to_string()),
            ("t", kind.as_str().to_string()),
        ];

        if let Some(url) = location {
            params.push(("dl", url.to_string()));
        }

        params
    }
}

impl AnalyticsSink for HttpSink {
    fn set_location(&self, url: &str) -> Result<()> {
        *self.location.write() = Some(url.to_string());
        Ok(())
    }

    fn send(&self, kind: HitKind) -> Result<()> {
        let params = self.payload(kind, self.location.read().as_deref());
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();

        self.runtime.spawn(async move {
            if let Err(e) = client.post(endpoint).form(&params).send().await {
                tracing::warn!(error = %e, "Failed to deliver analytics hit");
            }
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_fields() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let sink = HttpSink::new("https://collect.example.com/batch", rt.handle().clone()).unwrap();

        let params = sink.payload(HitKind::Pageview, Some("https://example.com/about"));
        assert!(params.contains(&("v", "1".to_string())));
        assert!(params.contains(&("t", "pageview".to_string())));
        assert!(params.contains(&("dl", "https://example.com/about".to_string())));
        assert!(params
            .iter()
            .any(|(k, v)| *k == "cid" && *v == sink.client_id().to_string()));
    }

    #[test]
    fn test_payload_without_location() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let sink = HttpSink::new("https://collect.example.com/batch", rt.handle().clone()).unwrap();

        let params = sink.payload(HitKind::Pageview, None);
        assert!(!params.iter().any(|(k, _)| *k == "dl"));
    }

    #[test]
    fn test_rejects_bad_endpoint() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        assert!(HttpSink::new("not a url", rt.handle().clone()).is_err());
    }
}
