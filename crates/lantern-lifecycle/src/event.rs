//! Host lifecycle events
//!
//! The page-acceleration layer delivers these as JSON across the host
//! boundary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// Document structure finished parsing; fired once per loaded page
    DomReady,
    /// A navigation transition completed, including the initial one
    PageLoad { url: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_host_events() {
        let event: LifecycleEvent =
            serde_json::from_str(r#"{"type":"page_load","value":{"url":"/about"}}"#).unwrap();
        assert_eq!(
            event,
            LifecycleEvent::PageLoad {
                url: "/about".to_string()
            }
        );

        let event: LifecycleEvent = serde_json::from_str(r#"{"type":"dom_ready"}"#).unwrap();
        assert_eq!(event, LifecycleEvent::DomReady);
    }
}
