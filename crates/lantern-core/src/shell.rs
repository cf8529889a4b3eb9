//! Shell lifecycle container
//!
//! Wires the lifecycle handler to its collaborators from configuration and
//! routes host events to it.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use lantern_analytics::{AnalyticsSink, HttpSink};
use lantern_lifecycle::{
    LifecycleEvent, LifecycleHandler, LoadPhase, ProgressIndicator, WidgetHooks,
};

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

pub struct Shell<P, W>
where
    P: ProgressIndicator,
    W: WidgetHooks,
{
    config: Config,
    lifecycle: RwLock<LifecycleHandler<P, W>>,
}

impl<P, W> Shell<P, W>
where
    P: ProgressIndicator,
    W: WidgetHooks,
{
    /// Build a shell from configuration.
    ///
    /// When an analytics endpoint is configured, the capability is resolved
    /// here, once: hits are delivered through an [`HttpSink`] spawned on
    /// the current tokio runtime.
    pub fn new(config: Config, progress: P, widgets: W) -> Result<Self> {
        let mut handler = LifecycleHandler::new(progress, widgets);
        handler.set_progress_delay(Duration::from_millis(config.progress_delay_ms));

        if let Some(endpoint) = &config.analytics_endpoint {
            let runtime = tokio::runtime::Handle::try_current().map_err(|e| {
                CoreError::Config(format!("analytics endpoint set but no async runtime: {e}"))
            })?;
            handler.set_analytics(Arc::new(HttpSink::new(endpoint, runtime)?));
        }

        tracing::info!(
            delay_ms = config.progress_delay_ms,
            analytics = config.analytics_endpoint.is_some(),
            "Shell lifecycle ready"
        );

        Ok(Self {
            config,
            lifecycle: RwLock::new(handler),
        })
    }

    /// Replace the analytics sink, e.g. with a buffering one.
    pub fn with_analytics(self, sink: Arc<dyn AnalyticsSink>) -> Self {
        self.lifecycle.write().set_analytics(sink);
        self
    }

    /// Route a host lifecycle event to the handler.
    pub fn dispatch(&self, event: LifecycleEvent) -> Result<()> {
        match event {
            LifecycleEvent::DomReady => self.lifecycle.read().on_dom_ready()?,
            LifecycleEvent::PageLoad { url } => self.lifecycle.write().on_page_load(&url)?,
        }

        Ok(())
    }

    pub fn phase(&self) -> LoadPhase {
        self.lifecycle.read().phase()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lantern_analytics::{HitKind, MemorySink};
    use lantern_lifecycle::Result as LifecycleResult;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct StubProgress {
        delays: Arc<Mutex<Vec<u64>>>,
    }

    impl ProgressIndicator for StubProgress {
        fn set_display_delay(&self, delay: Duration) -> LifecycleResult<()> {
            self.delays.lock().unwrap().push(delay.as_millis() as u64);
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct StubWidgets {
        calls: Arc<Mutex<Vec<&'static str>>>,
    }

    impl WidgetHooks for StubWidgets {
        fn init_search(&self) -> LifecycleResult<()> {
            self.calls.lock().unwrap().push("init_search");
            Ok(())
        }

        fn toggle_nav(&self) -> LifecycleResult<()> {
            self.calls.lock().unwrap().push("toggle_nav");
            Ok(())
        }
    }

    #[test]
    fn test_dispatch_routes_events() {
        let progress = StubProgress::default();
        let widgets = StubWidgets::default();
        let sink = Arc::new(MemorySink::new());

        let shell = Shell::new(Config::default(), progress.clone(), widgets.clone())
            .unwrap()
            .with_analytics(sink.clone());

        shell.dispatch(LifecycleEvent::DomReady).unwrap();
        shell
            .dispatch(LifecycleEvent::PageLoad {
                url: "/home".to_string(),
            })
            .unwrap();
        shell
            .dispatch(LifecycleEvent::PageLoad {
                url: "/about".to_string(),
            })
            .unwrap();

        assert_eq!(*progress.delays.lock().unwrap(), vec![100]);
        assert_eq!(
            *widgets.calls.lock().unwrap(),
            vec!["init_search", "toggle_nav"]
        );

        let hits = sink.hits();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|hit| hit.kind == HitKind::Pageview));
        assert_eq!(hits[0].location.as_deref(), Some("/home"));
        assert_eq!(hits[1].location.as_deref(), Some("/about"));
        assert_eq!(shell.phase(), LoadPhase::Warmed);
    }

    #[test]
    fn test_configured_delay_reaches_progress_indicator() {
        let progress = StubProgress::default();
        let config = Config {
            progress_delay_ms: 250,
            analytics_endpoint: None,
        };

        let shell = Shell::new(config, progress.clone(), StubWidgets::default()).unwrap();
        shell.dispatch(LifecycleEvent::DomReady).unwrap();

        assert_eq!(*progress.delays.lock().unwrap(), vec![250]);
    }

    #[test]
    fn test_analytics_endpoint_requires_runtime() {
        let config = Config {
            progress_delay_ms: 100,
            analytics_endpoint: Some("https://collect.example.com/hit".to_string()),
        };

        let result = Shell::new(config, StubProgress::default(), StubWidgets::default());
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_analytics_endpoint_resolved_on_runtime() {
        let config = Config {
            progress_delay_ms: 100,
            analytics_endpoint: Some("https://collect.example.com/hit".to_string()),
        };

        let shell = Shell::new(config, StubProgress::default(), StubWidgets::default()).unwrap();
        shell
            .dispatch(LifecycleEvent::PageLoad {
                url: "/home".to_string(),
            })
            .unwrap();

        assert_eq!(shell.phase(), LoadPhase::Warmed);
    }
}
