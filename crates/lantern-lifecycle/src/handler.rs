//! Navigation lifecycle handler
//!
//! Reacts to the two events the page-acceleration layer fires: document
//! ready (once per loaded page) and page load (once per navigation,
//! including the first).

use std::sync::Arc;
use std::time::Duration;

use lantern_analytics::{AnalyticsSink, HitKind};

use crate::phase::LoadPhase;
use crate::progress::{ProgressIndicator, DEFAULT_PROGRESS_DELAY};
use crate::widgets::WidgetHooks;
use crate::Result;

pub struct LifecycleHandler<P, W> {
    progress: P,
    widgets: W,
    /// Optional capability, resolved once at setup
    analytics: Option<Arc<dyn AnalyticsSink>>,
    progress_delay: Duration,
    phase: LoadPhase,
}

impl<P, W> LifecycleHandler<P, W>
where
    P: ProgressIndicator,
    W: WidgetHooks,
{
    pub fn new(progress: P, widgets: W) -> Self {
        Self {
            progress,
            widgets,
            analytics: None,
            progress_delay: DEFAULT_PROGRESS_DELAY,
            phase: LoadPhase::Fresh,
        }
    }

    /// Attach the analytics capability.
    pub fn set_analytics(&mut self, sink: Arc<dyn AnalyticsSink>) {
        self.analytics = Some(sink);
    }

    pub fn set_progress_delay(&mut self, delay: Duration) {
        self.progress_delay = delay;
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Document structure finished parsing.
    ///
    /// Configures the progress indicator so fast transitions do not flash
    /// it.
    pub fn on_dom_ready(&self) -> Result<()> {
        tracing::debug!(
            delay_ms = self.progress_delay.as_millis() as u64,
            "Configuring progress indicator"
        );

        self.progress.set_display_delay(self.progress_delay)
    }

    /// A navigation transition completed.
    ///
    /// Reports the page view when a sink is attached. Widget
    /// reinitialization starts with the second completed load; the initial
    /// render binds the widgets itself.
    pub fn on_page_load(&mut self, url: &str) -> Result<()> {
        if let Some(sink) = &self.analytics {
            sink.set_location(url)?;
            sink.send(HitKind::Pageview)?;
        }

        if self.phase.is_fresh() {
            self.phase = LoadPhase::Warmed;
            tracing::debug!(url = %url, "First page load, widgets keep their initial bindings");
            return Ok(());
        }

        tracing::debug!(url = %url, "Reinitializing widgets");
        self.widgets.init_search()?;
        self.widgets.toggle_nav()?;

        Ok(())
    }
}
