//! Lantern Core
//!
//! Central coordination for the Lantern shell's page lifecycle. Rust owns
//! lifecycle state; the WebView is a stateless renderer driven through the
//! collaborator seams.

mod config;
mod error;
mod shell;

pub use config::Config;
pub use error::CoreError;
pub use shell::Shell;

// Re-export the component surface
pub use lantern_analytics::{AnalyticsSink, HitKind, HitRecord, HttpSink, MemorySink};
pub use lantern_lifecycle::{
    LifecycleEvent, LifecycleHandler, LoadPhase, ProgressIndicator, WidgetHooks,
    DEFAULT_PROGRESS_DELAY,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
