//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Lifecycle error: {0}")]
    Lifecycle(#[from] lantern_lifecycle::LifecycleError),

    #[error("Analytics error: {0}")]
    Analytics(#[from] lantern_analytics::AnalyticsError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
