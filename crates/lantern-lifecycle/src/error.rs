//! Lifecycle error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifecycleError {
    #[error("Analytics error: {0}")]
    Analytics(#[from] lantern_analytics::AnalyticsError),

    #[error("Progress indicator error: {0}")]
    Progress(String),

    #[error("Widget error: {0}")]
    Widget(String),
}
