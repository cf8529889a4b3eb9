//! Analytics error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid measurement endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}
