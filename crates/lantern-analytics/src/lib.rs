//! Lantern Analytics
//!
//! Page-view reporting for the shell. The lifecycle layer only talks to an
//! [`AnalyticsSink`]; whether hits stay in memory or land on a measurement
//! endpoint is the host's wiring decision.

mod error;
mod hit;
mod http;
mod sink;

pub use error::AnalyticsError;
pub use hit::{HitKind, HitRecord};
pub use http::HttpSink;
pub use sink::{AnalyticsSink, MemorySink};

pub type Result<T> = std::result::Result<T, AnalyticsError>;
