//! Hit model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitKind {
    /// A completed page view
    Pageview,
}

impl HitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HitKind::Pageview => "pageview",
        }
    }
}

impl std::fmt::Display for HitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A hit as captured by a buffering sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitRecord {
    pub kind: HitKind,
    /// Document location in effect when the hit was sent
    pub location: Option<String>,
    pub recorded_at: DateTime<Utc>,
}
