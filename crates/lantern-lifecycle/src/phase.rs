//! Load phase
//!
//! ```text
//! Fresh
//!   ↓ first completed page load
//! Warmed
//! ```
//!
//! The transition is one-way for the lifetime of the loaded page.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPhase {
    /// No page load has completed yet; widgets still carry their initial
    /// bindings
    Fresh,
    /// At least one page load has completed
    Warmed,
}

impl LoadPhase {
    pub fn is_fresh(&self) -> bool {
        matches!(self, LoadPhase::Fresh)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoadPhase::Fresh => "fresh",
            LoadPhase::Warmed => "warmed",
        }
    }
}

impl std::fmt::Display for LoadPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
