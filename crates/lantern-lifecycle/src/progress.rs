//! Progress indicator seam

use std::time::Duration;

use crate::Result;

/// Navigations that finish inside this window never show the indicator.
pub const DEFAULT_PROGRESS_DELAY: Duration = Duration::from_millis(100);

/// Configuration handle for the host's navigation progress indicator.
pub trait ProgressIndicator {
    /// Set the threshold below which the indicator stays hidden.
    fn set_display_delay(&self, delay: Duration) -> Result<()>;
}
