//! Frontend widget hooks
//!
//! The implementations live with the host frontend; the lifecycle layer
//! only decides when they run.

use crate::Result;

pub trait WidgetHooks {
    /// Rebind the search widget to the freshly swapped document.
    fn init_search(&self) -> Result<()>;

    /// Reset the navigation menu toggle.
    fn toggle_nav(&self) -> Result<()>;
}
