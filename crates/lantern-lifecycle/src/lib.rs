//! Lantern Page Lifecycle
//!
//! Per PRD Section 4:
//! - The progress indicator stays hidden for fast transitions (display
//!   delay configured once at document ready).
//! - Every completed page load is reported as a page view when analytics
//!   is wired.
//! - Frontend widgets are reinitialized after every page transition except
//!   the very first; the initial render binds them itself.

mod error;
mod event;
mod handler;
mod phase;
mod progress;
mod widgets;

pub use error::LifecycleError;
pub use event::LifecycleEvent;
pub use handler::LifecycleHandler;
pub use phase::LoadPhase;
pub use progress::{ProgressIndicator, DEFAULT_PROGRESS_DELAY};
pub use widgets::WidgetHooks;

pub type Result<T> = std::result::Result<T, LifecycleError>;
