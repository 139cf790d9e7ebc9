//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod app;
pub mod button;
pub mod watchdog;

pub use app::app_task;
pub use button::button_task;
pub use watchdog::watchdog_task;
