//! Application logic
//!
//! The controller decides what the screen shows in response to button
//! events and the passage of time. It emits [`Command`]s; the firmware
//! executes them against the panel.

pub mod controller;

pub use controller::{Command, Commands, Controller, DisplayMode, Subscriber};
