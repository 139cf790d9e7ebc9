//! Publish/subscribe for button events
//!
//! Event identity is an explicit [`EventKind`] tag. Subscribers register
//! against a kind in a fixed-size table; publishing queues one
//! [`Delivery`] per subscriber, which the owner drains and dispatches.

pub mod bus;
pub mod events;

pub use bus::{Delivery, SignalBus, SignalError};
pub use events::{ButtonEvent, EventKind, EventSink};
