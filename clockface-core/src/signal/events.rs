//! Button event types

use crate::time::Ticks;

/// Event kind used as the subscription key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    /// Button press confirmed
    Pressed,
    /// Button release confirmed without a preceding confirmed press
    Released,
    /// Confirmed press followed by release
    Click,
}

impl EventKind {
    pub const ALL: [EventKind; 3] = [EventKind::Pressed, EventKind::Released, EventKind::Click];
}

/// Event published by the debouncer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Published once, on the tick the confirmation count reaches the threshold
    Pressed,
    /// Release held for the full confirmation window
    Released,
    /// Press ended
    Click {
        /// Number of confirmation polls that read the button as pressed
        count: u16,
        /// `count` times the poll interval
        duration: Ticks,
    },
}

impl ButtonEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ButtonEvent::Pressed => EventKind::Pressed,
            ButtonEvent::Released => EventKind::Released,
            ButtonEvent::Click { .. } => EventKind::Click,
        }
    }
}

/// Destination for published button events
pub trait EventSink {
    fn publish(&mut self, event: ButtonEvent);
}

impl<const N: usize> EventSink for heapless::Vec<ButtonEvent, N> {
    /// Events past capacity are dropped
    fn publish(&mut self, event: ButtonEvent) {
        let _ = self.push(event);
    }
}
