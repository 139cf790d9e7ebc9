//! Inter-task communication channels
//!
//! Button events flow from the button task to the app task through a
//! bounded channel.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use portable_atomic::{AtomicU32, Ordering};

use clockface_core::signal::{ButtonEvent, EventSink};

/// Channel capacity for button events
const EVENT_CHANNEL_SIZE: usize = 8;

/// Confirmed button events (button task to app task)
pub static EVENT_CHANNEL: Channel<CriticalSectionRawMutex, ButtonEvent, EVENT_CHANNEL_SIZE> =
    Channel::new();

/// Events lost because the app task fell behind
pub static DROPPED_EVENTS: AtomicU32 = AtomicU32::new(0);

/// Debouncer sink that forwards into [`EVENT_CHANNEL`]
pub struct ChannelSink;

impl EventSink for ChannelSink {
    fn publish(&mut self, event: ButtonEvent) {
        if EVENT_CHANNEL.try_send(event).is_err() {
            let dropped = DROPPED_EVENTS.fetch_add(1, Ordering::Relaxed) + 1;
            warn!("Event channel full, dropped {} ({} total)", event, dropped);
        }
    }
}
