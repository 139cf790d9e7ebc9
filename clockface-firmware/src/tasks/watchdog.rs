//! Watchdog task

use defmt::*;
use embassy_rp::watchdog::Watchdog;
use embassy_time::{Duration, Ticker};

use clockface_core::Ticks;

/// Missed feeds tolerated before the watchdog resets the chip
const MISSED_FEEDS: u32 = 4;

#[embassy_executor::task]
pub async fn watchdog_task(mut watchdog: Watchdog, feed: Ticks) {
    let period = Duration::from_millis(feed.as_millis() as u64);
    info!("Watchdog task started, feeding every {} ms", feed.as_millis());

    watchdog.start(period * MISSED_FEEDS);
    let mut ticker = Ticker::every(period);
    loop {
        watchdog.feed();
        ticker.next().await;
    }
}
