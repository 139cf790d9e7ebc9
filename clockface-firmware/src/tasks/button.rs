//! Button task
//!
//! Waits for an armed edge, then runs the debouncer's confirmation polls
//! on its own cadence until the sequence resolves.

use defmt::*;
use embassy_time::Timer;

use clockface_core::input::{Debouncer, Step};
use clockface_hal_rp2040::ButtonInput;

use crate::channels::ChannelSink;

#[embassy_executor::task]
pub async fn button_task(mut debouncer: Debouncer<ButtonInput<'static>>) {
    info!("Button task started");

    let mut sink = ChannelSink;
    loop {
        let edges = debouncer.pin_mut().wait_for_edge().await;
        if !debouncer.on_edge(edges) {
            continue;
        }
        trace!("Edge accepted, confirming");

        // First poll runs at once, later ones after the poll interval
        loop {
            match debouncer.step(&mut sink) {
                Step::Continue(delay) => Timer::after_millis(delay.as_millis() as u64).await,
                Step::Done => break,
            }
        }
        debug!("Button sequence done after {} polls", debouncer.count());
    }
}
