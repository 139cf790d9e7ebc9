//! Button debouncing
//!
//! Converts edge interrupts into confirmed press, release and click
//! events. After the first edge the interrupts for the channel are
//! disabled and the pin is re-sampled on a fixed cadence until the state
//! is confirmed or the edge is rejected as contact bounce.
//!
//! ```text
//!            edge (press wins if both)          pin released, count < threshold
//!   Idle ───────────────────────────► ConfirmingFall ───────────────────────► Idle
//!    ▲  ▲                                  │   ▲  held: count += 1            (bounce)
//!    │  │                                  │   └──┘  count == threshold → Pressed
//!    │  │  release seen, count ≥ threshold │
//!    │  └──────────────── Click ◄──────────┘
//!    │
//!    │  released for threshold + 1 polls: Released
//!    └──────────────────────────────── ConfirmingRise ◄── release edge
//!                                  (pressed again first: bounce)
//! ```
//!
//! The engine never waits. The caller runs [`Debouncer::step`] once right
//! after [`Debouncer::on_edge`] accepts an edge, then again after each
//! [`Step::Continue`] delay, until [`Step::Done`].
//!
//! Edge names follow the default active-low wiring, where a press pulls
//! the line low. With `active_low = false` the press edge is rising.

use clockface_hal::{EdgeInterrupt, Edges, InputPin};

use crate::config::DebounceConfig;
use crate::signal::{ButtonEvent, EventSink};
use crate::time::Ticks;

/// Debouncer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Both edges armed, nothing in flight
    Idle,
    /// Press edge seen, confirming the button stays down
    ConfirmingFall,
    /// Release edge seen, confirming the button stays up
    ConfirmingRise,
}

/// Result of one confirmation poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Poll again after this delay
    Continue(Ticks),
    /// Sequence resolved, edges re-armed
    Done,
}

/// Debounce engine for one button channel
pub struct Debouncer<P> {
    pin: P,
    config: DebounceConfig,
    phase: Phase,
    /// Consecutive confirmation polls in the current sequence
    count: u16,
    /// Pressed already published in the current sequence
    announced: bool,
}

impl<P: InputPin + EdgeInterrupt> Debouncer<P> {
    /// Take ownership of the pin and arm both edges
    pub fn new(mut pin: P, config: DebounceConfig) -> Self {
        pin.enable_edges(Edges::BOTH);
        Self {
            pin,
            config,
            phase: Phase::Idle,
            count: 0,
            announced: false,
        }
    }

    /// Interrupt-context entry point
    ///
    /// Disables both edges and starts a confirmation sequence. Returns
    /// `true` when the caller must schedule [`step`](Self::step) for
    /// immediate dispatch. Edges reported while a sequence is in flight
    /// are ignored.
    pub fn on_edge(&mut self, edges: Edges) -> bool {
        if self.phase != Phase::Idle || edges.is_empty() {
            return false;
        }

        self.pin.disable_edges(Edges::BOTH);
        self.phase = if edges.contains(self.press_edge()) {
            Phase::ConfirmingFall
        } else {
            Phase::ConfirmingRise
        };
        self.count = 0;
        self.announced = false;
        true
    }

    /// Run one confirmation poll
    pub fn step<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Step {
        match self.phase {
            Phase::Idle => Step::Done,
            Phase::ConfirmingFall => self.confirm_press(sink),
            Phase::ConfirmingRise => self.confirm_release(sink),
        }
    }

    fn confirm_press<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Step {
        let threshold = self.config.min_confirmations;

        // Announced before sampling, so a press that lasts exactly
        // `threshold` polls still reports both Pressed and Click.
        if self.count == threshold && !self.announced {
            self.announced = true;
            sink.publish(ButtonEvent::Pressed);
        }

        if self.is_pressed() {
            self.count = self.count.saturating_add(1);
            return Step::Continue(self.config.interval);
        }

        if self.count >= threshold {
            sink.publish(ButtonEvent::Click {
                count: self.count,
                duration: self.config.interval.saturating_mul(self.count),
            });
        }
        self.finish()
    }

    fn confirm_release<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Step {
        if !self.is_pressed() {
            if self.count < self.config.min_confirmations {
                self.count += 1;
                return Step::Continue(self.config.interval);
            }
            sink.publish(ButtonEvent::Released);
        }
        self.finish()
    }

    fn finish(&mut self) -> Step {
        self.phase = Phase::Idle;
        self.count = 0;
        self.announced = false;
        self.pin.enable_edges(Edges::BOTH);
        Step::Done
    }

    fn press_edge(&self) -> Edges {
        if self.config.active_low {
            Edges::FALLING
        } else {
            Edges::RISING
        }
    }

    fn is_pressed(&self) -> bool {
        self.pin.is_low() == self.config.active_low
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Confirmation polls so far in the current sequence
    pub fn count(&self) -> u16 {
        self.count
    }

    pub fn config(&self) -> &DebounceConfig {
        &self.config
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }

    /// Mutable pin access, e.g. to await the next armed edge
    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }

    pub fn release(self) -> P {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;
    use proptest::prelude::*;
    use std::vec::Vec as StdVec;

    /// Mock button line with an edge gate
    struct MockButton {
        low: bool,
        enabled: Edges,
    }

    impl MockButton {
        fn released() -> Self {
            Self {
                low: false,
                enabled: Edges::NONE,
            }
        }
    }

    impl InputPin for MockButton {
        fn is_high(&self) -> bool {
            !self.low
        }
    }

    impl EdgeInterrupt for MockButton {
        fn enable_edges(&mut self, edges: Edges) {
            self.enabled = self.enabled.union(edges);
        }

        fn disable_edges(&mut self, edges: Edges) {
            self.enabled = self.enabled.difference(edges);
        }

        fn enabled_edges(&self) -> Edges {
            self.enabled
        }
    }

    type Events = Vec<ButtonEvent, 32>;

    /// Drive a debouncer over a level trace, one entry per poll interval.
    ///
    /// `trace[t]` is true while the (active-low) button is held. Level
    /// changes raise the matching edge, delivered only while armed. An
    /// accepted edge is stepped in the same tick; each `Continue` steps
    /// again on the next tick.
    fn simulate(initially_held: bool, threshold: u16, trace: &[bool]) -> Events {
        let config = DebounceConfig {
            interval: Ticks(62),
            min_confirmations: threshold,
            active_low: true,
        };
        let mut pin = MockButton::released();
        pin.low = initially_held;
        let mut deb = Debouncer::new(pin, config);
        let mut events = Events::new();
        let mut previous = initially_held;
        let mut active = false;

        for &held in trace {
            deb.pin_mut().low = held;
            if held != previous {
                let edge = if held { Edges::FALLING } else { Edges::RISING };
                if deb.pin().enabled_edges().contains(edge) && deb.on_edge(edge) {
                    active = true;
                }
            }
            previous = held;

            if active {
                active = matches!(deb.step(&mut events), Step::Continue(_));
            }
        }
        events
    }

    fn held_for(ticks: usize, then_released: usize) -> StdVec<bool> {
        let mut trace = StdVec::new();
        trace.extend(core::iter::repeat(true).take(ticks));
        trace.extend(core::iter::repeat(false).take(then_released));
        trace
    }

    #[test]
    fn test_new_arms_both_edges() {
        let deb = Debouncer::new(MockButton::released(), DebounceConfig::default());
        assert_eq!(deb.pin().enabled_edges(), Edges::BOTH);
        assert!(deb.is_idle());
    }

    #[test]
    fn test_edge_disarms_and_prefers_press() {
        let mut deb = Debouncer::new(MockButton::released(), DebounceConfig::default());
        assert!(deb.on_edge(Edges::BOTH));
        assert_eq!(deb.phase(), Phase::ConfirmingFall);
        assert_eq!(deb.pin().enabled_edges(), Edges::NONE);

        // Already confirming: a second edge is ignored
        assert!(!deb.on_edge(Edges::RISING));
        assert_eq!(deb.phase(), Phase::ConfirmingFall);
    }

    #[test]
    fn test_empty_edge_set_is_ignored() {
        let mut deb = Debouncer::new(MockButton::released(), DebounceConfig::default());
        assert!(!deb.on_edge(Edges::NONE));
        assert!(deb.is_idle());
    }

    #[test]
    fn test_step_when_idle_is_done() {
        let mut deb = Debouncer::new(MockButton::released(), DebounceConfig::default());
        let mut events = Events::new();
        assert_eq!(deb.step(&mut events), Step::Done);
        assert!(events.is_empty());
    }

    #[test]
    fn test_short_press_is_rejected() {
        // Held for a single poll, below the threshold of 2
        let events = simulate(false, 2, &held_for(1, 6));
        assert!(events.is_empty());
    }

    #[test]
    fn test_press_at_threshold_reports_pressed_and_click() {
        let events = simulate(false, 2, &held_for(2, 6));
        assert_eq!(
            &events[..],
            &[
                ButtonEvent::Pressed,
                ButtonEvent::Click {
                    count: 2,
                    duration: Ticks(124),
                },
            ]
        );
    }

    #[test]
    fn test_long_press_click_duration() {
        let events = simulate(false, 2, &held_for(16, 4));
        assert_eq!(
            &events[..],
            &[
                ButtonEvent::Pressed,
                ButtonEvent::Click {
                    count: 16,
                    duration: Ticks(16 * 62),
                },
            ]
        );
    }

    #[test]
    fn test_pressed_published_on_threshold_tick() {
        let mut pin = MockButton::released();
        pin.low = true;
        let mut deb = Debouncer::new(pin, DebounceConfig::default());
        let mut events = Events::new();

        assert!(deb.on_edge(Edges::FALLING));
        assert_eq!(deb.step(&mut events), Step::Continue(Ticks(62)));
        assert_eq!(deb.step(&mut events), Step::Continue(Ticks(62)));
        assert!(events.is_empty());
        assert_eq!(deb.count(), 2);

        assert_eq!(deb.step(&mut events), Step::Continue(Ticks(62)));
        assert_eq!(&events[..], &[ButtonEvent::Pressed]);

        // Still held: no second Pressed
        deb.step(&mut events);
        deb.step(&mut events);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_edges_rearmed_after_sequence() {
        let mut pin = MockButton::released();
        pin.low = true;
        let mut deb = Debouncer::new(pin, DebounceConfig::default());
        let mut events = Events::new();

        deb.on_edge(Edges::FALLING);
        while deb.count() < 3 {
            deb.step(&mut events);
        }
        assert_eq!(deb.pin().enabled_edges(), Edges::NONE);

        deb.pin_mut().low = false;
        assert_eq!(deb.step(&mut events), Step::Done);
        assert!(deb.is_idle());
        assert_eq!(deb.pin().enabled_edges(), Edges::BOTH);
        assert_eq!(deb.count(), 0);
    }

    #[test]
    fn test_release_confirmed_after_threshold_plus_one_polls() {
        let mut trace = StdVec::new();
        trace.extend([true, true]);
        trace.extend([false; 3]);
        let events = simulate(true, 2, &trace);
        assert_eq!(&events[..], &[ButtonEvent::Released]);
    }

    #[test]
    fn test_release_bounce_is_rejected() {
        // Up for two polls, then down again before confirmation completes
        let trace = [true, false, false, true, true, true];
        let events = simulate(true, 2, &trace);
        assert!(!events.contains(&ButtonEvent::Released));
    }

    #[test]
    fn test_release_after_click_is_not_reported() {
        // The release edge of a confirmed press happens while disarmed
        let events = simulate(false, 2, &held_for(5, 10));
        assert!(!events.contains(&ButtonEvent::Released));
    }

    #[test]
    fn test_fall_with_bounced_level_rejects_then_rearms() {
        // The falling edge is reported, but the contact has already
        // bounced back up by the first poll
        let mut deb = Debouncer::new(MockButton::released(), DebounceConfig::default());
        let mut events = Events::new();

        assert!(deb.on_edge(Edges::FALLING));
        assert_eq!(deb.phase(), Phase::ConfirmingFall);
        assert_eq!(deb.step(&mut events), Step::Done);
        assert!(events.is_empty());
        assert_eq!(deb.pin().enabled_edges(), Edges::BOTH);

        // The settled press that follows is still confirmed
        deb.pin_mut().low = true;
        assert!(deb.on_edge(Edges::FALLING));
        for _ in 0..3 {
            deb.step(&mut events);
        }
        assert_eq!(&events[..], &[ButtonEvent::Pressed]);
    }

    #[test]
    fn test_active_high_wiring() {
        let config = DebounceConfig {
            active_low: false,
            ..DebounceConfig::default()
        };
        let mut deb = Debouncer::new(MockButton::released(), config);
        let mut events = Events::new();

        // Line high means pressed
        deb.pin_mut().low = false;
        assert!(deb.on_edge(Edges::RISING));
        assert_eq!(deb.phase(), Phase::ConfirmingFall);
        for _ in 0..3 {
            deb.step(&mut events);
        }
        deb.pin_mut().low = true;
        assert_eq!(deb.step(&mut events), Step::Done);
        assert_eq!(
            &events[..],
            &[
                ButtonEvent::Pressed,
                ButtonEvent::Click {
                    count: 3,
                    duration: Ticks(186),
                },
            ]
        );
    }

    #[test]
    fn test_stuck_button_keeps_polling_and_saturates() {
        let mut pin = MockButton::released();
        pin.low = true;
        let mut deb = Debouncer::new(pin, DebounceConfig::default());
        let mut events = Events::new();

        deb.on_edge(Edges::FALLING);
        for _ in 0..70_000u32 {
            assert_eq!(deb.step(&mut events), Step::Continue(Ticks(62)));
        }
        assert_eq!(deb.count(), u16::MAX);
        assert_eq!(&events[..], &[ButtonEvent::Pressed]);
        assert_eq!(deb.pin().enabled_edges(), Edges::NONE);

        deb.pin_mut().low = false;
        deb.step(&mut events);
        assert_eq!(
            events.last(),
            Some(&ButtonEvent::Click {
                count: u16::MAX,
                duration: Ticks(62 * u16::MAX as u32),
            })
        );
    }

    #[test]
    fn test_zero_threshold_reports_on_first_poll() {
        let config = DebounceConfig {
            min_confirmations: 0,
            ..DebounceConfig::default()
        };
        let mut pin = MockButton::released();
        pin.low = true;
        let mut deb = Debouncer::new(pin, config);
        let mut events = Events::new();

        deb.on_edge(Edges::FALLING);
        deb.step(&mut events);
        assert_eq!(&events[..], &[ButtonEvent::Pressed]);
    }

    proptest! {
        #[test]
        fn prop_bounce_never_publishes(
            threshold in 2u16..6,
            runs in proptest::collection::vec(1usize..6, 1..20),
        ) {
            // Alternate held/released runs, each shorter than the threshold
            let mut trace = StdVec::new();
            let mut held = true;
            for run in runs {
                let run = run.min(threshold as usize - 1).max(1);
                trace.extend(core::iter::repeat(held).take(run));
                held = !held;
            }
            trace.extend(core::iter::repeat(false).take(threshold as usize + 4));

            let events = simulate(false, threshold, &trace);
            prop_assert!(events.is_empty());
        }

        #[test]
        fn prop_click_duration_matches_hold(
            threshold in 1u16..5,
            extra in 0usize..40,
        ) {
            let held = threshold as usize + extra;
            let events = simulate(false, threshold, &held_for(held, 3));
            prop_assert_eq!(events.len(), 2);
            prop_assert_eq!(events[0], ButtonEvent::Pressed);
            prop_assert_eq!(
                events[1],
                ButtonEvent::Click {
                    count: held as u16,
                    duration: Ticks(62 * held as u32),
                }
            );
        }
    }
}
