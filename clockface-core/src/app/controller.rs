//! Display mode controller
//!
//! Mode changes are driven through the signal bus: while the display is
//! off the `EnableDisplay` subscriber listens for presses; once on, it
//! hands the press subscription to `Stopwatch`, and the timeout hands it
//! back.

use heapless::Vec;

use crate::config::TimingSettings;
use crate::signal::{ButtonEvent, Delivery, EventKind, SignalBus};
use crate::time::Ticks;

/// Subscribers on the application bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Subscriber {
    /// Wakes the display
    EnableDisplay,
    /// Starts and stops the stopwatch
    Stopwatch,
    /// Reports every button event
    EventLog,
}

/// What the screen is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    Off,
    /// Date and time, refreshed periodically
    Clock,
    /// Clock view plus a running stopwatch
    Stopwatch,
}

/// Work for the firmware to carry out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Panel and backlight on
    DisplayOn,
    /// Panel and backlight off
    DisplayOff,
    /// Redraw the date and time
    DrawClock,
    /// Blank the stopwatch line
    ClearStopwatch,
    /// Draw the stopwatch reading
    DrawStopwatch { elapsed: Ticks },
    /// Report a button event
    Log(ButtonEvent),
}

/// Commands produced by one call
pub type Commands = Vec<Command, 8>;

type AppBus = SignalBus<Subscriber, 6, 8>;

/// Display mode controller
pub struct Controller {
    bus: AppBus,
    timing: TimingSettings,
    mode: DisplayMode,
    /// When the display switches off
    off_at: Option<Ticks>,
    next_clock: Ticks,
    next_frame: Ticks,
    stopwatch_started: Ticks,
}

impl Controller {
    pub fn new(timing: TimingSettings) -> Self {
        let mut bus = AppBus::new();
        // Fresh table with room for every entry
        let _ = bus.subscribe(EventKind::Pressed, Subscriber::EnableDisplay);
        for kind in EventKind::ALL {
            let _ = bus.subscribe(kind, Subscriber::EventLog);
        }

        Self {
            bus,
            timing,
            mode: DisplayMode::Off,
            off_at: None,
            next_clock: Ticks::ZERO,
            next_frame: Ticks::ZERO,
            stopwatch_started: Ticks::ZERO,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Scheduled switch-off time, if the display is on
    pub fn off_at(&self) -> Option<Ticks> {
        self.off_at
    }

    pub fn bus(&self) -> &SignalBus<Subscriber, 6, 8> {
        &self.bus
    }

    /// Publish a button event and run every subscriber it reaches
    pub fn handle_event(&mut self, event: ButtonEvent, now: Ticks, out: &mut Commands) {
        self.bus.emit(event);
        while let Some(delivery) = self.bus.next_delivery() {
            self.dispatch(delivery, now, out);
        }
    }

    /// Advance timers
    pub fn poll(&mut self, now: Ticks, out: &mut Commands) {
        if self.mode == DisplayMode::Off {
            return;
        }

        if let Some(off_at) = self.off_at {
            if now.has_reached(off_at) {
                self.disable(out);
                return;
            }
        }

        if now.has_reached(self.next_clock) {
            let _ = out.push(Command::DrawClock);
            self.next_clock = now.wrapping_add(self.timing.clock_refresh);
        }

        if self.mode == DisplayMode::Stopwatch && now.has_reached(self.next_frame) {
            let elapsed = now.wrapping_since(self.stopwatch_started);
            let _ = out.push(Command::DrawStopwatch { elapsed });
            self.next_frame = now.wrapping_add(self.timing.stopwatch_frame);
            self.off_at = Some(now.wrapping_add(self.timing.stopwatch_linger));
        }
    }

    fn dispatch(&mut self, delivery: Delivery<Subscriber>, now: Ticks, out: &mut Commands) {
        match delivery.subscriber {
            Subscriber::EnableDisplay => self.enable(now, out),
            Subscriber::Stopwatch => self.toggle_stopwatch(now, out),
            Subscriber::EventLog => {
                let _ = out.push(Command::Log(delivery.event));
            }
        }
    }

    fn enable(&mut self, now: Ticks, out: &mut Commands) {
        self.hand_over(Subscriber::EnableDisplay, Subscriber::Stopwatch);
        self.mode = DisplayMode::Clock;
        self.off_at = Some(now.wrapping_add(self.timing.display_timeout));
        self.next_clock = now.wrapping_add(self.timing.clock_refresh);

        let _ = out.push(Command::DisplayOn);
        let _ = out.push(Command::DrawClock);
    }

    fn toggle_stopwatch(&mut self, now: Ticks, out: &mut Commands) {
        if self.mode == DisplayMode::Stopwatch {
            self.mode = DisplayMode::Clock;
            self.off_at = Some(now.wrapping_add(self.timing.display_timeout));
            return;
        }

        self.mode = DisplayMode::Stopwatch;
        self.stopwatch_started = now;
        self.next_frame = now;
        let _ = out.push(Command::ClearStopwatch);
    }

    fn disable(&mut self, out: &mut Commands) {
        self.hand_over(Subscriber::Stopwatch, Subscriber::EnableDisplay);
        self.mode = DisplayMode::Off;
        self.off_at = None;

        let _ = out.push(Command::ClearStopwatch);
        let _ = out.push(Command::DisplayOff);
    }

    /// Move the press subscription from one subscriber to another
    fn hand_over(&mut self, from: Subscriber, to: Subscriber) {
        let _ = self.bus.unsubscribe(EventKind::Pressed, from);
        if !self.bus.is_subscribed(EventKind::Pressed, to) {
            let _ = self.bus.subscribe(EventKind::Pressed, to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> Controller {
        Controller::new(TimingSettings::default())
    }

    fn press(c: &mut Controller, now: u32) -> Commands {
        let mut out = Commands::new();
        c.handle_event(ButtonEvent::Pressed, Ticks(now), &mut out);
        out
    }

    fn poll(c: &mut Controller, now: u32) -> Commands {
        let mut out = Commands::new();
        c.poll(Ticks(now), &mut out);
        out
    }

    #[test]
    fn test_starts_off_with_enable_subscribed() {
        let c = controller();
        assert_eq!(c.mode(), DisplayMode::Off);
        assert!(c.bus().is_subscribed(EventKind::Pressed, Subscriber::EnableDisplay));
        assert!(!c.bus().is_subscribed(EventKind::Pressed, Subscriber::Stopwatch));
        assert!(c.bus().is_subscribed(EventKind::Click, Subscriber::EventLog));
    }

    #[test]
    fn test_press_wakes_display() {
        let mut c = controller();
        let out = press(&mut c, 1_000);

        assert_eq!(
            &out[..],
            &[
                Command::DisplayOn,
                Command::DrawClock,
                Command::Log(ButtonEvent::Pressed),
            ]
        );
        assert_eq!(c.mode(), DisplayMode::Clock);
        assert_eq!(c.off_at(), Some(Ticks(13_000)));
        assert!(c.bus().is_subscribed(EventKind::Pressed, Subscriber::Stopwatch));
        assert!(!c.bus().is_subscribed(EventKind::Pressed, Subscriber::EnableDisplay));
    }

    #[test]
    fn test_clock_refreshes_every_second() {
        let mut c = controller();
        press(&mut c, 0);

        assert!(poll(&mut c, 500).is_empty());
        assert_eq!(&poll(&mut c, 1_000)[..], &[Command::DrawClock]);
        assert!(poll(&mut c, 1_500).is_empty());
        assert_eq!(&poll(&mut c, 2_000)[..], &[Command::DrawClock]);
    }

    #[test]
    fn test_timeout_turns_display_off() {
        let mut c = controller();
        press(&mut c, 0);

        let out = poll(&mut c, 12_000);
        assert_eq!(&out[..], &[Command::ClearStopwatch, Command::DisplayOff]);
        assert_eq!(c.mode(), DisplayMode::Off);
        assert!(c.bus().is_subscribed(EventKind::Pressed, Subscriber::EnableDisplay));
        assert!(!c.bus().is_subscribed(EventKind::Pressed, Subscriber::Stopwatch));

        // Nothing happens while off
        assert!(poll(&mut c, 20_000).is_empty());
    }

    #[test]
    fn test_second_press_starts_stopwatch() {
        let mut c = controller();
        press(&mut c, 0);
        let out = press(&mut c, 3_000);

        // The stopwatch subscribed after the logger, so it runs second
        assert_eq!(
            &out[..],
            &[Command::Log(ButtonEvent::Pressed), Command::ClearStopwatch]
        );
        assert_eq!(c.mode(), DisplayMode::Stopwatch);

        let frame = poll(&mut c, 3_000);
        assert!(frame.contains(&Command::DrawStopwatch { elapsed: Ticks(0) }));

        let frame = poll(&mut c, 3_062);
        assert!(frame.contains(&Command::DrawStopwatch { elapsed: Ticks(62) }));
    }

    #[test]
    fn test_running_stopwatch_keeps_display_on() {
        let mut c = controller();
        press(&mut c, 0);
        press(&mut c, 1_000);

        let mut now = 1_000;
        while now < 30_000 {
            let out = poll(&mut c, now);
            assert!(!out.contains(&Command::DisplayOff));
            now += 62;
        }
        assert_eq!(c.mode(), DisplayMode::Stopwatch);
    }

    #[test]
    fn test_stop_restores_full_timeout() {
        let mut c = controller();
        press(&mut c, 0);
        press(&mut c, 1_000);
        poll(&mut c, 1_000);
        press(&mut c, 5_000);

        assert_eq!(c.mode(), DisplayMode::Clock);
        assert_eq!(c.off_at(), Some(Ticks(17_000)));
        assert!(!poll(&mut c, 16_999).contains(&Command::DisplayOff));
        assert!(poll(&mut c, 17_000).contains(&Command::DisplayOff));
    }

    #[test]
    fn test_stopwatch_stops_after_linger_without_frames() {
        let mut c = controller();
        press(&mut c, 0);
        press(&mut c, 1_000);
        poll(&mut c, 1_000);

        // No polls for longer than the linger time
        let out = poll(&mut c, 3_500);
        assert!(out.contains(&Command::DisplayOff));
        assert_eq!(c.mode(), DisplayMode::Off);
        assert!(!c.bus().is_subscribed(EventKind::Pressed, Subscriber::Stopwatch));
    }

    #[test]
    fn test_click_and_release_only_logged() {
        let mut c = controller();
        let mut out = Commands::new();
        let click = ButtonEvent::Click {
            count: 5,
            duration: Ticks(310),
        };
        c.handle_event(click, Ticks(0), &mut out);
        c.handle_event(ButtonEvent::Released, Ticks(0), &mut out);

        assert_eq!(
            &out[..],
            &[Command::Log(click), Command::Log(ButtonEvent::Released)]
        );
        assert_eq!(c.mode(), DisplayMode::Off);
    }

    #[test]
    fn test_wake_cycle_repeats() {
        let mut c = controller();
        for round in 0..3u32 {
            let base = round * 20_000;
            press(&mut c, base);
            assert_eq!(c.mode(), DisplayMode::Clock);
            poll(&mut c, base + 12_000);
            assert_eq!(c.mode(), DisplayMode::Off);
        }
    }
}
