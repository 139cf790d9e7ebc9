//! Application task
//!
//! Owns the display mode controller, the screen and the status LEDs.
//! Wakes on button events and on every stopwatch frame, and carries out
//! the commands the controller produces.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Instant, Ticker};

use clockface_core::app::{Command, Commands, Controller};
use clockface_core::config::TimingSettings;
use clockface_core::signal::ButtonEvent;
use clockface_core::Ticks;

use crate::channels::EVENT_CHANNEL;
use crate::leds::StatusLeds;
use crate::screen::{PanelError, Screen};

/// Milliseconds since boot, wrapping after 2^32
///
/// Only used for timer deadlines; the clock view reads whole seconds
/// from [`Instant`] directly.
fn now() -> Ticks {
    Ticks(Instant::now().as_millis() as u32)
}

#[embassy_executor::task]
pub async fn app_task(
    mut screen: Option<&'static mut Screen>,
    mut leds: StatusLeds,
    timing: TimingSettings,
) {
    info!("App task started");
    if screen.is_none() {
        warn!("No display, running with LEDs only");
    }

    let mut controller = Controller::new(timing);
    let mut mode = controller.mode();
    let frame = Duration::from_millis(timing.stopwatch_frame.as_millis() as u64);
    let mut ticker = Ticker::every(frame);

    loop {
        let mut commands = Commands::new();
        match select(EVENT_CHANNEL.receive(), ticker.next()).await {
            Either::First(event) => {
                leds.on_button(event);
                controller.handle_event(event, now(), &mut commands);
            }
            Either::Second(()) => controller.poll(now(), &mut commands),
        }

        for command in commands {
            match command {
                Command::Log(event) => log_event(event),
                command => {
                    if let Some(screen) = screen.as_deref_mut() {
                        if let Err(e) = execute(screen, command) {
                            error!("Display command {} failed: {}", command, e);
                        }
                    }
                }
            }
        }

        if controller.mode() != mode {
            mode = controller.mode();
            info!("Display mode: {}", mode);
            leds.show_mode(mode);
        }
    }
}

fn execute(screen: &mut Screen, command: Command) -> Result<(), PanelError> {
    match command {
        Command::DisplayOn => screen.set_enabled(true),
        Command::DisplayOff => screen.set_enabled(false),
        Command::DrawClock => screen.draw_clock(Instant::now().as_secs()),
        Command::ClearStopwatch => screen.clear_stopwatch(),
        Command::DrawStopwatch { elapsed } => screen.draw_stopwatch(elapsed),
        Command::Log(_) => Ok(()),
    }
}

fn log_event(event: ButtonEvent) {
    match event {
        ButtonEvent::Pressed => info!("button pressed"),
        ButtonEvent::Released => info!("button released"),
        ButtonEvent::Click { count, duration } => {
            info!("button clicked by {} ticks ({} polls)", duration.0, count)
        }
    }
}
