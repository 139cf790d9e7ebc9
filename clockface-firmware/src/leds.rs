//! Status LEDs
//!
//! The LEDs are wired active low: driving the line low lights them.

use clockface_core::app::DisplayMode;
use clockface_core::signal::ButtonEvent;
use clockface_hal_rp2040::{OutputPin, RpOutput};

/// Red, green and blue status LEDs
pub struct StatusLeds {
    red: RpOutput<'static>,
    green: RpOutput<'static>,
    blue: RpOutput<'static>,
}

impl StatusLeds {
    /// Take the LED outputs and switch all three off
    pub fn new(red: RpOutput<'static>, green: RpOutput<'static>, blue: RpOutput<'static>) -> Self {
        let mut leds = Self { red, green, blue };
        leds.red.set_high();
        leds.green.set_high();
        leds.blue.set_high();
        leds
    }

    /// Red follows the button: on once a press is confirmed, off when it ends
    pub fn on_button(&mut self, event: ButtonEvent) {
        match event {
            ButtonEvent::Pressed => self.red.set_low(),
            ButtonEvent::Released | ButtonEvent::Click { .. } => self.red.set_high(),
        }
    }

    /// Blue for the clock view, green while the stopwatch runs
    pub fn show_mode(&mut self, mode: DisplayMode) {
        let (blue, green) = match mode {
            DisplayMode::Off => (false, false),
            DisplayMode::Clock => (true, false),
            DisplayMode::Stopwatch => (false, true),
        };
        self.blue.set_state(!blue);
        self.green.set_state(!green);
    }
}
