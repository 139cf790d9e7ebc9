//! Screen layouts
//!
//! Boot banner, clock view and stopwatch line, drawn straight onto the
//! panel with the software renderer.

use core::fmt::Write;

use embassy_rp::peripherals::SPI0;
use heapless::String;

use clockface_core::calendar::DateTime;
use clockface_core::config::ClockSettings;
use clockface_core::Ticks;
use clockface_display::{DisplayError, Font, RenderExt, Rgb565, St7789, FONT_12X16};
use clockface_hal_rp2040::{RpOutput, RpSpi};

/// The board's panel session
pub type Panel =
    St7789<RpSpi<'static, SPI0>, RpOutput<'static>, RpOutput<'static>, RpOutput<'static>>;

pub type PanelError = DisplayError<embassy_rp::spi::Error>;

const FONT: &Font = &FONT_12X16;
const BACKGROUND: Rgb565 = Rgb565::BLACK;
const FOREGROUND: Rgb565 = Rgb565::WHITE;
const ACCENT: Rgb565 = Rgb565::RED;

const DATE_AT: (u16, u16) = (10, 20);
const TIME_AT: (u16, u16) = (35, 50);
/// Cells taken by `HH:MM:` before the seconds
const TIME_CELLS: u16 = 6;

/// Panel plus what is currently drawn on it
pub struct Screen {
    panel: Panel,
    clock: ClockSettings,
    /// Last time drawn by the clock view
    drawn: Option<DateTime>,
}

impl Screen {
    pub fn new(panel: Panel, clock: ClockSettings) -> Self {
        Self {
            panel,
            clock,
            drawn: None,
        }
    }

    /// Clear the panel, rotate it and draw the banner with the flag
    pub fn boot(&mut self, rotation: u8) -> Result<(), PanelError> {
        self.panel.fill(BACKGROUND)?;
        self.panel.set_rotation(rotation)?;

        let (w, h) = self.panel.size();
        let (flag_x, flag_y) = (w.saturating_sub(60), h.saturating_sub(40));
        self.panel
            .draw_string(20, flag_y, "WITH UKRAINE", FONT, FOREGROUND, BACKGROUND)?;
        self.panel.draw_filled_rect(flag_x, flag_y, 60, 20, Rgb565::BLUE)?;
        self.panel
            .draw_filled_rect(flag_x, flag_y + 20, 60, 20, Rgb565::YELLOW)?;
        Ok(())
    }

    pub fn set_enabled(&mut self, enabled: bool) -> Result<(), PanelError> {
        self.panel.set_display_enabled(enabled)
    }

    /// Draw the date and time `uptime_secs` seconds after boot
    ///
    /// The date is redrawn when the day changes and `HH:MM:` when the
    /// minute changes; the seconds are redrawn every time.
    pub fn draw_clock(&mut self, uptime_secs: u64) -> Result<(), PanelError> {
        let current = self.clock.local_time(uptime_secs);
        let previous = self.drawn.replace(current);

        if !previous.is_some_and(|p| p.same_day(&current)) {
            let (x, y) = DATE_AT;
            self.panel
                .draw_string(x, y, &current.date_string(), FONT, FOREGROUND, BACKGROUND)?;
        }

        let (x, y) = TIME_AT;
        if !previous.is_some_and(|p| p.same_minute(&current)) {
            self.panel
                .draw_string(x, y, &current.time_string(), FONT, FOREGROUND, BACKGROUND)?;
        }
        let seconds_x = x + TIME_CELLS * FONT.width as u16;
        self.panel
            .draw_string(seconds_x, y, &current.seconds_string(), FONT, ACCENT, BACKGROUND)?;
        Ok(())
    }

    /// Blank the stopwatch line
    pub fn clear_stopwatch(&mut self) -> Result<(), PanelError> {
        let (w, y) = self.stopwatch_line();
        self.panel
            .draw_filled_rect(10, y, w, FONT.height as u16, BACKGROUND)?;
        Ok(())
    }

    /// Whole seconds on the left, the tick remainder right-aligned
    pub fn draw_stopwatch(&mut self, elapsed: Ticks) -> Result<(), PanelError> {
        let (secs, ticks) = elapsed.split_seconds();
        let mut seconds: String<10> = String::new();
        let _ = write!(seconds, "{}", secs);
        let mut fraction: String<4> = String::new();
        let _ = write!(fraction, "{:03}", ticks);

        let (w, y) = self.stopwatch_line();
        self.panel
            .draw_string(10, y, &seconds, FONT, FOREGROUND, BACKGROUND)?;

        let fraction_x = (w as u32).saturating_sub(FONT.text_width(&fraction) + 10) as u16;
        self.panel
            .draw_string(fraction_x, y, &fraction, FONT, ACCENT, BACKGROUND)?;
        Ok(())
    }

    /// Panel width and the top row of the stopwatch line
    fn stopwatch_line(&self) -> (u16, u16) {
        let (w, h) = self.panel.size();
        (w, (h / 2).saturating_sub(10))
    }
}
