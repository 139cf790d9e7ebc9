//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::calendar::DateTime;
use crate::time::Ticks;

/// Highest GPIO number on the target (GPIO0..=GPIO29)
pub const MAX_GPIO: u8 = 29;

/// Largest panel dimension accepted
pub const MAX_PANEL_DIMENSION: u16 = 320;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A time interval that must be positive is zero
    ZeroInterval,
    /// Panel width or height is zero or too large
    PanelTooLarge,
    /// Pin number outside the GPIO range
    InvalidPin(u8),
    /// The same pin is assigned twice
    PinConflict(u8),
    /// Init clock faster than the run clock
    ClockOrder,
}

/// Button debounce parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DebounceConfig {
    /// Delay between confirmation polls
    pub interval: Ticks,
    /// Consecutive confirmations needed before an event is published
    pub min_confirmations: u16,
    /// Button pulls the line low when pressed
    pub active_low: bool,
}

impl DebounceConfig {
    pub const fn new() -> Self {
        Self {
            interval: Ticks::per_second_shift(4),
            min_confirmations: 2,
            active_low: true,
        }
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// GPIO assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinMap {
    pub button: u8,
    pub led_red: u8,
    pub led_green: u8,
    pub led_blue: u8,
    pub spi_sck: u8,
    pub spi_mosi: u8,
    pub display_dc: u8,
    pub display_rst: u8,
    pub display_bl: u8,
}

impl PinMap {
    fn all(&self) -> [u8; 9] {
        [
            self.button,
            self.led_red,
            self.led_green,
            self.led_blue,
            self.spi_sck,
            self.spi_mosi,
            self.display_dc,
            self.display_rst,
            self.display_bl,
        ]
    }

    /// Check range and uniqueness of every assignment
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pins = self.all();
        for (i, &pin) in pins.iter().enumerate() {
            if pin > MAX_GPIO {
                return Err(ConfigError::InvalidPin(pin));
            }
            if pins[..i].contains(&pin) {
                return Err(ConfigError::PinConflict(pin));
            }
        }
        Ok(())
    }
}

/// Panel parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplaySettings {
    pub width: u16,
    pub height: u16,
    /// SPI clock during the init sequence
    pub init_clock_hz: u32,
    /// SPI clock once the panel is up
    pub run_clock_hz: u32,
    /// Rotation index applied after boot (taken modulo 4)
    pub rotation: u8,
    /// Swap width/height on every rotation call instead of following
    /// the row/column exchange bit
    pub swap_on_every_rotation: bool,
}

/// Application timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingSettings {
    /// Display stays on this long after being woken or after the stopwatch stops
    pub display_timeout: Ticks,
    /// Clock view refresh period
    pub clock_refresh: Ticks,
    /// Stopwatch redraw period
    pub stopwatch_frame: Ticks,
    /// Display timeout pushed forward by each stopwatch frame
    pub stopwatch_linger: Ticks,
    /// Watchdog feed period
    pub watchdog_feed: Ticks,
}

impl TimingSettings {
    pub const fn new() -> Self {
        Self {
            display_timeout: Ticks::from_secs(12),
            clock_refresh: Ticks::from_secs(1),
            stopwatch_frame: Ticks::per_second_shift(4),
            stopwatch_linger: Ticks::from_secs(2),
            watchdog_feed: Ticks::per_second_shift(1),
        }
    }
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// Wall clock seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockSettings {
    /// Unix time at boot
    pub epoch_seconds: u32,
    /// Local offset from UTC
    pub utc_offset_minutes: i16,
}

impl ClockSettings {
    /// Unix time after `uptime_secs` seconds, saturating at `u32::MAX`
    pub fn unix_seconds(&self, uptime_secs: u64) -> u32 {
        let secs = (self.epoch_seconds as u64).saturating_add(uptime_secs);
        secs.min(u32::MAX as u64) as u32
    }

    /// Local calendar time after `uptime_secs` seconds
    pub fn local_time(&self, uptime_secs: u64) -> DateTime {
        DateTime::from_epoch_with_offset(self.unix_seconds(uptime_secs), self.utc_offset_minutes)
    }
}

/// Complete board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    pub pins: PinMap,
    pub display: DisplaySettings,
    pub debounce: DebounceConfig,
    pub timing: TimingSettings,
    pub clock: ClockSettings,
}

impl BoardConfig {
    /// Validate the whole configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pins.validate()?;

        let d = &self.display;
        if d.width == 0
            || d.height == 0
            || d.width > MAX_PANEL_DIMENSION
            || d.height > MAX_PANEL_DIMENSION
        {
            return Err(ConfigError::PanelTooLarge);
        }
        if d.init_clock_hz == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if d.init_clock_hz > d.run_clock_hz {
            return Err(ConfigError::ClockOrder);
        }

        let t = &self.timing;
        let intervals = [
            self.debounce.interval,
            t.display_timeout,
            t.clock_refresh,
            t.stopwatch_frame,
            t.stopwatch_linger,
            t.watchdog_feed,
        ];
        if intervals.contains(&Ticks::ZERO) {
            return Err(ConfigError::ZeroInterval);
        }

        Ok(())
    }
}
