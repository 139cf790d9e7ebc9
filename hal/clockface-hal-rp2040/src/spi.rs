//! SPI master for RP2040
//!
//! Transmit-only blocking SPI, enough for a write-only panel.

use clockface_hal::spi::{Phase, Polarity, SpiConfig};
use clockface_hal::SpiBus;
use embassy_rp::spi::{self, Blocking, ClkPin, Instance, MosiPin, Spi};
use embassy_rp::Peri;

/// Blocking transmit-only SPI bus
pub struct RpSpi<'d, T: Instance> {
    spi: Spi<'d, T, Blocking>,
    frequency: u32,
}

impl<'d, T: Instance> RpSpi<'d, T> {
    /// Create the bus on `clk`/`mosi` with the given configuration
    pub fn new(
        inner: Peri<'d, T>,
        clk: Peri<'d, impl ClkPin<T> + 'd>,
        mosi: Peri<'d, impl MosiPin<T> + 'd>,
        config: SpiConfig,
    ) -> Self {
        let spi = Spi::new_blocking_txonly(inner, clk, mosi, to_rp_config(&config));
        Self {
            spi,
            frequency: config.frequency,
        }
    }
}

fn to_rp_config(config: &SpiConfig) -> spi::Config {
    let mut rp = spi::Config::default();
    rp.frequency = config.frequency;
    rp.polarity = match config.polarity {
        Polarity::IdleLow => spi::Polarity::IdleLow,
        Polarity::IdleHigh => spi::Polarity::IdleHigh,
    };
    rp.phase = match config.phase {
        Phase::CaptureOnFirstTransition => spi::Phase::CaptureOnFirstTransition,
        Phase::CaptureOnSecondTransition => spi::Phase::CaptureOnSecondTransition,
    };
    rp
}

impl<T: Instance> SpiBus for RpSpi<'_, T> {
    type Error = spi::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.spi.blocking_write(data)
    }

    fn set_frequency(&mut self, hz: u32) {
        self.spi.set_frequency(hz);
        self.frequency = hz;
    }

    fn frequency(&self) -> u32 {
        self.frequency
    }
}
