//! SPI bus abstractions
//!
//! Provides the SPI master operations a write-only panel needs.

/// SPI bus master
///
/// Writes block until the last byte has left the shift register, so a
/// caller toggling a data/command line afterwards never clips a transfer.
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Write data without reading
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Write 16-bit words MSB-first
    ///
    /// The default splits each word into two bytes, which is what a
    /// 16-bit frame format puts on the wire.
    fn write_words(&mut self, words: &[u16]) -> Result<(), Self::Error> {
        let mut buf = [0u8; 64];
        for chunk in words.chunks(buf.len() / 2) {
            for (i, word) in chunk.iter().enumerate() {
                buf[i * 2..i * 2 + 2].copy_from_slice(&word.to_be_bytes());
            }
            self.write(&buf[..chunk.len() * 2])?;
        }
        Ok(())
    }

    /// Change the bus clock
    fn set_frequency(&mut self, hz: u32);

    /// Current bus clock in Hz
    fn frequency(&self) -> u32;
}

/// SPI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock polarity
    pub polarity: Polarity,
    /// Clock phase
    pub phase: Phase,
}

impl SpiConfig {
    /// Configuration for a given clock and mode
    pub fn new(frequency: u32, mode: Mode) -> Self {
        let (polarity, phase) = mode.into();
        Self {
            frequency,
            polarity,
            phase,
        }
    }
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self {
            frequency: 1_000_000, // 1 MHz
            polarity: Polarity::IdleLow,
            phase: Phase::CaptureOnFirstTransition,
        }
    }
}

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl From<Mode> for (Polarity, Phase) {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Mode0 => (Polarity::IdleLow, Phase::CaptureOnFirstTransition),
            Mode::Mode1 => (Polarity::IdleLow, Phase::CaptureOnSecondTransition),
            Mode::Mode2 => (Polarity::IdleHigh, Phase::CaptureOnFirstTransition),
            Mode::Mode3 => (Polarity::IdleHigh, Phase::CaptureOnSecondTransition),
        }
    }
}
