//! RP2040-specific HAL for the clockface firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `clockface-hal` traits on top of embassy-rp:
//!
//! - Push-pull outputs for the panel control lines and status LEDs
//! - A button input whose edge interrupts can be gated in software
//! - A blocking SPI master with a runtime-adjustable clock

#![no_std]

pub mod gpio;
pub mod spi;

pub use gpio::{ButtonInput, RpOutput, GPIO_COUNT};
pub use spi::RpSpi;

// Re-export shared traits from clockface-hal for convenience
pub use clockface_hal::{EdgeInterrupt, Edges, InputPin, OutputPin, SpiBus};
