//! Clockface Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the button and display code is
//! written against. Chip-specific crates implement them; host tests
//! implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (clockface-firmware)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ clockface-    │       │ clockface-    │
//! │ core (button) │       │ display       │
//! └───────────────┘       └───────────────┘
//!         │                       │
//!         └───────────┬───────────┘
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  clockface-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!          ┌─────────────────────┐
//!          │ clockface-hal-rp2040│
//!          └─────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`gpio::EdgeInterrupt`] - Per-pin edge interrupt gating
//! - [`spi::SpiBus`] - SPI master writes with runtime clock changes

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use gpio::{EdgeInterrupt, Edges, InputPin, OutputPin};
pub use spi::{SpiBus, SpiConfig};
