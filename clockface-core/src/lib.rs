//! Board-agnostic core logic for the clockface firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Button debouncing (edge interrupt to confirmed events)
//! - Signal bus with typed event kinds and a subscriber table
//! - Tick arithmetic and the calendar helper
//! - Display mode controller (off / clock / stopwatch)
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod app;
pub mod calendar;
pub mod config;
pub mod input;
pub mod signal;
pub mod time;

pub use time::{Ticks, TICK_HZ};
