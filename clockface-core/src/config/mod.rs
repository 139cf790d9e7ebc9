//! Configuration types
//!
//! Board-level configuration baked into the firmware at build time.

pub mod types;

pub use types::*;
