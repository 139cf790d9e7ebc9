//! Digital input handling

pub mod debounce;

pub use debounce::{Debouncer, Phase, Step};
