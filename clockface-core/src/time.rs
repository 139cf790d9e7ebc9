//! Monotonic tick arithmetic
//!
//! One tick is one millisecond. The firmware converts ticks to
//! `embassy_time::Duration` at the edge of the system.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ticks per second
pub const TICK_HZ: u32 = 1000;

/// A tick count, either a point in time or a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ticks(pub u32);

impl Ticks {
    pub const ZERO: Self = Self(0);

    pub const fn from_millis(ms: u32) -> Self {
        Self(ms * (TICK_HZ / 1000))
    }

    pub const fn from_secs(secs: u32) -> Self {
        Self(secs * TICK_HZ)
    }

    /// One second divided by `2^shift`
    pub const fn per_second_shift(shift: u32) -> Self {
        Self(TICK_HZ >> shift)
    }

    pub const fn as_millis(self) -> u32 {
        self.0 / (TICK_HZ / 1000)
    }

    pub const fn saturating_mul(self, n: u16) -> Self {
        Self(self.0.saturating_mul(n as u32))
    }

    pub const fn wrapping_add(self, span: Ticks) -> Self {
        Self(self.0.wrapping_add(span.0))
    }

    /// Span from `earlier` to `self`, correct across counter wrap-around
    pub const fn wrapping_since(self, earlier: Ticks) -> Self {
        Self(self.0.wrapping_sub(earlier.0))
    }

    /// Check whether `deadline` has been reached, tolerating wrap-around
    /// for deadlines less than half the counter range away
    pub const fn has_reached(self, deadline: Ticks) -> bool {
        self.0.wrapping_sub(deadline.0) < (1 << 31)
    }

    /// Whole seconds and the tick remainder
    pub const fn split_seconds(self) -> (u32, u32) {
        (self.0 / TICK_HZ, self.0 % TICK_HZ)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixteenth_second() {
        assert_eq!(Ticks::per_second_shift(4), Ticks(62));
        assert_eq!(Ticks::per_second_shift(0), Ticks::from_secs(1));
    }

    #[test]
    fn test_saturating_mul() {
        assert_eq!(Ticks(62).saturating_mul(3), Ticks(186));
        assert_eq!(Ticks(u32::MAX).saturating_mul(2), Ticks(u32::MAX));
    }

    #[test]
    fn test_wrapping_since() {
        let start = Ticks(u32::MAX - 9);
        let now = Ticks(20);
        assert_eq!(now.wrapping_since(start), Ticks(30));
    }

    #[test]
    fn test_has_reached_across_wrap() {
        let deadline = Ticks(u32::MAX - 5).wrapping_add(Ticks(10));
        assert!(!Ticks(u32::MAX - 1).has_reached(deadline));
        assert!(Ticks(4).has_reached(deadline));
        assert!(Ticks(100).has_reached(deadline));
    }

    #[test]
    fn test_split_seconds() {
        assert_eq!(Ticks(12_345).split_seconds(), (12, 345));
    }
}
