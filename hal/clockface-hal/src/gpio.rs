//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins plus the edge
//! interrupt gate a button input needs.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Toggle the pin state
    fn toggle(&mut self) {
        if self.is_set_high() {
            self.set_low();
        } else {
            self.set_high();
        }
    }

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Set of signal edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Edges(u8);

impl Edges {
    /// No edges
    pub const NONE: Self = Self(0);
    /// High-to-low transition
    pub const FALLING: Self = Self(0b01);
    /// Low-to-high transition
    pub const RISING: Self = Self(0b10);
    /// Both transitions
    pub const BOTH: Self = Self(0b11);

    /// Check whether every edge in `other` is part of this set
    pub const fn contains(self, other: Edges) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn union(self, other: Edges) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn difference(self, other: Edges) -> Self {
        Self(self.0 & !other.0)
    }
}

/// Edge interrupt gate for an input pin
///
/// Enabling an edge must discard any edge latched while it was disabled,
/// so re-arming never delivers a stale transition.
pub trait EdgeInterrupt {
    /// Enable interrupts for the given edges (others keep their state)
    fn enable_edges(&mut self, edges: Edges);

    /// Disable interrupts for the given edges (others keep their state)
    fn disable_edges(&mut self, edges: Edges);

    /// Edges currently enabled
    fn enabled_edges(&self) -> Edges;
}
