//! GPIO implementations for RP2040
//!
//! Wraps embassy-rp pins in the `clockface-hal` traits.

use clockface_hal::{EdgeInterrupt, Edges, InputPin, OutputPin};
use embassy_rp::gpio::{Input, Level, Output, Pin, Pull, SlewRate};
use embassy_rp::Peri;

/// Number of user GPIOs on the RP2040 (GPIO0..=GPIO29)
pub const GPIO_COUNT: usize = 30;

/// Push-pull output pin
pub struct RpOutput<'d> {
    pin: Output<'d>,
}

impl<'d> RpOutput<'d> {
    /// Create an output driven to `initial`
    pub fn new(pin: Peri<'d, impl Pin>, initial: Level) -> Self {
        Self {
            pin: Output::new(pin, initial),
        }
    }

    /// Create an output with a slow slew rate (status LEDs)
    pub fn new_slow(pin: Peri<'d, impl Pin>, initial: Level) -> Self {
        let mut pin = Output::new(pin, initial);
        pin.set_slew_rate(SlewRate::Slow);
        Self { pin }
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn toggle(&mut self) {
        self.pin.toggle();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Button input with software-gated edge interrupts
///
/// The RP2040 edge detector is armed by the embassy wait futures, so an
/// edge that happens while the gate is closed is never latched. Closing
/// the gate therefore doubles as clearing any pending edge.
pub struct ButtonInput<'d> {
    input: Input<'d>,
    enabled: Edges,
}

impl<'d> ButtonInput<'d> {
    /// Configure `pin` as an input with the internal pull-up, both edges armed
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        Self {
            input: Input::new(pin, Pull::Up),
            enabled: Edges::BOTH,
        }
    }

    /// Wait for the next enabled edge
    ///
    /// Reports the edge of the detector it waited on, never a level read
    /// after waking. With both edges armed the idle level picks the
    /// detector: a high line can only fall next. Never resolves while
    /// every edge is disabled.
    pub async fn wait_for_edge(&mut self) -> Edges {
        loop {
            let armed = if self.enabled == Edges::BOTH {
                next_edge(self.input.is_high())
            } else {
                self.enabled
            };
            if armed == Edges::FALLING {
                self.input.wait_for_falling_edge().await;
                return Edges::FALLING;
            } else if armed == Edges::RISING {
                self.input.wait_for_rising_edge().await;
                return Edges::RISING;
            }
            core::future::pending::<()>().await;
        }
    }
}

/// The only edge a line at the given level can produce next
fn next_edge(high: bool) -> Edges {
    if high {
        Edges::FALLING
    } else {
        Edges::RISING
    }
}

impl InputPin for ButtonInput<'_> {
    fn is_high(&self) -> bool {
        self.input.is_high()
    }
}

impl EdgeInterrupt for ButtonInput<'_> {
    fn enable_edges(&mut self, edges: Edges) {
        self.enabled = self.enabled.union(edges);
    }

    fn disable_edges(&mut self, edges: Edges) {
        self.enabled = self.enabled.difference(edges);
    }

    fn enabled_edges(&self) -> Edges {
        self.enabled
    }
}
