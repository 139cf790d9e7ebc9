//! Board description
//!
//! `BOARD` and the pin macros are generated by build.rs from board.toml.

use clockface_core::config::{
    BoardConfig, ClockSettings, DebounceConfig, DisplaySettings, PinMap, TimingSettings,
};
use clockface_core::Ticks;
use embassy_rp::gpio::AnyPin;
use embassy_rp::Peri;

/// GPIOs taken from the peripherals for the button, LEDs and panel lines
pub struct BoardPins {
    pub button: Peri<'static, AnyPin>,
    pub led_red: Peri<'static, AnyPin>,
    pub led_green: Peri<'static, AnyPin>,
    pub led_blue: Peri<'static, AnyPin>,
    pub display_dc: Peri<'static, AnyPin>,
    pub display_rst: Peri<'static, AnyPin>,
    pub display_bl: Peri<'static, AnyPin>,
}

include!(concat!(env!("OUT_DIR"), "/board_config.rs"));
