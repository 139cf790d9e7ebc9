//! ST7789 panel driver and software renderer
//!
//! - [`st7789`]: SPI transport, init sequence, address windows, rotation
//! - [`render`]: text, lines and filled rectangles over any [`PixelSink`]
//! - [`font`]: fixed bitmap fonts
//! - [`color`]: RGB565 colors

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod color;
pub mod font;
pub mod render;
pub mod st7789;

#[cfg(test)]
mod testing;

pub use color::Rgb565;
pub use font::{Font, FONT_12X16, FONT_6X8};
pub use render::{Clip, PixelSink, RenderExt};
pub use st7789::{DisplayError, PanelConfig, RotationGeometry, St7789, TransferWidth, Window};
