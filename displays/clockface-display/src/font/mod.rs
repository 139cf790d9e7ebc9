//! Fixed bitmap fonts
//!
//! Glyph rows are stored top to bottom, one `u16` per row, with the
//! leftmost pixel in bit 15. Glyph `c` starts at row
//! `(c - first) * height`.

mod glyphs;

use glyphs::{GLYPHS_12X16, GLYPHS_6X8};

/// Bitmap font descriptor
#[derive(Debug, Clone, Copy)]
pub struct Font {
    /// Glyph cell width in pixels (at most 16)
    pub width: u8,
    /// Glyph cell height in pixels
    pub height: u8,
    /// First addressable character
    pub first: char,
    /// Last addressable character
    pub last: char,
    rows: &'static [u16],
}

/// 6x8 cell, 5x7 glyphs
pub static FONT_6X8: Font = Font::new(6, 8, ' ', '~', &GLYPHS_6X8);

/// 12x16 cell, the 6x8 face doubled
pub static FONT_12X16: Font = Font::new(12, 16, ' ', '~', &GLYPHS_12X16);

impl Font {
    /// Describe a font table
    ///
    /// Panics (at compile time for statics) if the table is too short
    /// for the character range or the cell is wider than a row word.
    pub const fn new(width: u8, height: u8, first: char, last: char, rows: &'static [u16]) -> Self {
        assert!(width >= 1 && width <= 16);
        assert!(height >= 1);
        assert!(first as u32 <= last as u32);
        let glyphs = (last as u32 - first as u32 + 1) as usize;
        assert!(rows.len() >= glyphs * height as usize);
        Self {
            width,
            height,
            first,
            last,
            rows,
        }
    }

    /// Whether `ch` has its own glyph
    pub fn supports(&self, ch: char) -> bool {
        (self.first..=self.last).contains(&ch)
    }

    /// Rows of the glyph for `ch`
    ///
    /// Characters outside the font map to the first glyph.
    pub fn glyph(&self, ch: char) -> &'static [u16] {
        let index = if self.supports(ch) {
            (ch as u32 - self.first as u32) as usize
        } else {
            0
        };
        let height = self.height as usize;
        let start = index * height;
        &self.rows[start..start + height]
    }

    /// Width of `text` when drawn on a single line
    pub fn text_width(&self, text: &str) -> u32 {
        text.chars().count() as u32 * self.width as u32
    }
}
