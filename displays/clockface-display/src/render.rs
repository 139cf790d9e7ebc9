//! Software renderer
//!
//! Everything here is drawn through [`PixelSink`]: set a window, stream
//! pixels into it. Any sink gets the drawing operations through the
//! blanket [`RenderExt`] impl.

use crate::color::Rgb565;
use crate::font::Font;
use crate::st7789::{DisplayError, St7789};
use clockface_hal::{OutputPin, SpiBus};

/// Window-addressed pixel target
pub trait PixelSink {
    type Error;

    /// Logical (width, height)
    fn size(&self) -> (u16, u16);

    /// Inclusive window for the following pixels
    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), Self::Error>;

    fn write_pixel(&mut self, color: Rgb565) -> Result<(), Self::Error>;

    fn write_repeated(&mut self, color: Rgb565, count: u32) -> Result<(), Self::Error> {
        for _ in 0..count {
            self.write_pixel(color)?;
        }
        Ok(())
    }
}

impl<SPI, DC, RST, BL> PixelSink for St7789<SPI, DC, RST, BL>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
    BL: OutputPin,
{
    type Error = DisplayError<SPI::Error>;

    fn size(&self) -> (u16, u16) {
        St7789::size(self)
    }

    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), Self::Error> {
        St7789::set_window(self, x0, y0, x1, y1)
    }

    fn write_pixel(&mut self, color: Rgb565) -> Result<(), Self::Error> {
        St7789::write_pixel(self, color)
    }

    fn write_repeated(&mut self, color: Rgb565, count: u32) -> Result<(), Self::Error> {
        St7789::write_repeated(self, color, count)
    }
}

/// How a rectangle fit the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Clip {
    /// Origin off the panel, nothing drawn
    Outside,
    /// Extent cut at the panel edge
    Clipped,
    /// Drawn as requested
    Unclipped,
}

/// Drawing operations for any [`PixelSink`]
pub trait RenderExt: PixelSink {
    /// Paint the whole panel one color
    fn fill(&mut self, color: Rgb565) -> Result<(), Self::Error> {
        let (w, h) = self.size();
        if w == 0 || h == 0 {
            return Ok(());
        }
        self.set_window(0, 0, w - 1, h - 1)?;
        self.write_repeated(color, w as u32 * h as u32)
    }

    /// Draw one glyph cell with its top-left corner at (x, y)
    ///
    /// Pixels are written for the whole cell, background included.
    /// Characters the font lacks draw as its first glyph.
    fn draw_glyph(
        &mut self,
        x: u16,
        y: u16,
        ch: char,
        font: &Font,
        fg: Rgb565,
        bg: Rgb565,
    ) -> Result<(), Self::Error> {
        let x1 = x.saturating_add(font.width as u16 - 1);
        let y1 = y.saturating_add(font.height as u16 - 1);
        self.set_window(x, y, x1, y1)?;

        for &row in font.glyph(ch) {
            for col in 0..font.width {
                let on = row & (0x8000 >> col) != 0;
                self.write_pixel(if on { fg } else { bg })?;
            }
        }
        Ok(())
    }

    /// Draw text left to right from (x, y)
    ///
    /// Wraps to column 0 one cell row down when the next glyph would
    /// run past the right edge, dropping a space that lands at the
    /// start of a wrapped line. Stops when the next row would run past
    /// the bottom. Returns the number of glyphs drawn.
    fn draw_string(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        font: &Font,
        fg: Rgb565,
        bg: Rgb565,
    ) -> Result<usize, Self::Error> {
        let (width, height) = self.size();
        let (fw, fh) = (font.width as u32, font.height as u32);
        let (mut cx, mut cy) = (x as u32, y as u32);
        let mut drawn = 0;

        if cy + fh > height as u32 {
            return Ok(0);
        }

        for ch in text.chars() {
            if cx + fw > width as u32 {
                cx = 0;
                cy += fh;
                if cy + fh > height as u32 {
                    break;
                }
                if ch == ' ' {
                    continue;
                }
            }
            self.draw_glyph(cx as u16, cy as u16, ch, font, fg, bg)?;
            cx += fw;
            drawn += 1;
        }
        Ok(drawn)
    }

    /// Bresenham line, both endpoints included
    ///
    /// Every pixel gets its own one-pixel window, so the touched set
    /// does not depend on endpoint order.
    fn draw_line(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        let (mut x0, mut y0, mut x1, mut y1) = (x0 as i32, y0 as i32, x1 as i32, y1 as i32);

        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            core::mem::swap(&mut x0, &mut y0);
            core::mem::swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            core::mem::swap(&mut x0, &mut x1);
            core::mem::swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        let ystep = if y0 < y1 { 1 } else { -1 };
        let mut err = dx / 2;
        let mut y = y0;

        for x in x0..=x1 {
            let (px, py) = if steep { (y as u16, x as u16) } else { (x as u16, y as u16) };
            self.set_window(px, py, px, py)?;
            self.write_pixel(color)?;

            err -= dy;
            if err < 0 {
                y += ystep;
                err += dx;
            }
        }
        Ok(())
    }

    /// Filled rectangle spanning `w + 1` columns and `h + 1` rows from (x, y)
    ///
    /// Drawn as horizontal lines. An extent reaching the panel edge is
    /// cut to end on the last column or row.
    fn draw_filled_rect(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: Rgb565,
    ) -> Result<Clip, Self::Error> {
        let (width, height) = self.size();
        if x >= width || y >= height {
            return Ok(Clip::Outside);
        }

        let mut clip = Clip::Unclipped;
        let (mut w, mut h) = (w, h);
        if x as u32 + w as u32 >= width as u32 {
            w = width - 1 - x;
            clip = Clip::Clipped;
        }
        if y as u32 + h as u32 >= height as u32 {
            h = height - 1 - y;
            clip = Clip::Clipped;
        }

        for i in 0..=h {
            self.draw_line(x, y + i, x + w, y + i, color)?;
        }
        Ok(clip)
    }
}

impl<T: PixelSink + ?Sized> RenderExt for T {}
