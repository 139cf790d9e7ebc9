//! RGB565 colors

/// 16-bit color: 5 bits red, 6 bits green, 5 bits blue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const NAVY: Self = Self::from_rgb(0, 0, 123);
    pub const DARKGREEN: Self = Self::from_rgb(0, 125, 0);
    pub const DARKCYAN: Self = Self::from_rgb(0, 125, 123);
    pub const MAROON: Self = Self::from_rgb(123, 0, 0);
    pub const PURPLE: Self = Self::from_rgb(123, 0, 123);
    pub const OLIVE: Self = Self::from_rgb(123, 125, 0);
    pub const LIGHTGREY: Self = Self::from_rgb(198, 195, 198);
    pub const DARKGREY: Self = Self::from_rgb(123, 125, 123);
    pub const BLUE: Self = Self::from_rgb(0, 0, 255);
    pub const GREEN: Self = Self::from_rgb(0, 255, 0);
    pub const CYAN: Self = Self::from_rgb(0, 255, 255);
    pub const RED: Self = Self::from_rgb(255, 0, 0);
    pub const MAGENTA: Self = Self::from_rgb(255, 0, 255);
    pub const YELLOW: Self = Self::from_rgb(255, 255, 0);
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    pub const ORANGE: Self = Self::from_rgb(255, 165, 0);
    pub const GREENYELLOW: Self = Self::from_rgb(173, 255, 41);
    pub const PINK: Self = Self::from_rgb(255, 130, 198);

    /// Pack 8-bit channels, dropping the low bits
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self((((r as u16) >> 3) << 11) | (((g as u16) >> 2) << 5) | ((b as u16) >> 3))
    }

    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors() {
        assert_eq!(Rgb565::RED.0, 0xF800);
        assert_eq!(Rgb565::GREEN.0, 0x07E0);
        assert_eq!(Rgb565::BLUE.0, 0x001F);
        assert_eq!(Rgb565::WHITE.0, 0xFFFF);
        assert_eq!(Rgb565::BLACK.0, 0x0000);
        assert_eq!(Rgb565::YELLOW.0, 0xFFE0);
    }

    #[test]
    fn test_low_bits_dropped() {
        assert_eq!(Rgb565::from_rgb(7, 3, 7), Rgb565::BLACK);
        assert_eq!(Rgb565::ORANGE.0, 0xFD20);
    }

    #[test]
    fn test_bytes_are_msb_first() {
        assert_eq!(Rgb565(0x1234).to_be_bytes(), [0x12, 0x34]);
    }
}
