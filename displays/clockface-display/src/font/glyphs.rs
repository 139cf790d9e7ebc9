//! Glyph bitmaps, printable ASCII from `' '` to `'~'`
//!
//! One `u16` per row, leftmost pixel in bit 15.

#[rustfmt::skip]
pub(super) static GLYPHS_6X8: [u16; 760] = [
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // space
    0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x0000, 0x2000, 0x0000, // '!'
    0x5000, 0x5000, 0x5000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // '"'
    0x5000, 0x5000, 0xF800, 0x5000, 0xF800, 0x5000, 0x5000, 0x0000, // '#'
    0x2000, 0x7800, 0xA000, 0x7000, 0x2800, 0xF000, 0x2000, 0x0000, // '$'
    0xC000, 0xC800, 0x1000, 0x2000, 0x4000, 0x9800, 0x1800, 0x0000, // '%'
    0x6000, 0x9000, 0xA000, 0x4000, 0xA800, 0x9000, 0x6800, 0x0000, // '&'
    0x6000, 0x2000, 0x4000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // '''
    0x1000, 0x2000, 0x4000, 0x4000, 0x4000, 0x2000, 0x1000, 0x0000, // '('
    0x4000, 0x2000, 0x1000, 0x1000, 0x1000, 0x2000, 0x4000, 0x0000, // ')'
    0x0000, 0x5000, 0x2000, 0xF800, 0x2000, 0x5000, 0x0000, 0x0000, // '*'
    0x0000, 0x2000, 0x2000, 0xF800, 0x2000, 0x2000, 0x0000, 0x0000, // '+'
    0x0000, 0x0000, 0x0000, 0x0000, 0x6000, 0x2000, 0x4000, 0x0000, // ','
    0x0000, 0x0000, 0x0000, 0xF800, 0x0000, 0x0000, 0x0000, 0x0000, // '-'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x6000, 0x6000, 0x0000, // '.'
    0x0000, 0x0800, 0x1000, 0x2000, 0x4000, 0x8000, 0x0000, 0x0000, // '/'
    0x7000, 0x8800, 0x9800, 0xA800, 0xC800, 0x8800, 0x7000, 0x0000, // '0'
    0x2000, 0x6000, 0x2000, 0x2000, 0x2000, 0x2000, 0x7000, 0x0000, // '1'
    0x7000, 0x8800, 0x0800, 0x1000, 0x2000, 0x4000, 0xF800, 0x0000, // '2'
    0xF800, 0x1000, 0x2000, 0x1000, 0x0800, 0x8800, 0x7000, 0x0000, // '3'
    0x1000, 0x3000, 0x5000, 0x9000, 0xF800, 0x1000, 0x1000, 0x0000, // '4'
    0xF800, 0x8000, 0xF000, 0x0800, 0x0800, 0x8800, 0x7000, 0x0000, // '5'
    0x3000, 0x4000, 0x8000, 0xF000, 0x8800, 0x8800, 0x7000, 0x0000, // '6'
    0xF800, 0x0800, 0x1000, 0x2000, 0x4000, 0x4000, 0x4000, 0x0000, // '7'
    0x7000, 0x8800, 0x8800, 0x7000, 0x8800, 0x8800, 0x7000, 0x0000, // '8'
    0x7000, 0x8800, 0x8800, 0x7800, 0x0800, 0x1000, 0x6000, 0x0000, // '9'
    0x0000, 0x6000, 0x6000, 0x0000, 0x6000, 0x6000, 0x0000, 0x0000, // ':'
    0x0000, 0x6000, 0x6000, 0x0000, 0x6000, 0x2000, 0x4000, 0x0000, // ';'
    0x0800, 0x1000, 0x2000, 0x4000, 0x2000, 0x1000, 0x0800, 0x0000, // '<'
    0x0000, 0x0000, 0xF800, 0x0000, 0xF800, 0x0000, 0x0000, 0x0000, // '='
    0x8000, 0x4000, 0x2000, 0x1000, 0x2000, 0x4000, 0x8000, 0x0000, // '>'
    0x7000, 0x8800, 0x0800, 0x1000, 0x2000, 0x0000, 0x2000, 0x0000, // '?'
    0x7000, 0x8800, 0x0800, 0x6800, 0xA800, 0xA800, 0x7000, 0x0000, // '@'
    0x7000, 0x8800, 0x8800, 0x8800, 0xF800, 0x8800, 0x8800, 0x0000, // 'A'
    0xF000, 0x8800, 0x8800, 0xF000, 0x8800, 0x8800, 0xF000, 0x0000, // 'B'
    0x7000, 0x8800, 0x8000, 0x8000, 0x8000, 0x8800, 0x7000, 0x0000, // 'C'
    0xE000, 0x9000, 0x8800, 0x8800, 0x8800, 0x9000, 0xE000, 0x0000, // 'D'
    0xF800, 0x8000, 0x8000, 0xF000, 0x8000, 0x8000, 0xF800, 0x0000, // 'E'
    0xF800, 0x8000, 0x8000, 0xE000, 0x8000, 0x8000, 0x8000, 0x0000, // 'F'
    0x7000, 0x8800, 0x8000, 0x8000, 0x9800, 0x8800, 0x7000, 0x0000, // 'G'
    0x8800, 0x8800, 0x8800, 0xF800, 0x8800, 0x8800, 0x8800, 0x0000, // 'H'
    0x7000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x7000, 0x0000, // 'I'
    0x3800, 0x1000, 0x1000, 0x1000, 0x1000, 0x9000, 0x6000, 0x0000, // 'J'
    0x8800, 0x9000, 0xA000, 0xC000, 0xA000, 0x9000, 0x8800, 0x0000, // 'K'
    0x8000, 0x8000, 0x8000, 0x8000, 0x8000, 0x8000, 0xF800, 0x0000, // 'L'
    0x8800, 0xD800, 0xA800, 0x8800, 0x8800, 0x8800, 0x8800, 0x0000, // 'M'
    0x8800, 0x8800, 0xC800, 0xA800, 0x9800, 0x8800, 0x8800, 0x0000, // 'N'
    0x7000, 0x8800, 0x8800, 0x8800, 0x8800, 0x8800, 0x7000, 0x0000, // 'O'
    0xF000, 0x8800, 0x8800, 0xF000, 0x8000, 0x8000, 0x8000, 0x0000, // 'P'
    0x7000, 0x8800, 0x8800, 0x8800, 0xA800, 0x9000, 0x6800, 0x0000, // 'Q'
    0xF000, 0x8800, 0x8800, 0xF000, 0xA000, 0x9000, 0x8800, 0x0000, // 'R'
    0x7800, 0x8000, 0x8000, 0x7000, 0x0800, 0x0800, 0xF000, 0x0000, // 'S'
    0xF800, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x0000, // 'T'
    0x8800, 0x8800, 0x8800, 0x8800, 0x8800, 0x8800, 0x7000, 0x0000, // 'U'
    0x8800, 0x8800, 0x8800, 0x8800, 0x8800, 0x5000, 0x2000, 0x0000, // 'V'
    0x8800, 0x8800, 0x8800, 0xA800, 0xA800, 0xD800, 0x8800, 0x0000, // 'W'
    0x8800, 0x8800, 0x5000, 0x2000, 0x5000, 0x8800, 0x8800, 0x0000, // 'X'
    0x8800, 0x8800, 0x5000, 0x2000, 0x2000, 0x2000, 0x2000, 0x0000, // 'Y'
    0xF800, 0x0800, 0x1000, 0x2000, 0x4000, 0x8000, 0xF800, 0x0000, // 'Z'
    0x3800, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x3800, 0x0000, // '['
    0x0000, 0x8000, 0x4000, 0x2000, 0x1000, 0x0800, 0x0000, 0x0000, // backslash
    0xE000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0xE000, 0x0000, // ']'
    0x2000, 0x5000, 0x8800, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // '^'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xF800, 0x0000, // '_'
    0x4000, 0x2000, 0x1000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // '`'
    0x0000, 0x0000, 0x7000, 0x0800, 0x7800, 0x8800, 0x7800, 0x0000, // 'a'
    0x8000, 0x8000, 0xB000, 0xC800, 0x8800, 0x8800, 0xF000, 0x0000, // 'b'
    0x0000, 0x0000, 0x7000, 0x8000, 0x8000, 0x8800, 0x7000, 0x0000, // 'c'
    0x0800, 0x0800, 0x6800, 0x9800, 0x8800, 0x8800, 0x7800, 0x0000, // 'd'
    0x0000, 0x0000, 0x7000, 0x8800, 0xF800, 0x8000, 0x7000, 0x0000, // 'e'
    0x3000, 0x4800, 0x4000, 0xE000, 0x4000, 0x4000, 0x4000, 0x0000, // 'f'
    0x0000, 0x0000, 0x7800, 0x8800, 0x7800, 0x0800, 0x3000, 0x0000, // 'g'
    0x8000, 0x8000, 0xB000, 0xC800, 0x8800, 0x8800, 0x8800, 0x0000, // 'h'
    0x2000, 0x0000, 0x6000, 0x2000, 0x2000, 0x2000, 0x7000, 0x0000, // 'i'
    0x1000, 0x0000, 0x3000, 0x1000, 0x1000, 0x9000, 0x6000, 0x0000, // 'j'
    0x4000, 0x4000, 0x4800, 0x5000, 0x6000, 0x5000, 0x4800, 0x0000, // 'k'
    0x6000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x7000, 0x0000, // 'l'
    0x0000, 0x0000, 0xD000, 0xA800, 0xA800, 0x8800, 0x8800, 0x0000, // 'm'
    0x0000, 0x0000, 0xB000, 0xC800, 0x8800, 0x8800, 0x8800, 0x0000, // 'n'
    0x0000, 0x0000, 0x7000, 0x8800, 0x8800, 0x8800, 0x7000, 0x0000, // 'o'
    0x0000, 0x0000, 0xF000, 0x8800, 0xF000, 0x8000, 0x8000, 0x0000, // 'p'
    0x0000, 0x0000, 0x6800, 0x9800, 0x7800, 0x0800, 0x0800, 0x0000, // 'q'
    0x0000, 0x0000, 0xB000, 0xC800, 0x8000, 0x8000, 0x8000, 0x0000, // 'r'
    0x0000, 0x0000, 0x7000, 0x8000, 0x7000, 0x0800, 0xF000, 0x0000, // 's'
    0x4000, 0x4000, 0xE000, 0x4000, 0x4000, 0x4800, 0x3000, 0x0000, // 't'
    0x0000, 0x0000, 0x8800, 0x8800, 0x8800, 0x9800, 0x6800, 0x0000, // 'u'
    0x0000, 0x0000, 0x8800, 0x8800, 0x8800, 0x5000, 0x2000, 0x0000, // 'v'
    0x0000, 0x0000, 0x8800, 0x8800, 0xA800, 0xA800, 0x5000, 0x0000, // 'w'
    0x0000, 0x0000, 0x8800, 0x5000, 0x2000, 0x5000, 0x8800, 0x0000, // 'x'
    0x0000, 0x0000, 0x8800, 0x8800, 0x7800, 0x0800, 0x7000, 0x0000, // 'y'
    0x0000, 0x0000, 0xF800, 0x1000, 0x2000, 0x4000, 0xF800, 0x0000, // 'z'
    0x1000, 0x2000, 0x2000, 0x4000, 0x2000, 0x2000, 0x1000, 0x0000, // '{'
    0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x0000, // '|'
    0x4000, 0x2000, 0x2000, 0x1000, 0x2000, 0x2000, 0x4000, 0x0000, // '}'
    0x0000, 0x0000, 0x0000, 0x6800, 0x9000, 0x0000, 0x0000, 0x0000, // '~'
];

#[rustfmt::skip]
pub(super) static GLYPHS_12X16: [u16; 1520] = [
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // space
    0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x0C00, 0x0C00, 0x0000, 0x0000, // '!'
    0x3300, 0x3300, 0x3300, 0x3300, 0x3300, 0x3300, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // '"'
    0x3300, 0x3300, 0x3300, 0x3300, 0xFFC0, 0xFFC0, 0x3300, 0x3300, 0xFFC0, 0xFFC0, 0x3300, 0x3300, 0x3300, 0x3300, 0x0000, 0x0000, // '#'
    0x0C00, 0x0C00, 0x3FC0, 0x3FC0, 0xCC00, 0xCC00, 0x3F00, 0x3F00, 0x0CC0, 0x0CC0, 0xFF00, 0xFF00, 0x0C00, 0x0C00, 0x0000, 0x0000, // '$'
    0xF000, 0xF000, 0xF0C0, 0xF0C0, 0x0300, 0x0300, 0x0C00, 0x0C00, 0x3000, 0x3000, 0xC3C0, 0xC3C0, 0x03C0, 0x03C0, 0x0000, 0x0000, // '%'
    0x3C00, 0x3C00, 0xC300, 0xC300, 0xCC00, 0xCC00, 0x3000, 0x3000, 0xCCC0, 0xCCC0, 0xC300, 0xC300, 0x3CC0, 0x3CC0, 0x0000, 0x0000, // '&'
    0x3C00, 0x3C00, 0x0C00, 0x0C00, 0x3000, 0x3000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // '''
    0x0300, 0x0300, 0x0C00, 0x0C00, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x0C00, 0x0C00, 0x0300, 0x0300, 0x0000, 0x0000, // '('
    0x3000, 0x3000, 0x0C00, 0x0C00, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0C00, 0x0C00, 0x3000, 0x3000, 0x0000, 0x0000, // ')'
    0x0000, 0x0000, 0x3300, 0x3300, 0x0C00, 0x0C00, 0xFFC0, 0xFFC0, 0x0C00, 0x0C00, 0x3300, 0x3300, 0x0000, 0x0000, 0x0000, 0x0000, // '*'
    0x0000, 0x0000, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0xFFC0, 0xFFC0, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x0000, 0x0000, // '+'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3C00, 0x3C00, 0x0C00, 0x0C00, 0x3000, 0x3000, 0x0000, 0x0000, // ','
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xFFC0, 0xFFC0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // '-'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3C00, 0x3C00, 0x3C00, 0x3C00, 0x0000, 0x0000, // '.'
    0x0000, 0x0000, 0x00C0, 0x00C0, 0x0300, 0x0300, 0x0C00, 0x0C00, 0x3000, 0x3000, 0xC000, 0xC000, 0x0000, 0x0000, 0x0000, 0x0000, // '/'
    0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC3C0, 0xC3C0, 0xCCC0, 0xCCC0, 0xF0C0, 0xF0C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00, 0x0000, 0x0000, // '0'
    0x0C00, 0x0C00, 0x3C00, 0x3C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x3F00, 0x3F00, 0x0000, 0x0000, // '1'
    0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0x00C0, 0x00C0, 0x0300, 0x0300, 0x0C00, 0x0C00, 0x3000, 0x3000, 0xFFC0, 0xFFC0, 0x0000, 0x0000, // '2'
    0xFFC0, 0xFFC0, 0x0300, 0x0300, 0x0C00, 0x0C00, 0x0300, 0x0300, 0x00C0, 0x00C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00, 0x0000, 0x0000, // '3'
    0x0300, 0x0300, 0x0F00, 0x0F00, 0x3300, 0x3300, 0xC300, 0xC300, 0xFFC0, 0xFFC0, 0x0300, 0x0300, 0x0300, 0x0300, 0x0000, 0x0000, // '4'
    0xFFC0, 0xFFC0, 0xC000, 0xC000, 0xFF00, 0xFF00, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00, 0x0000, 0x0000, // '5'
    0x0F00, 0x0F00, 0x3000, 0x3000, 0xC000, 0xC000, 0xFF00, 0xFF00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00, 0x0000, 0x0000, // '6'
    0xFFC0, 0xFFC0, 0x00C0, 0x00C0, 0x0300, 0x0300, 0x0C00, 0x0C00, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x0000, 0x0000, // '7'
    0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00, 0x0000, 0x0000, // '8'
    0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3FC0, 0x3FC0, 0x00C0, 0x00C0, 0x0300, 0x0300, 0x3C00, 0x3C00, 0x0000, 0x0000, // '9'
    0x0000, 0x0000, 0x3C00, 0x3C00, 0x3C00, 0x3C00, 0x0000, 0x0000, 0x3C00, 0x3C00, 0x3C00, 0x3C00, 0x0000, 0x0000, 0x0000, 0x0000, // ':'
    0x0000, 0x0000, 0x3C00, 0x3C00, 0x3C00, 0x3C00, 0x0000, 0x0000, 0x3C00, 0x3C00, 0x0C00, 0x0C00, 0x3000, 0x3000, 0x0000, 0x0000, // ';'
    0x00C0, 0x00C0, 0x0300, 0x0300, 0x0C00, 0x0C00, 0x3000, 0x3000, 0x0C00, 0x0C00, 0x0300, 0x0300, 0x00C0, 0x00C0, 0x0000, 0x0000, // '<'
    0x0000, 0x0000, 0x0000, 0x0000, 0xFFC0, 0xFFC0, 0x0000, 0x0000, 0xFFC0, 0xFFC0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // '='
    0xC000, 0xC000, 0x3000, 0x3000, 0x0C00, 0x0C00, 0x0300, 0x0300, 0x0C00, 0x0C00, 0x3000, 0x3000, 0xC000, 0xC000, 0x0000, 0x0000, // '>'
    0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0x00C0, 0x00C0, 0x0300, 0x0300, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x0C00, 0x0C00, 0x0000, 0x0000, // '?'
    0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0x00C0, 0x00C0, 0x3CC0, 0x3CC0, 0xCCC0, 0xCCC0, 0xCCC0, 0xCCC0, 0x3F00, 0x3F00, 0x0000, 0x0000, // '@'
    0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xFFC0, 0xFFC0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x0000, 0x0000, // 'A'
    0xFF00, 0xFF00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xFF00, 0xFF00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xFF00, 0xFF00, 0x0000, 0x0000, // 'B'
    0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00, 0x0000, 0x0000, // 'C'
    0xFC00, 0xFC00, 0xC300, 0xC300, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC300, 0xC300, 0xFC00, 0xFC00, 0x0000, 0x0000, // 'D'
    0xFFC0, 0xFFC0, 0xC000, 0xC000, 0xC000, 0xC000, 0xFF00, 0xFF00, 0xC000, 0xC000, 0xC000, 0xC000, 0xFFC0, 0xFFC0, 0x0000, 0x0000, // 'E'
    0xFFC0, 0xFFC0, 0xC000, 0xC000, 0xC000, 0xC000, 0xFC00, 0xFC00, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0x0000, 0x0000, // 'F'
    0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC000, 0xC000, 0xC000, 0xC000, 0xC3C0, 0xC3C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00, 0x0000, 0x0000, // 'G'
    0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xFFC0, 0xFFC0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x0000, 0x0000, // 'H'
    0x3F00, 0x3F00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x3F00, 0x3F00, 0x0000, 0x0000, // 'I'
    0x0FC0, 0x0FC0, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0xC300, 0xC300, 0x3C00, 0x3C00, 0x0000, 0x0000, // 'J'
    0xC0C0, 0xC0C0, 0xC300, 0xC300, 0xCC00, 0xCC00, 0xF000, 0xF000, 0xCC00, 0xCC00, 0xC300, 0xC300, 0xC0C0, 0xC0C0, 0x0000, 0x0000, // 'K'
    0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xFFC0, 0xFFC0, 0x0000, 0x0000, // 'L'
    0xC0C0, 0xC0C0, 0xF3C0, 0xF3C0, 0xCCC0, 0xCCC0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x0000, 0x0000, // 'M'
    0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xF0C0, 0xF0C0, 0xCCC0, 0xCCC0, 0xC3C0, 0xC3C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x0000, 0x0000, // 'N'
    0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00, 0x0000, 0x0000, // 'O'
    0xFF00, 0xFF00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xFF00, 0xFF00, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0x0000, 0x0000, // 'P'
    0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xCCC0, 0xCCC0, 0xC300, 0xC300, 0x3CC0, 0x3CC0, 0x0000, 0x0000, // 'Q'
    0xFF00, 0xFF00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xFF00, 0xFF00, 0xCC00, 0xCC00, 0xC300, 0xC300, 0xC0C0, 0xC0C0, 0x0000, 0x0000, // 'R'
    0x3FC0, 0x3FC0, 0xC000, 0xC000, 0xC000, 0xC000, 0x3F00, 0x3F00, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0xFF00, 0xFF00, 0x0000, 0x0000, // 'S'
    0xFFC0, 0xFFC0, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0000, 0x0000, // 'T'
    0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00, 0x0000, 0x0000, // 'U'
    0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3300, 0x3300, 0x0C00, 0x0C00, 0x0000, 0x0000, // 'V'
    0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xCCC0, 0xCCC0, 0xCCC0, 0xCCC0, 0xF3C0, 0xF3C0, 0xC0C0, 0xC0C0, 0x0000, 0x0000, // 'W'
    0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3300, 0x3300, 0x0C00, 0x0C00, 0x3300, 0x3300, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x0000, 0x0000, // 'X'
    0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3300, 0x3300, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0000, 0x0000, // 'Y'
    0xFFC0, 0xFFC0, 0x00C0, 0x00C0, 0x0300, 0x0300, 0x0C00, 0x0C00, 0x3000, 0x3000, 0xC000, 0xC000, 0xFFC0, 0xFFC0, 0x0000, 0x0000, // 'Z'
    0x0FC0, 0x0FC0, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0FC0, 0x0FC0, 0x0000, 0x0000, // '['
    0x0000, 0x0000, 0xC000, 0xC000, 0x3000, 0x3000, 0x0C00, 0x0C00, 0x0300, 0x0300, 0x00C0, 0x00C0, 0x0000, 0x0000, 0x0000, 0x0000, // backslash
    0xFC00, 0xFC00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0xFC00, 0xFC00, 0x0000, 0x0000, // ']'
    0x0C00, 0x0C00, 0x3300, 0x3300, 0xC0C0, 0xC0C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // '^'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xFFC0, 0xFFC0, 0x0000, 0x0000, // '_'
    0x3000, 0x3000, 0x0C00, 0x0C00, 0x0300, 0x0300, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // '`'
    0x0000, 0x0000, 0x0000, 0x0000, 0x3F00, 0x3F00, 0x00C0, 0x00C0, 0x3FC0, 0x3FC0, 0xC0C0, 0xC0C0, 0x3FC0, 0x3FC0, 0x0000, 0x0000, // 'a'
    0xC000, 0xC000, 0xC000, 0xC000, 0xCF00, 0xCF00, 0xF0C0, 0xF0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xFF00, 0xFF00, 0x0000, 0x0000, // 'b'
    0x0000, 0x0000, 0x0000, 0x0000, 0x3F00, 0x3F00, 0xC000, 0xC000, 0xC000, 0xC000, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00, 0x0000, 0x0000, // 'c'
    0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x3CC0, 0x3CC0, 0xC3C0, 0xC3C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3FC0, 0x3FC0, 0x0000, 0x0000, // 'd'
    0x0000, 0x0000, 0x0000, 0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xFFC0, 0xFFC0, 0xC000, 0xC000, 0x3F00, 0x3F00, 0x0000, 0x0000, // 'e'
    0x0F00, 0x0F00, 0x30C0, 0x30C0, 0x3000, 0x3000, 0xFC00, 0xFC00, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x0000, 0x0000, // 'f'
    0x0000, 0x0000, 0x0000, 0x0000, 0x3FC0, 0x3FC0, 0xC0C0, 0xC0C0, 0x3FC0, 0x3FC0, 0x00C0, 0x00C0, 0x0F00, 0x0F00, 0x0000, 0x0000, // 'g'
    0xC000, 0xC000, 0xC000, 0xC000, 0xCF00, 0xCF00, 0xF0C0, 0xF0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x0000, 0x0000, // 'h'
    0x0C00, 0x0C00, 0x0000, 0x0000, 0x3C00, 0x3C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x3F00, 0x3F00, 0x0000, 0x0000, // 'i'
    0x0300, 0x0300, 0x0000, 0x0000, 0x0F00, 0x0F00, 0x0300, 0x0300, 0x0300, 0x0300, 0xC300, 0xC300, 0x3C00, 0x3C00, 0x0000, 0x0000, // 'j'
    0x3000, 0x3000, 0x3000, 0x3000, 0x30C0, 0x30C0, 0x3300, 0x3300, 0x3C00, 0x3C00, 0x3300, 0x3300, 0x30C0, 0x30C0, 0x0000, 0x0000, // 'k'
    0x3C00, 0x3C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x3F00, 0x3F00, 0x0000, 0x0000, // 'l'
    0x0000, 0x0000, 0x0000, 0x0000, 0xF300, 0xF300, 0xCCC0, 0xCCC0, 0xCCC0, 0xCCC0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x0000, 0x0000, // 'm'
    0x0000, 0x0000, 0x0000, 0x0000, 0xCF00, 0xCF00, 0xF0C0, 0xF0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x0000, 0x0000, // 'n'
    0x0000, 0x0000, 0x0000, 0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00, 0x0000, 0x0000, // 'o'
    0x0000, 0x0000, 0x0000, 0x0000, 0xFF00, 0xFF00, 0xC0C0, 0xC0C0, 0xFF00, 0xFF00, 0xC000, 0xC000, 0xC000, 0xC000, 0x0000, 0x0000, // 'p'
    0x0000, 0x0000, 0x0000, 0x0000, 0x3CC0, 0x3CC0, 0xC3C0, 0xC3C0, 0x3FC0, 0x3FC0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x0000, 0x0000, // 'q'
    0x0000, 0x0000, 0x0000, 0x0000, 0xCF00, 0xCF00, 0xF0C0, 0xF0C0, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0x0000, 0x0000, // 'r'
    0x0000, 0x0000, 0x0000, 0x0000, 0x3F00, 0x3F00, 0xC000, 0xC000, 0x3F00, 0x3F00, 0x00C0, 0x00C0, 0xFF00, 0xFF00, 0x0000, 0x0000, // 's'
    0x3000, 0x3000, 0x3000, 0x3000, 0xFC00, 0xFC00, 0x3000, 0x3000, 0x3000, 0x3000, 0x30C0, 0x30C0, 0x0F00, 0x0F00, 0x0000, 0x0000, // 't'
    0x0000, 0x0000, 0x0000, 0x0000, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC3C0, 0xC3C0, 0x3CC0, 0x3CC0, 0x0000, 0x0000, // 'u'
    0x0000, 0x0000, 0x0000, 0x0000, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3300, 0x3300, 0x0C00, 0x0C00, 0x0000, 0x0000, // 'v'
    0x0000, 0x0000, 0x0000, 0x0000, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xCCC0, 0xCCC0, 0xCCC0, 0xCCC0, 0x3300, 0x3300, 0x0000, 0x0000, // 'w'
    0x0000, 0x0000, 0x0000, 0x0000, 0xC0C0, 0xC0C0, 0x3300, 0x3300, 0x0C00, 0x0C00, 0x3300, 0x3300, 0xC0C0, 0xC0C0, 0x0000, 0x0000, // 'x'
    0x0000, 0x0000, 0x0000, 0x0000, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3FC0, 0x3FC0, 0x00C0, 0x00C0, 0x3F00, 0x3F00, 0x0000, 0x0000, // 'y'
    0x0000, 0x0000, 0x0000, 0x0000, 0xFFC0, 0xFFC0, 0x0300, 0x0300, 0x0C00, 0x0C00, 0x3000, 0x3000, 0xFFC0, 0xFFC0, 0x0000, 0x0000, // 'z'
    0x0300, 0x0300, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x3000, 0x3000, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0300, 0x0300, 0x0000, 0x0000, // '{'
    0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0000, 0x0000, // '|'
    0x3000, 0x3000, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0300, 0x0300, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x3000, 0x3000, 0x0000, 0x0000, // '}'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3CC0, 0x3CC0, 0xC300, 0xC300, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // '~'
];
