/// Start of the font table. The region below 0x200 is reserved for the
/// interpreter; the font occupies its first 80 bytes.
pub const FONT_START_ADDRESS: usize = 0x0;
pub const FONT_END_ADDRESS: usize = FONT_START_ADDRESS + FONT.len();

/// Height of a single font glyph in bytes (one byte per row).
pub const FONT_GLYPH_SIZE: u16 = 5;

/// The built-in 4x5 font: 16 glyphs, one per hex digit 0-F.
///
/// Each glyph is 5 bytes, one row per byte, with the sprite in the high
/// nibble.
pub const FONT: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
