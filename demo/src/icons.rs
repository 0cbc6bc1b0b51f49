//! Reference glyph art for the demo: 5x8 bitmaps, low 5 bits per row, top
//! row first. The single-cell icons are drawn 7 rows tall with the eighth
//! row left empty, so each fills exactly one CGRAM slot.

pub const BELL: [u8; 8] = [0x04, 0x0E, 0x0E, 0x0E, 0x1F, 0x00, 0x04, 0x00];
pub const NOTE: [u8; 8] = [0x02, 0x03, 0x02, 0x0E, 0x1E, 0x0C, 0x00, 0x00];
pub const CLOCK: [u8; 8] = [0x00, 0x0E, 0x15, 0x17, 0x11, 0x0E, 0x00, 0x00];
pub const HEART: [u8; 8] = [0x00, 0x0A, 0x1F, 0x1F, 0x0E, 0x04, 0x00, 0x00];
pub const DUCK: [u8; 8] = [0x00, 0x0C, 0x1D, 0x0F, 0x0F, 0x06, 0x00, 0x00];
pub const CHECK: [u8; 8] = [0x00, 0x01, 0x03, 0x16, 0x1C, 0x08, 0x00, 0x00];
pub const CROSS: [u8; 8] = [0x00, 0x1B, 0x0E, 0x04, 0x0E, 0x1B, 0x00, 0x00];
pub const RETURN_ARROW: [u8; 8] = [0x01, 0x01, 0x05, 0x09, 0x1F, 0x08, 0x04, 0x00];

/// A smiley face spanning seven adjacent cells, one glyph per CGRAM slot.
/// Print slots 0..=6 in order on one row to assemble it.
pub const SMILEY_FACE: [[u8; 8]; 7] = [
    [0x00, 0x00, 0x03, 0x04, 0x08, 0x19, 0x11, 0x10],
    [0x00, 0x1F, 0x00, 0x00, 0x00, 0x11, 0x11, 0x00],
    [0x00, 0x00, 0x18, 0x04, 0x02, 0x13, 0x11, 0x01],
    [0x12, 0x13, 0x1B, 0x09, 0x04, 0x03, 0x00, 0x00],
    [0x00, 0x11, 0x1F, 0x1F, 0x0E, 0x00, 0x1F, 0x00],
    [0x09, 0x19, 0x1B, 0x12, 0x04, 0x18, 0x00, 0x00],
    [0x1F, 0x00, 0x04, 0x0E, 0x00, 0x1F, 0x1F, 0x1F],
];
