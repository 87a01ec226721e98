/// Nanoseconds per CPU cycle; the interpreter is clocked at 500Hz
pub const CLOCK_SPEED: u32 = 2_000_000;

/// Horizontal display resolution in pixels
pub const DISPLAY_WIDTH: usize = 64;

/// Vertical display resolution in pixels
pub const DISPLAY_HEIGHT: usize = 32;

/// Number of addressable bytes of memory
pub const MEMORY_SIZE: usize = 4096;

/// Address at which ROMs are loaded and execution begins
pub const ROM_ADDR: usize = 0x200;

/// A lit FrameBuffer cell.
///
/// Pixels are stored full-width with every bit set when lit so that a
/// frontend can blit the buffer directly as packed pixel data.
pub const PIXEL_ON: u32 = u32::MAX;

/// Sprites for the hex digits 0..F, 5 bytes per glyph.
///
/// Each byte is one 8-pixel row; only the high nibble is ever set. The
/// sheet lives at the bottom of memory, which is reserved for the
/// interpreter, so the sprite for digit `d` starts at address `d * 5`.
pub const SPRITE_SHEET: [u8; 80] = [
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
