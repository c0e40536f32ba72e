/// Result type for CHIP-8 CPU cycle execution
pub enum CycleResult {
    /// Continue executing instructions in the current frame.
    Continue,
    /// Wait for the next frame before continuing
    /// (after a draw instruction, or while a key press is being awaited).
    WaitForNextFrame,
}

/// Error types that can occur during CHIP-8 emulation
#[derive(Debug, thiserror::Error)]
pub enum Chip8Error {
    #[error("ROM is too large ({size} bytes), max size is {max_size} bytes")]
    RomTooLarge { size: usize, max_size: usize },

    #[error("Memory access out of bounds at address {address:#06X}")]
    MemoryOutOfBounds { address: u16 },

    #[error("Stack underflow: attempted to return from a subroutine with empty call stack")]
    StackUnderflow,

    #[error("Unsupported opcode: {opcode:#06X}")]
    UnsupportedOpcode { opcode: u16 },
}

pub const DISPLAY_X: usize = 64;
pub const DISPLAY_Y: usize = 32;
/// Number of cells in the display buffer, one byte per pixel.
pub const DISPLAY_SIZE: usize = DISPLAY_X * DISPLAY_Y;
