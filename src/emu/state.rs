use super::{Chip8Error, DISPLAY_SIZE};
use crate::u4;

// The constants are specified by the CHIP-8 specification
pub const ROM_START_ADDRESS: usize = 0x200;
pub const MEMORY_SIZE: usize = 4096;

/// CHIP-8 virtual machine state.
///
/// Pure data with no behavior beyond checked memory access; every instruction
/// transition consumes one state and produces the next.
#[derive(Clone)]
pub struct ChipState {
    /// 4KB memory array
    pub memory: [u8; MEMORY_SIZE],
    /// Display buffer: 64x32 monochrome pixels, one byte per pixel (0 or 1)
    pub pixels: [u8; DISPLAY_SIZE],

    /// Program counter: address of the next instruction to execute
    pub pc: u16,
    /// Index register: used for memory operations
    pub i: u16,
    /// General-purpose registers V0-VF (VF is used as a flag register)
    pub v: [u8; 16],
    /// Call stack for subroutine returns
    pub stack: Vec<u16>,

    /// Delay timer: decremented at 60Hz until it reaches 0
    pub delay_timer: u8,
    /// Sound timer: decremented at 60Hz, beeps while non-zero
    pub sound_timer: u8,

    /// Keypad state: 16 keys mapped as booleans (true = pressed)
    pub keypad: [bool; 16],
    /// Register waiting for a key press (FX0A). While set, the machine does
    /// not fetch instructions; the wait resolves at the top of a cycle.
    pub awaiting_key: Option<u4>,
}

impl ChipState {
    pub fn new() -> Self {
        ChipState {
            memory: [0; MEMORY_SIZE],
            pixels: [0; DISPLAY_SIZE],
            pc: ROM_START_ADDRESS as u16,
            i: 0,
            v: [0; 16],
            stack: Vec::new(),
            delay_timer: 0,
            sound_timer: 0,
            keypad: [false; 16],
            awaiting_key: None,
        }
    }

    /// Reads a byte of memory with bounds checking.
    ///
    /// The index register is a full u16 and is never clamped to the memory
    /// size, so addresses past the end surface as a typed error.
    pub fn mem_read(&self, addr: u16) -> Result<u8, Chip8Error> {
        self.memory
            .get(addr as usize)
            .copied()
            .ok_or(Chip8Error::MemoryOutOfBounds { address: addr })
    }

    /// Writes a byte of memory with bounds checking.
    pub fn mem_write(&mut self, addr: u16, value: u8) -> Result<(), Chip8Error> {
        *self
            .memory
            .get_mut(addr as usize)
            .ok_or(Chip8Error::MemoryOutOfBounds { address: addr })? = value;

        Ok(())
    }
}

impl Default for ChipState {
    fn default() -> Self {
        Self::new()
    }
}
