use super::{
    Chip8Error, ChipState, CycleResult, DISPLAY_X, Engine, FONT, FONT_END_ADDRESS,
    FONT_START_ADDRESS, MEMORY_SIZE, Opcode, ROM_START_ADDRESS,
};
use crate::u4;

/// The CHIP-8 machine: a [`ChipState`] driven by an [`Engine`].
///
/// Owns the fetch half of the fetch/decode/execute cycle, ROM and font
/// loading, and the key wait resolution the engine only records. Timer
/// decrement runs on its own 60Hz schedule via [`Chip8::timers_cycle`],
/// decoupled from instruction throughput.
pub struct Chip8 {
    pub state: ChipState,
    engine: Engine,
}

impl Chip8 {
    pub fn new() -> Self {
        Chip8 {
            state: ChipState::new(),
            engine: Engine::new(),
        }
    }

    pub fn with_engine(engine: Engine) -> Self {
        Chip8 {
            state: ChipState::new(),
            engine,
        }
    }

    /// Loads a ROM into memory and installs the font table.
    ///
    /// This is a full session reset: registers, timers, stack and display
    /// all start from zero and PC points at the start of the ROM.
    pub fn load(&mut self, rom: &[u8]) -> Result<(), Chip8Error> {
        let mut state = ChipState::new();

        state.memory[FONT_START_ADDRESS..FONT_END_ADDRESS].copy_from_slice(&FONT);

        let rom_end = ROM_START_ADDRESS + rom.len();
        state
            .memory
            .get_mut(ROM_START_ADDRESS..rom_end)
            .ok_or(Chip8Error::RomTooLarge {
                size: rom.len(),
                max_size: MEMORY_SIZE - ROM_START_ADDRESS,
            })?
            .copy_from_slice(rom);

        self.state = state;
        Ok(())
    }

    /// Executes a single CPU cycle (fetch, decode, execute).
    ///
    /// A pending key wait is resolved first: while it is pending no
    /// instruction is fetched, and once a pressed key is observed it lands
    /// in the awaiting register and PC resumes.
    pub fn cpu_cycle(&mut self) -> Result<CycleResult, Chip8Error> {
        if let Some(x) = self.state.awaiting_key {
            if let Some(key) = (0..16u8).find(|&key| self.state.keypad[key as usize]) {
                self.state.v[x] = key;
                self.state.awaiting_key = None;
                self.state.pc = self.state.pc.wrapping_add(2);
                return Ok(CycleResult::Continue);
            }

            return Ok(CycleResult::WaitForNextFrame);
        }

        let instruction = self.fetch()?;
        self.state = self.engine.transition(&self.state, instruction)?;

        // Pause after draws so the display update rate tracks the frame rate
        match Opcode::decode(instruction) {
            Opcode::Draw { .. } | Opcode::WaitForKey { .. } => Ok(CycleResult::WaitForNextFrame),
            _ => Ok(CycleResult::Continue),
        }
    }

    /// Updates the delay and sound timers. Should be called at 60Hz.
    pub fn timers_cycle(&mut self) {
        self.state.delay_timer = self.state.delay_timer.saturating_sub(1);
        self.state.sound_timer = self.state.sound_timer.saturating_sub(1);
    }

    /// Returns true while the sound timer is non-zero and a beep should play.
    pub fn should_beep(&self) -> bool {
        self.state.sound_timer > 0
    }

    /// Set the state of a key on the keypad.
    pub fn set_key(&mut self, key: u4, pressed: bool) {
        self.state.keypad[key] = pressed;
    }

    /// Get the state of a pixel on the display (true = on, false = off).
    pub fn get_display_pixel(&self, y: usize, x: usize) -> bool {
        self.state.pixels[y * DISPLAY_X + x] != 0
    }

    /// Fetches the big-endian instruction word at PC.
    fn fetch(&self) -> Result<u16, Chip8Error> {
        let high = self.state.mem_read(self.state.pc)?;
        let low = self.state.mem_read(self.state.pc.wrapping_add(1))?;

        Ok(u16::from_be_bytes([high, low]))
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_installs_font_and_rom() {
        let mut chip8 = Chip8::new();
        chip8.load(&[0x00, 0xE0, 0x12, 0x00]).unwrap();

        assert_eq!(
            &chip8.state.memory[FONT_START_ADDRESS..FONT_END_ADDRESS],
            &FONT
        );
        assert_eq!(
            &chip8.state.memory[ROM_START_ADDRESS..ROM_START_ADDRESS + 4],
            &[0x00, 0xE0, 0x12, 0x00]
        );
        assert_eq!(chip8.state.pc, ROM_START_ADDRESS as u16);
    }

    #[test]
    fn load_rejects_oversized_rom() {
        let mut chip8 = Chip8::new();
        let rom = vec![0; MEMORY_SIZE - ROM_START_ADDRESS + 1];

        assert!(matches!(
            chip8.load(&rom),
            Err(Chip8Error::RomTooLarge { .. })
        ));
    }

    #[test]
    fn load_resets_previous_session() {
        let mut chip8 = Chip8::new();
        chip8.state.v[3] = 0x42;
        chip8.state.stack.push(0x300);
        chip8.state.delay_timer = 10;

        chip8.load(&[0x00, 0xE0]).unwrap();
        assert_eq!(chip8.state.v[3], 0);
        assert!(chip8.state.stack.is_empty());
        assert_eq!(chip8.state.delay_timer, 0);
    }

    #[test]
    fn cpu_cycle_fetches_big_endian_word() {
        let mut chip8 = Chip8::new();
        chip8.load(&[0x6A, 0xBC]).unwrap();

        chip8.cpu_cycle().unwrap();
        assert_eq!(chip8.state.v[0xA], 0xBC);
        assert_eq!(chip8.state.pc, ROM_START_ADDRESS as u16 + 2);
    }

    #[test]
    fn cpu_cycle_does_not_fetch_while_awaiting_key() {
        let mut chip8 = Chip8::new();
        chip8.load(&[0xF1, 0x0A, 0x00, 0xE0]).unwrap();

        // Executes FX0A and starts waiting
        chip8.cpu_cycle().unwrap();
        let waiting_pc = chip8.state.pc;
        assert_eq!(chip8.state.awaiting_key, Some(u4::new(1)));

        // No key pressed: nothing moves
        chip8.cpu_cycle().unwrap();
        assert_eq!(chip8.state.pc, waiting_pc);
        assert_eq!(chip8.state.awaiting_key, Some(u4::new(1)));
    }

    #[test]
    fn cpu_cycle_resolves_key_wait_on_press() {
        let mut chip8 = Chip8::new();
        chip8.load(&[0xF1, 0x0A, 0x00, 0xE0]).unwrap();

        chip8.cpu_cycle().unwrap();
        let waiting_pc = chip8.state.pc;

        chip8.set_key(u4::new(0xE), true);
        chip8.cpu_cycle().unwrap();

        assert_eq!(chip8.state.v[1], 0xE);
        assert_eq!(chip8.state.awaiting_key, None);
        assert_eq!(chip8.state.pc, waiting_pc + 2);
    }

    #[test]
    fn custom_engine_makes_random_deterministic() {
        use crate::emu::Engine;

        let mut chip8 = Chip8::with_engine(Engine::with_random_source(Box::new(|| 0x89)));
        chip8.load(&[0xC1, 0x39]).unwrap();

        chip8.cpu_cycle().unwrap();
        assert_eq!(chip8.state.v[1], 0x09);
    }

    #[test]
    fn timers_decrement_and_saturate() {
        let mut chip8 = Chip8::new();
        chip8.state.delay_timer = 2;
        chip8.state.sound_timer = 1;

        chip8.timers_cycle();
        assert_eq!(chip8.state.delay_timer, 1);
        assert_eq!(chip8.state.sound_timer, 0);
        assert!(!chip8.should_beep());

        chip8.timers_cycle();
        assert_eq!(chip8.state.delay_timer, 0);
        assert_eq!(chip8.state.sound_timer, 0);
    }

    #[test]
    fn should_beep_while_sound_timer_runs() {
        let mut chip8 = Chip8::new();
        chip8.state.sound_timer = 3;
        assert!(chip8.should_beep());
    }

    #[test]
    fn draw_cycle_requests_frame_wait() {
        let mut chip8 = Chip8::new();
        chip8.load(&[0xD0, 0x11]).unwrap();

        assert!(matches!(
            chip8.cpu_cycle().unwrap(),
            CycleResult::WaitForNextFrame
        ));
    }
}
