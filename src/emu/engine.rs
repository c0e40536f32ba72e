use super::{
    Chip8Error, ChipState, DISPLAY_SIZE, DISPLAY_X, DISPLAY_Y, FONT_GLYPH_SIZE, FONT_START_ADDRESS,
    Opcode, OpcodeAlu,
};
use crate::u4;

/// Source of random bytes for the Cxnn instruction.
pub type RandomByteSource = Box<dyn FnMut() -> u8>;

/// The instruction execution engine.
///
/// A stateless transformer apart from its random byte source: given a machine
/// state and a 16-bit instruction word, [`Engine::transition`] produces the
/// next state without mutating its input. The random source is injectable so
/// the one nondeterministic instruction stays testable.
pub struct Engine {
    random_byte: RandomByteSource,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_random_source(Box::new(rand::random::<u8>))
    }

    pub fn with_random_source(random_byte: RandomByteSource) -> Self {
        Self { random_byte }
    }

    /// Applies a single instruction to `state` and returns the next state.
    ///
    /// PC bookkeeping is explicit per instruction: +2 by default, +4 on a
    /// taken skip, and no automatic advance on control transfers. Unmatched
    /// nibble patterns yield [`Chip8Error::UnsupportedOpcode`] carrying the
    /// raw word.
    pub fn transition(
        &mut self,
        state: &ChipState,
        instruction: u16,
    ) -> Result<ChipState, Chip8Error> {
        let mut next = state.clone();

        match Opcode::decode(instruction) {
            Opcode::ClearDisplay => {
                next.pixels = [0; DISPLAY_SIZE];
                next.pc = next.pc.wrapping_add(2);
            }
            Opcode::Sys => {
                // Historical machine code call, ignored
                next.pc = next.pc.wrapping_add(2);
            }
            Opcode::Jump { nnn } => {
                next.pc = nnn;
            }
            Opcode::JumpWithOffset { nnn } => {
                next.pc = nnn.wrapping_add(next.v[0].into());
            }
            Opcode::Call { nnn } => {
                next.stack.push(state.pc);
                next.pc = nnn;
            }
            Opcode::Return => {
                let return_addr = next.stack.pop().ok_or(Chip8Error::StackUnderflow)?;
                next.pc = return_addr.wrapping_add(2);
            }
            Opcode::SkipRegEqualImm { x, nn } => {
                next.pc = next.pc.wrapping_add(if next.v[x] == nn { 4 } else { 2 });
            }
            Opcode::SkipRegNotEqualImm { x, nn } => {
                next.pc = next.pc.wrapping_add(if next.v[x] != nn { 4 } else { 2 });
            }
            Opcode::SkipRegEqualReg { x, y } => {
                next.pc = next
                    .pc
                    .wrapping_add(if next.v[x] == next.v[y] { 4 } else { 2 });
            }
            Opcode::SkipRegNotEqualReg { x, y } => {
                next.pc = next
                    .pc
                    .wrapping_add(if next.v[x] != next.v[y] { 4 } else { 2 });
            }
            Opcode::SetRegImm { x, nn } => {
                next.v[x] = nn;
                next.pc = next.pc.wrapping_add(2);
            }
            Opcode::AddRegImm { x, nn } => {
                next.v[x] = next.v[x].wrapping_add(nn);
                next.pc = next.pc.wrapping_add(2);
            }
            Opcode::Alu { x, y, op } => {
                Self::execute_alu(&mut next, x, y, op);
                next.pc = next.pc.wrapping_add(2);
            }
            Opcode::Random { x, nn } => {
                next.v[x] = (self.random_byte)() & nn;
                next.pc = next.pc.wrapping_add(2);
            }
            Opcode::SetIndexImm { nnn } => {
                next.i = nnn;
                next.pc = next.pc.wrapping_add(2);
            }
            Opcode::AddIndexReg { x } => {
                next.i = next.i.wrapping_add(next.v[x].into());
                next.pc = next.pc.wrapping_add(2);
            }
            Opcode::Draw { x, y, n } => {
                Self::execute_draw(&mut next, x, y, n)?;
                next.pc = next.pc.wrapping_add(2);
            }
            Opcode::SkipIfPressed { x } => {
                let pressed = next.keypad[next.v[x] as usize & 0x0F];
                next.pc = next.pc.wrapping_add(if pressed { 4 } else { 2 });
            }
            Opcode::SkipIfNotPressed { x } => {
                let pressed = next.keypad[next.v[x] as usize & 0x0F];
                next.pc = next.pc.wrapping_add(if pressed { 2 } else { 4 });
            }
            Opcode::WaitForKey { x } => {
                // PC is left in place; the machine resolves the wait at the
                // top of a later cycle once a key press is observed.
                next.awaiting_key = Some(x);
            }
            Opcode::ReadDelayTimer { x } => {
                next.v[x] = next.delay_timer;
                next.pc = next.pc.wrapping_add(2);
            }
            Opcode::SetDelayTimer { x } => {
                next.delay_timer = next.v[x];
                next.pc = next.pc.wrapping_add(2);
            }
            Opcode::SetSoundTimer { x } => {
                next.sound_timer = next.v[x];
                next.pc = next.pc.wrapping_add(2);
            }
            Opcode::FontChar { x } => {
                let digit = next.v[x] & 0x0F;
                next.i = FONT_START_ADDRESS as u16 + digit as u16 * FONT_GLYPH_SIZE;
                next.pc = next.pc.wrapping_add(2);
            }
            Opcode::Bcd { x } => {
                let value = next.v[x];
                next.mem_write(next.i, value / 100)?;
                next.mem_write(next.i.wrapping_add(1), (value / 10) % 10)?;
                next.mem_write(next.i.wrapping_add(2), value % 10)?;
                next.pc = next.pc.wrapping_add(2);
            }
            Opcode::StoreRegs { x } => {
                // I itself is left unmodified
                for reg_index in 0..=u16::from(x) {
                    next.mem_write(next.i.wrapping_add(reg_index), next.v[reg_index as usize])?;
                }
                next.pc = next.pc.wrapping_add(2);
            }
            Opcode::LoadRegs { x } => {
                for reg_index in 0..=u16::from(x) {
                    next.v[reg_index as usize] = next.mem_read(next.i.wrapping_add(reg_index))?;
                }
                next.pc = next.pc.wrapping_add(2);
            }
            Opcode::Unknown(opcode) => {
                return Err(Chip8Error::UnsupportedOpcode { opcode });
            }
        };

        Ok(next)
    }

    fn execute_alu(next: &mut ChipState, x: u4, y: u4, op: OpcodeAlu) {
        match op {
            OpcodeAlu::Set => next.v[x] = next.v[y],
            OpcodeAlu::Or => next.v[x] |= next.v[y],
            OpcodeAlu::And => next.v[x] &= next.v[y],
            OpcodeAlu::Xor => next.v[x] ^= next.v[y],
            OpcodeAlu::Add => {
                let (res, overflow) = next.v[x].overflowing_add(next.v[y]);
                next.v[x] = res;
                next.v[0xF] = overflow as u8;
            }
            OpcodeAlu::Sub => {
                let (res, borrow) = next.v[x].overflowing_sub(next.v[y]);
                next.v[x] = res;
                next.v[0xF] = if borrow { 0 } else { 1 }; // Notice that borrow is inverted
            }
            OpcodeAlu::SubReverse => {
                let (res, borrow) = next.v[y].overflowing_sub(next.v[x]);
                next.v[x] = res;
                next.v[0xF] = if borrow { 0 } else { 1 };
            }
            OpcodeAlu::ShiftRight => {
                let lsb = next.v[x] & 1;
                next.v[x] >>= 1;
                next.v[0xF] = lsb;
            }
            OpcodeAlu::ShiftLeft => {
                // VF gets the pre-shift MSB as 0x80 or 0x00, not normalized
                let msb = next.v[x] & 0x80;
                next.v[x] <<= 1;
                next.v[0xF] = msb;
            }
        }
    }

    /// XOR-composites an 8xN sprite from memory at I onto the display,
    /// wrapping around both screen edges. VF reports whether any pixel was
    /// flipped from set to unset.
    fn execute_draw(next: &mut ChipState, x: u4, y: u4, n: u4) -> Result<(), Chip8Error> {
        let x_pos = next.v[x] as usize % DISPLAY_X;
        let y_pos = next.v[y] as usize % DISPLAY_Y;

        let mut any_erased = false;
        for row in 0..usize::from(n) {
            let sprite_byte = next.mem_read(next.i.wrapping_add(row as u16))?;

            for col in 0..8 {
                if sprite_byte & (0x80 >> col) != 0 {
                    let px = (x_pos + col) % DISPLAY_X;
                    let py = (y_pos + row) % DISPLAY_Y;
                    let pixel = &mut next.pixels[py * DISPLAY_X + px];

                    *pixel ^= 1;
                    if *pixel == 0 {
                        any_erased = true;
                    }
                }
            }
        }

        next.v[0xF] = if any_erased { 1 } else { 0 };
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Engine {
        Engine::new()
    }

    fn engine_returning(byte: u8) -> Engine {
        Engine::with_random_source(Box::new(move || byte))
    }

    fn apply(state: &ChipState, instruction: u16) -> ChipState {
        engine().transition(state, instruction).unwrap()
    }

    #[test]
    fn cls_clears_all_pixels() {
        let mut state = ChipState::new();
        state.pixels = [1; DISPLAY_SIZE];

        let next = apply(&state, 0x00E0);
        assert_eq!(next.pixels, [0; DISPLAY_SIZE]);
        assert_eq!(next.pc, state.pc + 2);
    }

    #[test]
    fn cls_is_idempotent() {
        let mut state = ChipState::new();
        state.pixels = [1; DISPLAY_SIZE];

        let once = apply(&state, 0x00E0);
        let twice = apply(&once, 0x00E0);
        assert_eq!(once.pixels, twice.pixels);
    }

    #[test]
    fn transition_leaves_input_untouched() {
        let mut state = ChipState::new();
        state.pixels = [1; DISPLAY_SIZE];

        let _ = apply(&state, 0x00E0);
        assert_eq!(state.pixels, [1; DISPLAY_SIZE]);
        assert_eq!(state.pc, 0x200);
    }

    #[test]
    fn sys_is_a_noop_that_advances_pc() {
        let state = ChipState::new();
        let next = apply(&state, 0x0123);
        assert_eq!(next.pc, state.pc + 2);
        assert_eq!(next.v, state.v);
        assert_eq!(next.i, state.i);
    }

    #[test]
    fn jump_sets_pc_without_advance() {
        let next = apply(&ChipState::new(), 0x1E03);
        assert_eq!(next.pc, 0xE03);
    }

    #[test]
    fn call_pushes_current_pc_and_jumps() {
        let mut state = ChipState::new();
        state.pc = 0x2B1;

        let next = apply(&state, 0x2ABC);
        assert_eq!(next.stack, vec![0x2B1]);
        assert_eq!(next.pc, 0xABC);
    }

    #[test]
    fn ret_pops_stack_and_resumes_after_call_site() {
        let mut state = ChipState::new();
        state.stack = vec![0x03, 0x04];

        let next = apply(&state, 0x00EE);
        assert_eq!(next.pc, 0x04 + 2);
        assert_eq!(next.stack, vec![0x03]);
    }

    #[test]
    fn call_then_ret_round_trips() {
        let state = ChipState::new();
        let depth = state.stack.len();

        let called = apply(&state, 0x2ABC);
        let returned = apply(&called, 0x00EE);

        assert_eq!(returned.pc, 0x202);
        assert_eq!(returned.stack.len(), depth);
    }

    #[test]
    fn ret_on_empty_stack_is_an_error() {
        let result = engine().transition(&ChipState::new(), 0x00EE);
        assert!(matches!(result, Err(Chip8Error::StackUnderflow)));
    }

    #[test]
    fn skip_eq_imm() {
        let mut state = ChipState::new();
        state.v[2] = 0xCF;

        assert_eq!(apply(&state, 0x32CF).pc, state.pc + 4);
        assert_eq!(apply(&state, 0x32C1).pc, state.pc + 2);
    }

    #[test]
    fn skip_ne_imm() {
        let mut state = ChipState::new();
        state.v[2] = 0x99;

        assert_eq!(apply(&state, 0x429C).pc, state.pc + 4);
        assert_eq!(apply(&state, 0x4299).pc, state.pc + 2);
    }

    #[test]
    fn skip_eq_reg() {
        let mut state = ChipState::new();
        state.v[2] = 0x4E;
        state.v[0xD] = 0x4E;

        assert_eq!(apply(&state, 0x52D0).pc, state.pc + 4);

        state.v[0xD] = 0x5B;
        assert_eq!(apply(&state, 0x52D0).pc, state.pc + 2);
    }

    #[test]
    fn skip_ne_reg() {
        let mut state = ChipState::new();
        state.v[2] = 0x4E;
        state.v[0xD] = 0x5B;

        assert_eq!(apply(&state, 0x92D0).pc, state.pc + 4);

        state.v[0xD] = 0x4E;
        assert_eq!(apply(&state, 0x92D0).pc, state.pc + 2);
    }

    #[test]
    fn set_reg_imm() {
        let next = apply(&ChipState::new(), 0x6B33);
        assert_eq!(next.v[0xB], 0x33);
    }

    #[test]
    fn add_reg_imm_wraps_without_flag() {
        let mut state = ChipState::new();
        state.v[4] = 0xFF;
        state.v[0xF] = 0xAA;

        let next = apply(&state, 0x7402);
        assert_eq!(next.v[4], 0x01);
        // Carry flag is not changed
        assert_eq!(next.v[0xF], 0xAA);
    }

    #[test]
    fn alu_set_or_and_xor() {
        let mut state = ChipState::new();
        state.v[1] = 0b1100;
        state.v[2] = 0b1010;

        assert_eq!(apply(&state, 0x8120).v[1], 0b1010);
        assert_eq!(apply(&state, 0x8121).v[1], 0b1110);
        assert_eq!(apply(&state, 0x8122).v[1], 0b1000);
        assert_eq!(apply(&state, 0x8123).v[1], 0b0110);

        // The bitwise ops leave VF alone
        state.v[0xF] = 0x77;
        assert_eq!(apply(&state, 0x8121).v[0xF], 0x77);
    }

    #[test]
    fn alu_add_sets_carry_flag() {
        let mut state = ChipState::new();
        state.v[0] = 0xFF;
        state.v[1] = 0x01;

        let next = apply(&state, 0x8014);
        assert_eq!(next.v[0], 0x00);
        assert_eq!(next.v[0xF], 1);

        state.v[0] = 0xFE;
        let next = apply(&state, 0x8014);
        assert_eq!(next.v[0], 0xFF);
        assert_eq!(next.v[0xF], 0);
    }

    #[test]
    fn alu_sub_sets_not_borrow_flag() {
        let mut state = ChipState::new();
        state.v[0] = 0x00;
        state.v[1] = 0x01;

        let next = apply(&state, 0x8015);
        assert_eq!(next.v[0], 0xFF);
        assert_eq!(next.v[0xF], 0);

        state.v[0] = 0x01;
        let next = apply(&state, 0x8015);
        assert_eq!(next.v[0], 0x00);
        assert_eq!(next.v[0xF], 1);
    }

    #[test]
    fn alu_sub_reverse_sets_not_borrow_flag() {
        let mut state = ChipState::new();
        state.v[0] = 0x01;
        state.v[1] = 0x00;

        let next = apply(&state, 0x8017);
        assert_eq!(next.v[0], 0xFF);
        assert_eq!(next.v[0xF], 0);

        state.v[1] = 0x03;
        let next = apply(&state, 0x8017);
        assert_eq!(next.v[0], 0x02);
        assert_eq!(next.v[0xF], 1);
    }

    #[test]
    fn alu_shift_right_keeps_lsb_in_vf() {
        let mut state = ChipState::new();
        state.v[3] = 0b0000_0101;

        let next = apply(&state, 0x8346);
        assert_eq!(next.v[3], 0b0000_0010);
        assert_eq!(next.v[0xF], 1);

        state.v[3] = 0b0000_0100;
        let next = apply(&state, 0x8346);
        assert_eq!(next.v[3], 0b0000_0010);
        assert_eq!(next.v[0xF], 0);
    }

    #[test]
    fn alu_shift_left_keeps_raw_msb_in_vf() {
        let mut state = ChipState::new();
        state.v[3] = 0b1000_0001;

        let next = apply(&state, 0x834E);
        assert_eq!(next.v[3], 0b0000_0010);
        // The MSB lands in VF unnormalized, as 0x80 rather than 1
        assert_eq!(next.v[0xF], 0x80);

        state.v[3] = 0b0100_0001;
        let next = apply(&state, 0x834E);
        assert_eq!(next.v[3], 0b1000_0010);
        assert_eq!(next.v[0xF], 0x00);
    }

    #[test]
    fn set_index_imm() {
        let next = apply(&ChipState::new(), 0xA7F2);
        assert_eq!(next.i, 0x7F2);
    }

    #[test]
    fn add_index_reg_wraps_16_bits() {
        let mut state = ChipState::new();
        state.i = 0xFFFF;
        state.v[5] = 0x02;
        state.v[0xF] = 0x42;

        let next = apply(&state, 0xF51E);
        assert_eq!(next.i, 0x0001);
        assert_eq!(next.v[0xF], 0x42);
    }

    #[test]
    fn jump_with_offset_adds_v0() {
        let mut state = ChipState::new();
        state.v[0] = 0x1A;

        let next = apply(&state, 0xB2A6);
        assert_eq!(next.pc, 0x2C0);
    }

    #[test]
    fn jump_with_offset_truncates_to_16_bits() {
        let mut state = ChipState::new();
        state.i = 0;
        state.v[0] = 0xFF;
        // The sum is truncated modulo 65536, never clamped to memory size
        let next = apply(&state, 0xBFFF);
        assert_eq!(next.pc, (0x0FFFu16).wrapping_add(0xFF));
    }

    #[test]
    fn random_ands_injected_byte_with_imm() {
        let mut engine = engine_returning(0x89);
        let next = engine.transition(&ChipState::new(), 0xC139).unwrap();
        assert_eq!(next.v[1], 0x89 & 0x39);
        assert_eq!(next.v[1], 0x09);
    }

    #[test]
    fn draw_xors_sprite_onto_display() {
        let mut state = ChipState::new();
        state.i = 0x300;
        state.memory[0x300] = 0b1100_0000;
        state.v[0] = 4;
        state.v[1] = 2;

        let next = apply(&state, 0xD011);
        assert_eq!(next.pixels[2 * DISPLAY_X + 4], 1);
        assert_eq!(next.pixels[2 * DISPLAY_X + 5], 1);
        assert_eq!(next.pixels[2 * DISPLAY_X + 6], 0);
        assert_eq!(next.v[0xF], 0);
        assert_eq!(next.pc, state.pc + 2);
    }

    #[test]
    fn draw_reports_collisions_in_vf() {
        let mut state = ChipState::new();
        state.i = 0x300;
        state.memory[0x300] = 0b1000_0000;

        let first = apply(&state, 0xD011);
        assert_eq!(first.v[0xF], 0);
        assert_eq!(first.pixels[0], 1);

        // Drawing the same sprite again erases the pixel and sets VF
        let second = apply(&first, 0xD011);
        assert_eq!(second.v[0xF], 1);
        assert_eq!(second.pixels[0], 0);
    }

    #[test]
    fn draw_wraps_around_screen_edges() {
        let mut state = ChipState::new();
        state.i = 0x300;
        state.memory[0x300] = 0b1100_0000;
        state.memory[0x301] = 0b1100_0000;
        state.v[0] = (DISPLAY_X - 1) as u8;
        state.v[1] = (DISPLAY_Y - 1) as u8;

        let next = apply(&state, 0xD012);
        // The 2x2 sprite straddles both edges and wraps to all four corners
        assert_eq!(next.pixels[(DISPLAY_Y - 1) * DISPLAY_X + (DISPLAY_X - 1)], 1);
        assert_eq!(next.pixels[(DISPLAY_Y - 1) * DISPLAY_X], 1);
        assert_eq!(next.pixels[DISPLAY_X - 1], 1);
        assert_eq!(next.pixels[0], 1);
    }

    #[test]
    fn skip_if_pressed() {
        let mut state = ChipState::new();
        state.v[6] = 0xB;
        state.keypad[0xB] = true;

        assert_eq!(apply(&state, 0xE69E).pc, state.pc + 4);

        state.keypad[0xB] = false;
        assert_eq!(apply(&state, 0xE69E).pc, state.pc + 2);
    }

    #[test]
    fn skip_if_not_pressed() {
        let mut state = ChipState::new();
        state.v[6] = 0xB;

        assert_eq!(apply(&state, 0xE6A1).pc, state.pc + 4);

        state.keypad[0xB] = true;
        assert_eq!(apply(&state, 0xE6A1).pc, state.pc + 2);
    }

    #[test]
    fn wait_for_key_suspends_pc_advance() {
        let state = ChipState::new();
        let next = apply(&state, 0xF30A);

        assert_eq!(next.awaiting_key, Some(u4::new(3)));
        assert_eq!(next.pc, state.pc);
    }

    #[test]
    fn timer_reads_and_writes() {
        let mut state = ChipState::new();
        state.delay_timer = 0x42;

        let next = apply(&state, 0xF207);
        assert_eq!(next.v[2], 0x42);

        state.v[2] = 0x99;
        let next = apply(&state, 0xF215);
        assert_eq!(next.delay_timer, 0x99);

        let next = apply(&state, 0xF218);
        assert_eq!(next.sound_timer, 0x99);
    }

    #[test]
    fn font_char_points_i_at_glyph() {
        let mut state = ChipState::new();
        state.v[0] = 0x0A;

        let next = apply(&state, 0xF029);
        assert_eq!(next.i, FONT_START_ADDRESS as u16 + 0xA * FONT_GLYPH_SIZE);

        // Only the low nibble of Vx selects a glyph
        state.v[0] = 0xFA;
        let next = apply(&state, 0xF029);
        assert_eq!(next.i, FONT_START_ADDRESS as u16 + 0xA * FONT_GLYPH_SIZE);
    }

    #[test]
    fn bcd_stores_decimal_digits() {
        let mut state = ChipState::new();
        state.v[7] = 254;
        state.i = 0x300;

        let next = apply(&state, 0xF733);
        assert_eq!(next.memory[0x300], 2);
        assert_eq!(next.memory[0x301], 5);
        assert_eq!(next.memory[0x302], 4);
        assert_eq!(next.i, 0x300);
    }

    #[test]
    fn store_regs_leaves_i_unchanged() {
        let mut state = ChipState::new();
        state.v[0] = 0xDE;
        state.v[1] = 0xAD;
        state.v[2] = 0xBE;
        state.i = 0x400;

        let next = apply(&state, 0xF255);
        assert_eq!(&next.memory[0x400..0x403], &[0xDE, 0xAD, 0xBE]);
        assert_eq!(next.memory[0x403], 0);
        assert_eq!(next.i, 0x400);
    }

    #[test]
    fn load_regs_leaves_i_unchanged() {
        let mut state = ChipState::new();
        state.memory[0x400..0x403].copy_from_slice(&[0xDE, 0xAD, 0xBE]);
        state.v[3] = 0x77;
        state.i = 0x400;

        let next = apply(&state, 0xF265);
        assert_eq!(&next.v[0..3], &[0xDE, 0xAD, 0xBE]);
        assert_eq!(next.v[3], 0x77);
        assert_eq!(next.i, 0x400);
    }

    #[test]
    fn memory_ops_through_out_of_range_i_error() {
        let mut state = ChipState::new();
        state.i = 0xFFFE;
        state.v[0] = 100;

        assert!(matches!(
            engine().transition(&state, 0xF033),
            Err(Chip8Error::MemoryOutOfBounds { .. })
        ));
    }

    #[test]
    fn unsupported_opcode_carries_raw_instruction() {
        let result = engine().transition(&ChipState::new(), 0xF0FF);
        assert!(matches!(
            result,
            Err(Chip8Error::UnsupportedOpcode { opcode: 0xF0FF })
        ));
    }

    #[test]
    fn non_control_instructions_advance_pc_by_two() {
        // Every instruction outside the control transfer and skip families
        // moves PC forward exactly one instruction.
        let instructions = [
            0x00E0, 0x0123, 0x6B33, 0x7402, 0x8120, 0x8121, 0x8122, 0x8123, 0x8124, 0x8125,
            0x8346, 0x8017, 0x834E, 0xA7F2, 0xC139, 0xD011, 0xF207, 0xF215, 0xF218, 0xF51E,
            0xF029, 0xF733, 0xF255, 0xF265,
        ];

        for instruction in instructions {
            let state = ChipState::new();
            let next = engine_returning(0)
                .transition(&state, instruction)
                .unwrap();
            assert_eq!(next.pc, state.pc + 2, "instruction {instruction:#06X}");
        }
    }
}
