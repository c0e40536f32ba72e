use super::commands::{BreakpointAction, Command, CommandError, CommandResult, SetTarget};
use crate::emu::{Chip8Error, Chip8Runner, DISPLAY_SIZE, RunnerResult};
use std::collections::HashSet;

/// Drives the runner on behalf of the debugger UI: run/pause state,
/// breakpoints, single stepping and register poking.
pub struct Executor {
    is_running: bool,
    runner: Chip8Runner,
    breakpoints: HashSet<u16>,
}

impl Executor {
    pub fn new(runner: Chip8Runner) -> Self {
        Self {
            is_running: false,
            runner,
            breakpoints: HashSet::new(),
        }
    }

    /// Advances the emulator while in running mode; pauses on breakpoints
    /// and execution errors.
    pub fn poll(&mut self, dt: f32) -> Result<RunnerResult, Chip8Error> {
        if !self.is_running {
            return Ok(RunnerResult::Ok);
        }

        let result = self
            .runner
            .update_with_breakpoints(dt, Some(&self.breakpoints));

        if matches!(result, Err(_) | Ok(RunnerResult::HitBreakpoint)) {
            self.is_running = false;
        }

        result
    }

    pub fn execute(&mut self, command: Command) -> Result<CommandResult, CommandError> {
        match command {
            Command::Run => {
                self.is_running = true;
                Ok(CommandResult::Ok)
            }
            Command::Pause => {
                self.pause();
                Ok(CommandResult::Ok)
            }
            Command::Step => self.execute_step(),
            Command::Breakpoint { action } => self.handle_breakpoint(action),
            Command::Set { target, value } => self.handle_set(target, value),
            Command::Quit => Ok(CommandResult::Quit),
        }
    }

    pub fn pause(&mut self) {
        self.is_running = false;
    }

    fn execute_step(&mut self) -> Result<CommandResult, CommandError> {
        self.runner.chip8_mut().cpu_cycle()?;
        Ok(CommandResult::Ok)
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn get_pixels(&self) -> &[u8; DISPLAY_SIZE] {
        &self.runner.chip8_ref().state.pixels
    }

    pub fn get_pc(&self) -> u16 {
        self.runner.chip8_ref().state.pc
    }

    pub fn get_i(&self) -> u16 {
        self.runner.chip8_ref().state.i
    }

    pub fn get_v(&self) -> &[u8; 16] {
        &self.runner.chip8_ref().state.v
    }

    pub fn get_stack(&self) -> &[u16] {
        &self.runner.chip8_ref().state.stack
    }

    pub fn get_delay_timer(&self) -> u8 {
        self.runner.chip8_ref().state.delay_timer
    }

    pub fn get_sound_timer(&self) -> u8 {
        self.runner.chip8_ref().state.sound_timer
    }

    pub fn get_keypad(&self) -> &[bool; 16] {
        &self.runner.chip8_ref().state.keypad
    }

    pub fn runner_mut(&mut self) -> &mut Chip8Runner {
        &mut self.runner
    }

    fn handle_breakpoint(
        &mut self,
        action: BreakpointAction,
    ) -> Result<CommandResult, CommandError> {
        match action {
            BreakpointAction::Set { addr } => {
                self.breakpoints.insert(addr);
            }
            BreakpointAction::Clear { addr } => {
                self.breakpoints.remove(&addr);
            }
            BreakpointAction::ClearAll => {
                self.breakpoints.clear();
            }
            BreakpointAction::List => {
                return Ok(CommandResult::BreakpointList {
                    breakpoints: {
                        let mut bps: Vec<u16> = self.breakpoints.iter().cloned().collect();
                        bps.sort();
                        bps
                    },
                });
            }
        };

        Ok(CommandResult::Ok)
    }

    fn handle_set(&mut self, target: SetTarget, value: u16) -> Result<CommandResult, CommandError> {
        let state = &mut self.runner.chip8_mut().state;

        match target {
            SetTarget::V(reg) => {
                state.v[reg] = value as u8;
            }
            SetTarget::I => {
                state.i = value;
            }
            SetTarget::Pc => {
                state.pc = value;
            }
        }

        Ok(CommandResult::Ok)
    }
}
