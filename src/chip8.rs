use std::io::{Error, Read};

use log::trace;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::ROM_ADDR;
use crate::dispatch;
use crate::state::{FrameBuffer, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - the current `state`
///  - `pressed_keys` with public interfaces for manipulating them
///  - the random source backing the random-byte instruction
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the machine one cycle at a time
/// - inspecting its frame buffer for rendering by some display
///
/// The machine never blocks and never fails mid-ROM: unknown opcodes are
/// no-ops, and the wait-for-key instruction re-arms itself instead of
/// looping, so the caller stays in control of pacing.
pub struct Chip8 {
    state: State,
    pressed_keys: [u8; 16],
    rng: StdRng,
}

impl Chip8 {
    pub fn new() -> Self {
        Chip8::with_rng(StdRng::from_os_rng())
    }

    /// Build a machine whose random-byte instruction draws from a seeded
    /// generator, so runs are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Chip8::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Chip8 {
            state: State::new(),
            pressed_keys: [0; 16],
            rng,
        }
    }

    /// Load a rom from a source file
    ///
    /// Bytes are copied starting at the ROM address; an oversized image
    /// wraps to the bottom of memory rather than faulting. No validation
    /// of size or content is performed.
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        let mut rom = Vec::new();
        reader.read_to_end(&mut rom)?;
        for (offset, &byte) in rom.iter().enumerate() {
            self.state.memory[(ROM_ADDR + offset) & 0xFFF] = byte;
        }
        Ok(())
    }

    /// Returns the FrameBuffer if the last cycle drew to it
    pub fn get_frame(&self) -> Option<FrameBuffer> {
        if self.state.draw_flag {
            Some(self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was pressed
    pub fn key_press(&mut self, key: u8) {
        self.pressed_keys[(key & 0xF) as usize] = 0x1;
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was released
    pub fn key_release(&mut self, key: u8) {
        self.pressed_keys[(key & 0xF) as usize] = 0x0;
    }

    /// Advances the machine by a single cycle
    /// - fetches the opcode under the pc
    /// - advances the pc past it
    /// - dispatches and executes the opcode's handler
    /// - ticks both timers down
    pub fn cycle(&mut self) {
        let op: u16 = self.get_op();
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.v,
            self.state.i,
            self.state.pc
        );

        // The pc moves past the opcode before dispatch; control-flow
        // handlers override or roll back this provisional value
        self.state.pc = (self.state.pc + 0x2) & 0xFFF;
        self.state.draw_flag = false;

        self.state = dispatch::from_op(&op)(&op, &self.state, self.pressed_keys, &mut self.rng);

        // Both timers tick once per cycle, whatever the opcode did
        if self.state.delay_timer > 0 {
            self.state.delay_timer -= 1;
        }
        if self.state.sound_timer > 0 {
            self.state.sound_timer -= 1;
        }
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two
    /// subsequent bytes.
    fn get_op(&self) -> u16 {
        let left = u16::from(self.state.memory[self.state.pc as usize & 0xFFF]);
        let right = u16::from(self.state.memory[(self.state.pc as usize + 1) & 0xFFF]);
        left << 8 | right
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
