//! Emulation core for the Chip8 virtual machine: 4096 bytes of memory,
//! sixteen 8-bit registers, a 64x32 monochrome framebuffer, two countdown
//! timers and the 35-instruction interpreted instruction set.
//!
//! The crate stops at the machine boundary. A driver embedding [`Chip8`]
//! owns the window, the pixel rendering, the keyboard mapping and the frame
//! pacing; it repeatedly calls [`Chip8::step`], acts on the returned
//! [`Signal`], calls [`Chip8::count_down`] at a fixed cadence (canonically
//! 60Hz) and feeds key events in through [`Chip8::update_key_state`].
//! Execution errors are fatal to the current run and are meant to be shown
//! to the user, not recovered from.

pub use crate::error::{Error, Result};
pub use crate::processor::Cpu;

pub mod clock;
pub mod error;
pub mod graphics;
pub mod input;
pub mod memory;
pub mod processor;

use std::path::Path;

/// What the driver should do after a [`Chip8::step`].
///
/// Returning the outcome from `step` instead of latching it in shared flag
/// fields leaves no ambiguity about when a request has been consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Nothing to present; keep stepping.
    None,

    /// The program asked for the screen to be cleared. The driver blanks
    /// its surface and calls [`Chip8::clear_screen`].
    ClearScreen,

    /// The framebuffer changed and should be presented.
    Redraw,
}

/// The [`Bus`] struct contains the components of the system that the
/// processor reads and writes while executing instructions.
#[derive(Default)]
pub struct Bus {
    /// The delay and sound timers.
    pub clock: clock::Clock,

    /// The monochrome framebuffer.
    pub graphics: graphics::Buffer,

    /// The state of the 16-key pad.
    pub input: input::Input,

    /// The 4096-byte memory holding font, program and scratch data.
    pub memory: memory::Memory,
}

/// The [`Chip8`] struct represents a complete Chip8 virtual machine: the
/// [`Cpu`] plus the [`Bus`] of subsystems it executes against.
#[derive(Default)]
pub struct Chip8 {
    /// The processor executing the instructions in memory.
    pub processor: Cpu,

    /// The memory, framebuffer, key pad and timers.
    pub bus: Bus,
}

impl Chip8 {
    /// Creates a new [`Chip8`] with the font table loaded and the program
    /// counter at the start of program memory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the ROM file at `path` into program memory.
    ///
    /// Loading does not reset registers, program counter or timers; call
    /// [`Chip8::reset`] for a fresh run. May be called again to replace
    /// the loaded program. See [`memory::Memory::load_rom`] for the
    /// failure cases.
    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.bus.memory.load_rom(path.as_ref())
    }

    /// Loads an in-memory ROM image into program memory. Same contract as
    /// [`Chip8::load_rom`] without the file plumbing.
    pub fn load_rom_data(&mut self, data: &[u8]) -> Result<()> {
        self.bus.memory.load_rom_data(data)
    }

    /// Executes one instruction and reports what the driver should do
    /// next. Execution faults abort the step and should end the run.
    pub fn step(&mut self) -> Result<Signal> {
        self.processor.cycle(&mut self.bus)
    }

    /// Advances both countdown timers by one tick. The driver calls this
    /// at its timer cadence, independently of [`Chip8::step`]. Returns
    /// `true` when the sound timer just expired and a tone should be
    /// emitted.
    pub fn count_down(&mut self) -> bool {
        self.bus.clock.count_down()
    }

    /// Records a key press or release.
    ///
    /// # Arguments
    ///
    /// * `key_code`: The hexadecimal key 0x0-0xF, already mapped by the
    ///   driver from its physical input device.
    /// * `pressed`: Whether the key is pressed (`true`) or released
    ///   (`false`).
    pub fn update_key_state(&mut self, key_code: u8, pressed: bool) {
        self.bus.input.update(key_code, pressed);
    }

    /// Turns every framebuffer pixel off. Registers and program counter
    /// are unaffected.
    pub fn clear_screen(&mut self) {
        self.bus.graphics.clear();
    }

    /// Returns the current frame for the driver to rasterize.
    #[must_use]
    pub fn frame(&self) -> &graphics::Frame {
        self.bus.graphics.frame()
    }

    /// Restores the machine to the start of a run: clears the framebuffer
    /// and zeroes the program counter, the I register and both timers.
    /// The ROM, the Vx registers and the call stack are left alone.
    pub fn reset(&mut self) {
        self.bus.graphics.clear();
        self.processor.pc = processor::STARTING_PC;
        self.processor.i = 0;
        self.bus.clock.delay_timer = 0;
        self.bus.clock.sound_timer = 0;
    }
}
