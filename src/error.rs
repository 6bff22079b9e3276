//! Failure kinds for ROM loading and instruction execution.
//!
//! Every execution error is fatal to the current run: it aborts the step
//! that produced it and is surfaced to the driver, which is expected to
//! stop the emulation and report the failure rather than skip and continue.
//! ROM-load errors are reported before any execution begins and leave prior
//! CPU state untouched.

use std::path::PathBuf;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while loading a ROM or stepping the CPU.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The ROM path does not name a regular file.
    #[error("ROM file \"{}\" not found", path.display())]
    FileNotFound {
        /// Path the driver asked to load.
        path: PathBuf,
    },

    /// The ROM file exists but could not be read.
    #[error("can't read ROM file \"{}\"", path.display())]
    Io {
        /// Path the driver asked to load.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The ROM image does not fit in program memory.
    #[error("ROM is too large ({size} bytes), max size is {max} bytes")]
    RomTooLarge { size: usize, max: usize },

    /// The program counter ran past the end of memory before a fetch.
    #[error("program counter {pc:#06X} exceeded memory size")]
    ProgramCounterOutOfRange { pc: u16 },

    /// The decoded instruction has no defined handler.
    #[error("instruction {opcode:#06X} is not a Chip8 opcode")]
    UnsupportedOpcode { opcode: u16 },

    /// A subroutine call was made with all 16 stack slots in use.
    #[error("call stack overflowed at {pc:#06X}")]
    StackOverflow { pc: u16 },

    /// A subroutine return was made with an empty call stack.
    #[error("returned from a subroutine with an empty call stack")]
    StackUnderflow,

    /// A key-skip instruction named a key outside the 16-key pad.
    #[error("key {value:#04X} stored in V{register:X} is out of range")]
    InvalidKey { register: u8, value: u8 },

    /// A font-lookup instruction named a value with no hex glyph.
    #[error("no font glyph for value {value:#04X} stored in V{register:X}")]
    InvalidDigit { register: u8, value: u8 },

    /// A memory block operation would run past the end of memory.
    #[error("{len} byte memory access at I = {i:#06X} is out of range")]
    AddressOutOfRange { i: u16, len: u16 },
}
