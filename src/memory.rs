//! The `memory` module provides the byte-addressable store of a Chip8
//! system: 4096 bytes holding the font sprites, the loaded program and
//! whatever scratch data the program writes at run time.

use std::fs;
use std::ops::{Index, IndexMut};
use std::path::Path;

use crate::error::{Error, Result};

/// The total size of the Chip8 memory.
pub const MEMORY_SIZE: usize = 4096;

/// The size of the interpreter area. Program memory starts here.
pub const PROGRAM_START: usize = 0x200;

/// The largest ROM image that fits between the interpreter area and the
/// end of memory.
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START;

/// Built-in Chip8 font data: 16 glyphs of 5 bytes each for the hexadecimal
/// digits 0-F. Stored in the interpreter area and never mutated afterwards.
const FONT: [u8; 80] = [
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

/// The [`Memory`] struct represents the memory of a Chip8 system. It
/// contains a fixed-size array of [`u8`] values that can be accessed using
/// the [`Index`] and [`IndexMut`] traits.
pub struct Memory {
    memory: [u8; MEMORY_SIZE],
}

impl Default for Memory {
    fn default() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        memory[..FONT.len()].copy_from_slice(&FONT);
        Self { memory }
    }
}

impl Index<usize> for Memory {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.memory[index]
    }
}

impl IndexMut<usize> for Memory {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.memory[index]
    }
}

impl Memory {
    /// Creates a new [`Memory`] with the font table loaded and everything
    /// else zeroed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies a ROM image into program memory starting at
    /// [`PROGRAM_START`].
    ///
    /// Bytes beyond the image's length keep whatever they held before, so
    /// loading a shorter ROM over a longer one does not erase the tail of
    /// the previous program. Fails with [`Error::RomTooLarge`] if the image
    /// exceeds [`MAX_ROM_SIZE`].
    pub fn load_rom_data(&mut self, data: &[u8]) -> Result<()> {
        if data.len() > MAX_ROM_SIZE {
            return Err(Error::RomTooLarge {
                size: data.len(),
                max: MAX_ROM_SIZE,
            });
        }
        self.memory[PROGRAM_START..PROGRAM_START + data.len()].copy_from_slice(data);
        Ok(())
    }

    /// Reads a ROM file and loads it into program memory.
    ///
    /// Fails with [`Error::FileNotFound`] if `path` does not name a regular
    /// file, [`Error::Io`] if the file cannot be read, and
    /// [`Error::RomTooLarge`] if its size exceeds [`MAX_ROM_SIZE`].
    /// Registers, program counter and timers are not touched; callers that
    /// want a fresh run reset the CPU separately.
    pub fn load_rom(&mut self, path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let data = fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("read {} ROM bytes from {}", data.len(), path.display());
        self.load_rom_data(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_memory_holds_font() {
        let memory = Memory::new();
        // glyph for 0 starts the table, glyph for F ends it
        assert_eq!(memory[0x000], 0xF0);
        assert_eq!(memory[0x04F], 0x80);
        assert_eq!(memory[0x050], 0x00);
    }

    #[test]
    fn test_load_rom_data_lands_at_program_start() {
        let mut memory = Memory::new();
        memory.load_rom_data(&[0xAA, 0xBB]).unwrap();
        assert_eq!(memory[0x200], 0xAA);
        assert_eq!(memory[0x201], 0xBB);
        assert_eq!(memory[0x202], 0x00);
    }

    #[test]
    fn test_load_rom_data_keeps_font_and_tail() {
        let mut memory = Memory::new();
        memory.load_rom_data(&[0x11, 0x22, 0x33, 0x44]).unwrap();
        memory.load_rom_data(&[0x55]).unwrap();
        assert_eq!(memory[0x000], 0xF0);
        // the shorter image only overwrites its own length
        assert_eq!(memory[0x200], 0x55);
        assert_eq!(memory[0x201], 0x22);
        assert_eq!(memory[0x203], 0x44);
    }

    #[test]
    fn test_load_rom_data_accepts_max_size() {
        let mut memory = Memory::new();
        assert!(memory.load_rom_data(&[0u8; MAX_ROM_SIZE]).is_ok());
    }

    #[test]
    fn test_load_rom_data_rejects_oversized_image() {
        let mut memory = Memory::new();
        let result = memory.load_rom_data(&[0u8; MAX_ROM_SIZE + 1]);
        assert!(matches!(
            result,
            Err(Error::RomTooLarge { size, max }) if size == MAX_ROM_SIZE + 1 && max == MAX_ROM_SIZE
        ));
    }

    #[test]
    fn test_load_rom_missing_file() {
        let mut memory = Memory::new();
        let path = std::env::temp_dir().join("chip8_core_no_such_rom.ch8");
        assert!(matches!(
            memory.load_rom(&path),
            Err(Error::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_load_rom_directory_is_not_a_file() {
        let mut memory = Memory::new();
        assert!(matches!(
            memory.load_rom(&std::env::temp_dir()),
            Err(Error::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_load_rom_from_file() {
        let path = std::env::temp_dir().join("chip8_core_load_rom_test.ch8");
        std::fs::write(&path, [0x60, 0x2A]).unwrap();

        let mut memory = Memory::new();
        let result = memory.load_rom(&path);
        std::fs::remove_file(&path).ok();

        result.unwrap();
        assert_eq!(memory[0x200], 0x60);
        assert_eq!(memory[0x201], 0x2A);
    }
}
