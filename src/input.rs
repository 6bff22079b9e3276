//! Key state for the 16-key hexadecimal pad. The driver owns the mapping
//! from its physical input device to key indices 0x0-0xF and writes the
//! array on press/release events; the processor only reads it.

/// Number of keys on the Chip8 pad.
pub const KEY_COUNT: usize = 16;

/// Input state for the [`super::Chip8`]. Keeps track of the pressed state
/// of all 16 keys.
#[derive(Default)]
pub struct Input {
    state: [bool; KEY_COUNT],
}

impl Input {
    /// Creates a new [`Input`] with every key released.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the pressed state of the given key.
    ///
    /// `key_code` comes from the driver's own keymap and must be below
    /// [`KEY_COUNT`].
    pub fn update(&mut self, key_code: u8, pressed: bool) {
        self.state[usize::from(key_code)] = pressed;
    }

    /// Returns whether the given key is currently pressed.
    #[must_use]
    pub fn is_key_pressed(&self, key_code: u8) -> bool {
        self.state[usize::from(key_code)]
    }

    /// Returns the lowest-numbered pressed key, if any. The await-keypress
    /// instruction consumes keys in this order.
    #[must_use]
    pub fn first_pressed(&self) -> Option<u8> {
        self.state.iter().position(|&pressed| pressed).map(|k| k as u8)
    }
}
