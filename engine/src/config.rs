//! Key-binding persistence (§6 "Persisted state", §10.2).

use serde::{Deserialize, Serialize};

/// Mirrors the seven input axes of §6. `pause` is hardwired to Escape and
/// not persisted, matching the original's documented behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub left: u8,
    pub right: u8,
    pub jump: u8,
    pub fire: u8,
    pub open: u8,
    pub teleport: u8,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: 0x4B,
            right: 0x4D,
            jump: 0x39,
            fire: 0x38,
            open: 0x52,
            teleport: 0x3A,
        }
    }
}

impl KeyBindings {
    /// Loads the 6-byte keybinding file. A missing or corrupt file is not an
    /// asset error in the §7 sense — callers are expected to fall back to
    /// `KeyBindings::default()` rather than treat this as fatal (§10.2).
    pub fn load(path: &std::path::Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let (bindings, _) = bincode::serde::decode_from_slice(&bytes, bincode::config::standard())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(bindings)
    }

    pub fn save(&self, path: &std::path::Path) -> std::io::Result<()> {
        let bytes = bincode::serde::encode_to_vec(self, bincode::config::standard())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_a_file() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("keybindings-test-{:?}.bin", std::thread::current().id()));

        let bindings = KeyBindings {
            left: 1,
            right: 2,
            jump: 3,
            fire: 4,
            open: 5,
            teleport: 6,
        };
        bindings.save(&path).expect("saves");
        let loaded = KeyBindings::load(&path).expect("loads");
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, bindings);
    }

    #[test]
    fn default_does_not_panic() {
        let defaults = KeyBindings::default();
        assert_ne!(defaults.left, defaults.right);
    }
}
