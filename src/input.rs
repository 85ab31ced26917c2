//! Keyboard intent flags
//!
//! `keydown` sets a flag, `keyup` clears it; the per-frame step reads the
//! flags synchronously. There is no state machine: the five flags are
//! independent booleans, so diagonal movement is just two flags held at once.

use serde::{Deserialize, Serialize};

/// Movement intent for the hunter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Brake: bleed velocity toward zero while held
    pub decay: bool,
}

impl Intent {
    /// Apply a key event by DOM `key` value. Returns false for keys the toy
    /// ignores, so callers can decide whether to swallow the event.
    pub fn apply_key(&mut self, key: &str, pressed: bool) -> bool {
        match key {
            "a" | "A" | "ArrowLeft" => self.left = pressed,
            "d" | "D" | "ArrowRight" => self.right = pressed,
            "w" | "W" | "ArrowUp" => self.up = pressed,
            "s" | "S" | "ArrowDown" => self.down = pressed,
            " " => self.decay = pressed,
            _ => return false,
        }
        true
    }
}
