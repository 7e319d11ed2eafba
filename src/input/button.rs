//! Debounced push-button edge detector.
//!
//! Polled from the main loop with a timer comparison rather than an
//! interrupt: a level change is accepted only after the debounce
//! interval has passed since the last accepted change.

use crate::constants::BUTTON_DEBOUNCE_MS;

/// A debounced button edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonEvent {
    Press,
    Release,
}

/// Level-polling debouncer. Stores the last accepted level and the time
/// it was accepted at.
pub struct ButtonDebouncer {
    last_level: bool,
    last_change_ms: u32,
}

impl ButtonDebouncer {
    /// `resting_level` is the polarity-resolved level sampled at startup
    /// (false = released).
    pub const fn new(resting_level: bool) -> Self {
        ButtonDebouncer {
            last_level: resting_level,
            last_change_ms: 0,
        }
    }

    /// Sample the current level. Returns an edge event once the level has
    /// changed and the debounce interval has elapsed; otherwise `None`.
    pub fn sample(&mut self, pressed: bool, now_ms: u32) -> Option<ButtonEvent> {
        if pressed == self.last_level {
            return None;
        }
        if now_ms.wrapping_sub(self.last_change_ms) < BUTTON_DEBOUNCE_MS {
            return None;
        }
        self.last_level = pressed;
        self.last_change_ms = now_ms;
        Some(if pressed {
            ButtonEvent::Press
        } else {
            ButtonEvent::Release
        })
    }
}
