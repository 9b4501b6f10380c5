//! Konami-code easter egg.

use crate::constants::{
    EASTER_EGG_ANIMATION, EASTER_EGG_DURATION_MS, EASTER_EGG_MESSAGE, KONAMI_WINDOW,
};
use std::collections::VecDeque;
use std::time::Duration;

/// ↑ ↑ ↓ ↓ ← → ← → b a, as `KeyboardEvent.key` values.
pub const KONAMI_PATTERN: [&str; KONAMI_WINDOW] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// What the page does when the code is entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EasterEgg {
    /// Body animation to apply immediately
    pub animation: &'static str,
    /// Delay before clearing the animation and showing the message
    pub duration: Duration,
    pub message: &'static str,
}

impl Default for EasterEgg {
    fn default() -> Self {
        Self {
            animation: EASTER_EGG_ANIMATION,
            duration: Duration::from_millis(EASTER_EGG_DURATION_MS),
            message: EASTER_EGG_MESSAGE,
        }
    }
}

/// Watches the last ten keys for the konami sequence.
#[derive(Debug, Clone, Default)]
pub struct KonamiDetector {
    keys: VecDeque<String>,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a key press. Returns the easter egg when the sequence completes.
    pub fn on_key(&mut self, key: &str) -> Option<EasterEgg> {
        if self.keys.len() == KONAMI_WINDOW {
            self.keys.pop_front();
        }
        self.keys.push_back(key.to_string());

        if self.keys.iter().map(String::as_str).eq(KONAMI_PATTERN) {
            tracing::info!("Konami code entered");
            Some(EasterEgg::default())
        } else {
            None
        }
    }
}
