// Transition Token System
// Only static transition declarations; no animation runtime lives here

use serde::Serialize;

pub const TRANSITION_BUTTON: &str = "background-color 0.2s, opacity 0.2s";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TransitionScale {
    pub button: &'static str,
}

impl TransitionScale {
    pub const DEFAULT: Self = Self {
        button: TRANSITION_BUTTON,
    };
}

impl Default for TransitionScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}
