// Opacity Token System
// Transparency applied to interactive atoms

use serde::Serialize;

pub const OPACITY_OPAQUE: &str = "1"; // Fully opaque (default)
pub const OPACITY_MUTED: &str = "0.6";

// Common usage aliases for interactive states
pub const OPACITY_ENABLED: &str = OPACITY_OPAQUE;
pub const OPACITY_DISABLED: &str = OPACITY_MUTED;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OpacityScale {
    pub enabled: &'static str,
    pub disabled: &'static str,
}

impl OpacityScale {
    pub const DEFAULT: Self = Self {
        enabled: OPACITY_ENABLED,
        disabled: OPACITY_DISABLED,
    };
}

impl Default for OpacityScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}
