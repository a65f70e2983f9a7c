// Spacing Token System
// Four-step scale shared by paddings and gaps

use serde::Serialize;

/// 4px spacing
pub const SPACING_XS: &str = "4px";

/// 8px spacing
pub const SPACING_SM: &str = "8px";

/// 16px spacing
pub const SPACING_MD: &str = "16px";

/// 24px spacing
pub const SPACING_LG: &str = "24px";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SpacingScale {
    pub xs: &'static str,
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
}

impl SpacingScale {
    pub const DEFAULT: Self = Self {
        xs: SPACING_XS,
        sm: SPACING_SM,
        md: SPACING_MD,
        lg: SPACING_LG,
    };
}

impl Default for SpacingScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}
