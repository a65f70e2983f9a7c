// Typography Token System
// Font family, weight steps and size steps used by buttons and text runs

use serde::Serialize;

// Font Families
pub const FONT_FAMILY_BASE: &str =
    "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif";

// Font Sizes
pub const FONT_SIZE_SM: &str = "14px";
pub const FONT_SIZE_BASE: &str = "16px";
pub const FONT_SIZE_LG: &str = "18px";

// Font Weights
pub const FONT_WEIGHT_NORMAL: &str = "400";
pub const FONT_WEIGHT_MEDIUM: &str = "500";
pub const FONT_WEIGHT_BOLD: &str = "700";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TypographyScale {
    pub family_base: &'static str,
    pub weight_normal: &'static str,
    pub weight_medium: &'static str,
    pub weight_bold: &'static str,
    pub size_sm: &'static str,
    pub size_base: &'static str,
    pub size_lg: &'static str,
}

impl TypographyScale {
    pub const DEFAULT: Self = Self {
        family_base: FONT_FAMILY_BASE,
        weight_normal: FONT_WEIGHT_NORMAL,
        weight_medium: FONT_WEIGHT_MEDIUM,
        weight_bold: FONT_WEIGHT_BOLD,
        size_sm: FONT_SIZE_SM,
        size_base: FONT_SIZE_BASE,
        size_lg: FONT_SIZE_LG,
    };
}

impl Default for TypographyScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}
