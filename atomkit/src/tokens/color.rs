// Color Token System
// Variant-indexed palette for alerts plus a neutral palette for plain surfaces

use crate::components::alert::AlertVariant;
use serde::Serialize;

/// Cohesive color set for one alert variant. The four values are always
/// looked up together so they never mix across variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VariantColors {
    pub background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub icon: &'static str,
}

pub const SUCCESS: VariantColors = VariantColors {
    background: "#d4edda",
    border: "#c3e6cb",
    text: "#155724",
    icon: "#28a745",
};

pub const WARNING: VariantColors = VariantColors {
    background: "#fff3cd",
    border: "#ffeeba",
    text: "#856404",
    icon: "#ffc107",
};

pub const ERROR: VariantColors = VariantColors {
    background: "#f8d7da",
    border: "#f5c6cb",
    text: "#721c24",
    icon: "#dc3545",
};

pub const INFO: VariantColors = VariantColors {
    background: "#d1ecf1",
    border: "#bee5eb",
    text: "#0c5460",
    icon: "#17a2b8",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NeutralPalette {
    pub white: &'static str,
    pub gray300: &'static str,
    pub gray600: &'static str,
    pub gray800: &'static str,
}

pub const NEUTRAL: NeutralPalette = NeutralPalette {
    white: "#ffffff",
    gray300: "#dee2e6",
    gray600: "#6c757d",
    gray800: "#343a40",
};

pub const TRANSPARENT: &str = "transparent";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ColorPalette {
    pub success: VariantColors,
    pub warning: VariantColors,
    pub error: VariantColors,
    pub info: VariantColors,
    pub neutral: NeutralPalette,
    pub transparent: &'static str,
}

impl ColorPalette {
    pub const DEFAULT: Self = Self {
        success: SUCCESS,
        warning: WARNING,
        error: ERROR,
        info: INFO,
        neutral: NEUTRAL,
        transparent: TRANSPARENT,
    };

    pub fn variant(&self, variant: AlertVariant) -> &VariantColors {
        match variant {
            AlertVariant::Success => &self.success,
            AlertVariant::Warning => &self.warning,
            AlertVariant::Error => &self.error,
            AlertVariant::Info => &self.info,
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::DEFAULT
    }
}
