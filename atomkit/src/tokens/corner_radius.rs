// Corner Radius Token System

use serde::Serialize;

pub const CORNER_RADIUS_4: &str = "4px"; // Buttons
pub const CORNER_RADIUS_6: &str = "6px"; // Alerts, notifications

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RadiusScale {
    pub sm: &'static str,
    pub md: &'static str,
}

impl RadiusScale {
    pub const DEFAULT: Self = Self {
        sm: CORNER_RADIUS_4,
        md: CORNER_RADIUS_6,
    };
}

impl Default for RadiusScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}
