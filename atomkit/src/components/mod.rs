// Component Library
// Atoms (button, icon, typography) and the molecules built from them (alert)

pub mod alert;
pub mod button;
pub mod icon;
pub mod typography;

// Re-export components for easy access
pub use alert::*;
pub use button::*;
pub use icon::*;
pub use typography::*;
