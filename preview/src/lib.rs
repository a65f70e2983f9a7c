pub mod render;
pub mod simulate;
pub mod stories;
