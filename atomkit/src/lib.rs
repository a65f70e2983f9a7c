//! # atomkit
//!
//! A small, type-safe component kit built on atomic design: atoms resolve
//! their styles from a shared, immutable token palette, and molecules
//! compose atoms while keeping their accessibility contracts.
//!
//! Every component is a builder that renders into a [`Node`] tree. The tree
//! is renderer-agnostic: [`markup::to_html`] turns it into static HTML, and
//! the `zoon` feature mounts it as MoonZoon elements.
//!
//! ## Quick Start
//!
//! ```rust
//! use atomkit::*;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let dismissed = Rc::new(Cell::new(false));
//! let flag = dismissed.clone();
//!
//! let tree = warning_alert("Check input.")
//!     .dismissible(true)
//!     .on_dismiss(move || flag.set(true))
//!     .build();
//!
//! tree.get_by_role(Role::Button, "Dismiss alert").activate();
//! assert!(dismissed.get());
//! ```
//!
//! ## Components
//!
//! - **Button**: primary, secondary and ghost variants in three sizes
//! - **Icon**: decorative or labelled (`img` role) glyphs
//! - **Text**: text runs on the typography scale
//! - **Alert**: success, warning, error and info banners with optional dismiss control

pub mod components;
pub mod markup;
pub mod node;
pub mod style;
pub mod tokens;

#[cfg(feature = "zoon")]
pub mod zoon_el;

// Re-export all components for easy access
pub use components::*;
pub use node::{Callback, Node, Role, Tag};
pub use style::{StyleAttributes, StyleProp};
pub use tokens::{TOKENS, Tokens};

#[cfg(feature = "zoon")]
pub use zoon;
