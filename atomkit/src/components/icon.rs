// Icon Component
// Decorative by default; labelled icons expose the `img` role

use crate::components::alert::AlertVariant;
use crate::node::{Node, Role, Tag};
use crate::style::{StyleAttributes, StyleProp};
use crate::tokens::{TOKENS, Tokens};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    Check,
    Warning,
    Error,
    Info,
    Close,
}

impl IconName {
    pub fn to_kebab_case(self) -> &'static str {
        match self {
            IconName::Check => "check",
            IconName::Warning => "warning",
            IconName::Error => "error",
            IconName::Info => "info",
            IconName::Close => "close",
        }
    }

    /// Text fallback drawn when no icon font or sprite is mounted.
    pub fn glyph(self) -> &'static str {
        match self {
            IconName::Check => "✓",
            IconName::Warning => "⚠",
            IconName::Error => "✕",
            IconName::Info => "ℹ",
            IconName::Close => "×",
        }
    }
}

// Icon size variants matching design system
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconSize {
    Small,  // 16px
    Medium, // 20px
    Large,  // 24px
}

impl IconSize {
    pub fn to_px(self) -> u32 {
        match self {
            IconSize::Small => 16,
            IconSize::Medium => 20,
            IconSize::Large => 24,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconColor {
    Current,                 // Inherit from parent (default)
    Variant(AlertVariant),   // Icon color of an alert variant
    Custom(&'static str),
}

impl IconColor {
    pub fn resolve(self, tokens: &Tokens) -> &'static str {
        match self {
            IconColor::Current => "currentColor",
            IconColor::Variant(variant) => tokens.colors.variant(variant).icon,
            IconColor::Custom(color) => color,
        }
    }
}

pub struct IconBuilder {
    name: IconName,
    size: IconSize,
    color: IconColor,
    aria_label: Option<String>,
}

impl IconBuilder {
    pub fn new(name: IconName) -> Self {
        Self {
            name,
            size: IconSize::Medium,
            color: IconColor::Current,
            aria_label: None,
        }
    }

    pub fn size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: IconColor) -> Self {
        self.color = color;
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn build(self) -> Node {
        self.build_with(&TOKENS)
    }

    pub fn build_with(self, tokens: &Tokens) -> Node {
        let size_px = format!("{}px", self.size.to_px());
        let mut node = Node::new(Tag::Icon);
        node.style = StyleAttributes::new()
            .with(StyleProp::Display, "inline-flex")
            .with(StyleProp::AlignItems, "center")
            .with(StyleProp::JustifyContent, "center")
            .with(StyleProp::Width, size_px.clone())
            .with(StyleProp::Height, size_px.clone())
            .with(StyleProp::FontSize, size_px)
            .with(StyleProp::FlexShrink, "0")
            .with(StyleProp::Color, self.color.resolve(tokens));
        node.attributes.insert("data-icon", self.name.to_kebab_case().to_string());
        node.text = Some(self.name.glyph().to_string());
        match self.aria_label {
            Some(label) => {
                node.explicit_role = Some(Role::Img);
                node.aria_label = Some(label);
            }
            None => node.aria_hidden = true,
        }
        node
    }
}

pub fn icon(name: IconName) -> IconBuilder {
    IconBuilder::new(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labelled_icon_is_an_img() {
        let node = icon(IconName::Check).aria_label("success alert").build();
        assert_eq!(node.role(), Some(Role::Img));
        assert_eq!(node.accessible_name(), "success alert");
        assert!(!node.aria_hidden);
    }

    #[test]
    fn unlabelled_icon_is_decorative() {
        let node = icon(IconName::Close).build();
        assert_eq!(node.role(), None);
        assert!(node.aria_hidden);
    }

    #[test]
    fn size_sets_box_dimensions() {
        let node = icon(IconName::Info).size(IconSize::Large).build();
        assert_eq!(node.style_value(StyleProp::Width), Some("24px"));
        assert_eq!(node.style_value(StyleProp::Height), Some("24px"));
    }

    #[test]
    fn variant_color_comes_from_palette() {
        let node = icon(IconName::Warning)
            .color(IconColor::Variant(AlertVariant::Warning))
            .build();
        assert_eq!(node.style_value(StyleProp::Color), Some(TOKENS.colors.warning.icon));
        assert_eq!(node.attributes.get("data-icon").map(String::as_str), Some("warning"));
    }
}
