// Button Component
// Interactive atom: base style, then size table, then variant table

use crate::node::{Callback, Node, Tag};
use crate::style::{StyleAttributes, StyleProp};
use crate::tokens::{TOKENS, Tokens};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 3] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Ghost,
    ];

    /// Variant-derived fields: background, text color and border.
    pub fn style(self, tokens: &Tokens) -> StyleAttributes {
        let colors = &tokens.colors;
        let (background, color, border) = match self {
            ButtonVariant::Primary => (colors.info.icon, colors.neutral.white, "none".to_string()),
            ButtonVariant::Secondary => (
                colors.neutral.white,
                colors.neutral.gray800,
                format!("1px solid {}", colors.neutral.gray300),
            ),
            ButtonVariant::Ghost => (colors.transparent, colors.neutral.gray600, "none".to_string()),
        };
        StyleAttributes::new()
            .with(StyleProp::BackgroundColor, background)
            .with(StyleProp::Color, color)
            .with(StyleProp::Border, border)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonSize {
    #[serde(rename = "sm")]
    Small,
    #[default]
    #[serde(rename = "md")]
    Medium,
    #[serde(rename = "lg")]
    Large,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large];

    /// Size-derived fields: padding and font size.
    pub fn style(self, tokens: &Tokens) -> StyleAttributes {
        let spacing = &tokens.spacing;
        let typography = &tokens.typography;
        let (padding_y, padding_x, font_size) = match self {
            ButtonSize::Small => (spacing.xs, spacing.sm, typography.size_sm),
            ButtonSize::Medium => (spacing.sm, spacing.md, typography.size_base),
            ButtonSize::Large => (spacing.md, spacing.lg, typography.size_lg),
        };
        StyleAttributes::new()
            .with(StyleProp::Padding, format!("{padding_y} {padding_x}"))
            .with(StyleProp::FontSize, font_size)
    }
}

/// Semantic kind of the control, rendered as the HTML `type` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    #[default]
    #[serde(alias = "button")]
    Action,
    Submit,
    Reset,
}

impl ButtonKind {
    pub fn html_type(self) -> &'static str {
        match self {
            ButtonKind::Action => "button",
            ButtonKind::Submit => "submit",
            ButtonKind::Reset => "reset",
        }
    }
}

pub struct ButtonBuilder {
    content: Node,
    variant: ButtonVariant,
    size: ButtonSize,
    kind: ButtonKind,
    disabled: bool,
    aria_label: Option<String>,
    on_activate: Option<Callback>,
}

impl ButtonBuilder {
    pub fn new(content: impl Into<Node>) -> Self {
        Self {
            content: content.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            kind: ButtonKind::Action,
            disabled: false,
            aria_label: None,
            on_activate: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn kind(mut self, kind: ButtonKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn on_activate<F>(mut self, handler: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_activate = Some(Rc::new(handler));
        self
    }

    /// Wires an already shared callback, used by molecules forwarding a
    /// caller's hook without wrapping it.
    pub fn on_activate_shared(mut self, handler: Option<Callback>) -> Self {
        self.on_activate = handler;
        self
    }

    pub fn resolve_style(&self, tokens: &Tokens) -> StyleAttributes {
        base_style(self.disabled, tokens)
            .merge(self.size.style(tokens))
            .merge(self.variant.style(tokens))
    }

    pub fn build(self) -> Node {
        self.build_with(&TOKENS)
    }

    pub fn build_with(self, tokens: &Tokens) -> Node {
        let style = self.resolve_style(tokens);
        let mut node = Node::new(Tag::Button).child(self.content);
        node.style = style;
        node.aria_label = self.aria_label;
        node.disabled = self.disabled;
        node.on_activate = self.on_activate;
        node.attributes.insert("type", self.kind.html_type().to_string());
        node
    }
}

fn base_style(disabled: bool, tokens: &Tokens) -> StyleAttributes {
    let (cursor, opacity) = if disabled {
        ("not-allowed", tokens.opacity.disabled)
    } else {
        ("pointer", tokens.opacity.enabled)
    };
    StyleAttributes::new()
        .with(StyleProp::FontFamily, tokens.typography.family_base)
        .with(StyleProp::FontWeight, tokens.typography.weight_medium)
        .with(StyleProp::BorderRadius, tokens.radius.sm)
        .with(StyleProp::Cursor, cursor)
        .with(StyleProp::Opacity, opacity)
        .with(StyleProp::Display, "inline-flex")
        .with(StyleProp::AlignItems, "center")
        .with(StyleProp::JustifyContent, "center")
        .with(StyleProp::Gap, tokens.spacing.xs)
        .with(StyleProp::Transition, tokens.transition.button)
}

// Convenience function for creating buttons
pub fn button(content: impl Into<Node>) -> ButtonBuilder {
    ButtonBuilder::new(content)
}
