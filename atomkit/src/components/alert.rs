// Alert Component
// Molecule: Icon + Text atoms, plus an optional ghost dismiss Button

use crate::components::button::{ButtonSize, ButtonVariant, button};
use crate::components::icon::{IconColor, IconName, IconSize, icon};
use crate::components::typography::{TextWeight, text};
use crate::node::{Callback, Node, Role, Tag};
use crate::style::{StyleAttributes, StyleProp};
use crate::tokens::{TOKENS, Tokens};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Accessible name of the embedded dismiss control.
pub const DISMISS_LABEL: &str = "Dismiss alert";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertVariant {
    Success,
    Warning,
    Error,
    Info,
}

impl AlertVariant {
    pub const ALL: [AlertVariant; 4] = [
        AlertVariant::Success,
        AlertVariant::Warning,
        AlertVariant::Error,
        AlertVariant::Info,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AlertVariant::Success => "success",
            AlertVariant::Warning => "warning",
            AlertVariant::Error => "error",
            AlertVariant::Info => "info",
        }
    }

    pub fn icon(self) -> IconName {
        match self {
            AlertVariant::Success => IconName::Check,
            AlertVariant::Warning => IconName::Warning,
            AlertVariant::Error => IconName::Error,
            AlertVariant::Info => IconName::Info,
        }
    }

    /// Accessible name of the variant icon, e.g. `success alert`.
    pub fn icon_label(self) -> String {
        format!("{} alert", self.as_str())
    }

    pub fn container_style(self, tokens: &Tokens) -> StyleAttributes {
        let colors = tokens.colors.variant(self);
        StyleAttributes::new()
            .with(StyleProp::Display, "flex")
            .with(StyleProp::AlignItems, "flex-start")
            .with(StyleProp::Gap, tokens.spacing.md)
            .with(StyleProp::Padding, tokens.spacing.lg)
            .with(StyleProp::BackgroundColor, colors.background)
            .with(StyleProp::Border, format!("1px solid {}", colors.border))
            .with(StyleProp::BorderRadius, tokens.radius.md)
    }
}

impl fmt::Display for AlertVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct AlertBuilder {
    variant: AlertVariant,
    message: String,
    title: Option<String>,
    dismissible: bool,
    on_dismiss: Option<Callback>,
}

impl AlertBuilder {
    pub fn new(variant: AlertVariant, message: impl Into<String>) -> Self {
        Self {
            variant,
            message: message.into(),
            title: None,
            dismissible: false,
            on_dismiss: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    pub fn on_dismiss<F>(mut self, handler: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_dismiss = Some(Rc::new(handler));
        self
    }

    pub fn on_dismiss_shared(mut self, handler: Option<Callback>) -> Self {
        self.on_dismiss = handler;
        self
    }

    pub fn build(self) -> Node {
        self.build_with(&TOKENS)
    }

    pub fn build_with(self, tokens: &Tokens) -> Node {
        let variant = self.variant;
        let text_color = tokens.colors.variant(variant).text;

        let variant_icon = icon(variant.icon())
            .size(IconSize::Large)
            .color(IconColor::Variant(variant))
            .aria_label(variant.icon_label())
            .build_with(tokens);

        let mut content = Node::new(Tag::Container);
        content.style = StyleAttributes::new()
            .with(StyleProp::Flex, "1")
            .with(StyleProp::Display, "flex")
            .with(StyleProp::FlexDirection, "column")
            .with(StyleProp::Gap, tokens.spacing.xs);
        // An empty title renders no line at all.
        if let Some(title) = self.title.filter(|title| !title.is_empty()) {
            content = content.child(
                text(title)
                    .weight(TextWeight::Bold)
                    .color(text_color)
                    .build_with(tokens),
            );
        }
        content = content.child(text(self.message).color(text_color).build_with(tokens));

        let mut alert = Node::new(Tag::Container).child(variant_icon).child(content);
        alert.explicit_role = Some(Role::Alert);
        alert.style = variant.container_style(tokens);

        if self.dismissible {
            let close_icon = icon(IconName::Close)
                .size(IconSize::Small)
                .color(IconColor::Custom(text_color))
                .build_with(tokens);
            alert = alert.child(
                button(close_icon)
                    .variant(ButtonVariant::Ghost)
                    .size(ButtonSize::Small)
                    .aria_label(DISMISS_LABEL)
                    .on_activate_shared(self.on_dismiss)
                    .build_with(tokens),
            );
        }

        alert
    }
}

// Convenience functions
pub fn alert(variant: AlertVariant, message: impl Into<String>) -> AlertBuilder {
    AlertBuilder::new(variant, message)
}

pub fn success_alert(message: impl Into<String>) -> AlertBuilder {
    AlertBuilder::new(AlertVariant::Success, message)
}

pub fn warning_alert(message: impl Into<String>) -> AlertBuilder {
    AlertBuilder::new(AlertVariant::Warning, message)
}

pub fn error_alert(message: impl Into<String>) -> AlertBuilder {
    AlertBuilder::new(AlertVariant::Error, message)
}

pub fn info_alert(message: impl Into<String>) -> AlertBuilder {
    AlertBuilder::new(AlertVariant::Info, message)
}
