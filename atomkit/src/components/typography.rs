// Typography Components
// Text run atom resolved against the typography scale

use crate::node::{Node, Tag};
use crate::style::{StyleAttributes, StyleProp};
use crate::tokens::{TOKENS, Tokens};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextWeight {
    #[default]
    Normal,
    Medium,
    Bold,
}

impl TextWeight {
    pub fn resolve(self, tokens: &Tokens) -> &'static str {
        match self {
            TextWeight::Normal => tokens.typography.weight_normal,
            TextWeight::Medium => tokens.typography.weight_medium,
            TextWeight::Bold => tokens.typography.weight_bold,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextSize {
    Small,
    #[default]
    Base,
    Large,
}

impl TextSize {
    pub fn resolve(self, tokens: &Tokens) -> &'static str {
        match self {
            TextSize::Small => tokens.typography.size_sm,
            TextSize::Base => tokens.typography.size_base,
            TextSize::Large => tokens.typography.size_lg,
        }
    }
}

pub struct TextBuilder {
    content: String,
    weight: TextWeight,
    size: TextSize,
    color: Option<&'static str>,
}

impl TextBuilder {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            weight: TextWeight::Normal,
            size: TextSize::Base,
            color: None,
        }
    }

    pub fn weight(mut self, weight: TextWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn size(mut self, size: TextSize) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: &'static str) -> Self {
        self.color = Some(color);
        self
    }

    pub fn build(self) -> Node {
        self.build_with(&TOKENS)
    }

    pub fn build_with(self, tokens: &Tokens) -> Node {
        let mut style = StyleAttributes::new()
            .with(StyleProp::FontFamily, tokens.typography.family_base)
            .with(StyleProp::FontSize, self.size.resolve(tokens))
            .with(StyleProp::FontWeight, self.weight.resolve(tokens))
            .with(StyleProp::Margin, "0");
        if let Some(color) = self.color {
            style.set(StyleProp::Color, color);
        }
        let mut node = Node::new(Tag::Text);
        node.style = style;
        node.text = Some(self.content);
        node
    }
}

pub fn text(content: impl Into<String>) -> TextBuilder {
    TextBuilder::new(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_normal_base() {
        let node = text("Hello").build();
        assert_eq!(node.text.as_deref(), Some("Hello"));
        assert_eq!(node.style_value(StyleProp::FontWeight), Some("400"));
        assert_eq!(node.style_value(StyleProp::FontSize), Some("16px"));
        assert_eq!(node.style_value(StyleProp::Color), None);
    }

    #[test]
    fn bold_with_color() {
        let node = text("Title").weight(TextWeight::Bold).color("#155724").build();
        assert_eq!(node.style_value(StyleProp::FontWeight), Some("700"));
        assert_eq!(node.style_value(StyleProp::Color), Some("#155724"));
    }
}
