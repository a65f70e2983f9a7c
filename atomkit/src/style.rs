// Style Attributes
// Flat, ordered property map produced by variant resolution

use indexmap::IndexMap;
use serde::Serialize;

/// Visual properties the kit resolves. Serialized and rendered as CSS names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleProp {
    AlignItems,
    BackgroundColor,
    Border,
    BorderRadius,
    Color,
    Cursor,
    Display,
    Flex,
    FlexDirection,
    FlexShrink,
    FontFamily,
    FontSize,
    FontWeight,
    Gap,
    Height,
    JustifyContent,
    Margin,
    Opacity,
    Padding,
    Transition,
    Width,
}

impl StyleProp {
    pub fn as_css(self) -> &'static str {
        match self {
            StyleProp::AlignItems => "align-items",
            StyleProp::BackgroundColor => "background-color",
            StyleProp::Border => "border",
            StyleProp::BorderRadius => "border-radius",
            StyleProp::Color => "color",
            StyleProp::Cursor => "cursor",
            StyleProp::Display => "display",
            StyleProp::Flex => "flex",
            StyleProp::FlexDirection => "flex-direction",
            StyleProp::FlexShrink => "flex-shrink",
            StyleProp::FontFamily => "font-family",
            StyleProp::FontSize => "font-size",
            StyleProp::FontWeight => "font-weight",
            StyleProp::Gap => "gap",
            StyleProp::Height => "height",
            StyleProp::JustifyContent => "justify-content",
            StyleProp::Margin => "margin",
            StyleProp::Opacity => "opacity",
            StyleProp::Padding => "padding",
            StyleProp::Transition => "transition",
            StyleProp::Width => "width",
        }
    }
}

/// Resolved styles for one element.
///
/// Merging is a shallow key-wise overwrite: the right-hand side wins on
/// collisions, and a key keeps the position of its first insertion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyleAttributes(IndexMap<StyleProp, String>);

impl StyleAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, prop: StyleProp, value: impl Into<String>) -> Self {
        self.set(prop, value);
        self
    }

    pub fn set(&mut self, prop: StyleProp, value: impl Into<String>) {
        self.0.insert(prop, value.into());
    }

    pub fn get(&self, prop: StyleProp) -> Option<&str> {
        self.0.get(&prop).map(String::as_str)
    }

    pub fn merge(mut self, other: StyleAttributes) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleProp, &str)> {
        self.0.iter().map(|(prop, value)| (*prop, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Inline declaration list, e.g. `color: #fff; opacity: 1`.
    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(prop, value)| format!("{}: {}", prop.as_css(), value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl FromIterator<(StyleProp, String)> for StyleAttributes {
    fn from_iter<I: IntoIterator<Item = (StyleProp, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
