// Design Token System
// Immutable palette every atom and molecule resolves its styles against

pub mod animation;
pub mod color;
pub mod corner_radius;
pub mod opacity;
pub mod spacing;
pub mod typography;

pub use animation::*;
pub use color::*;
pub use corner_radius::*;
pub use opacity::*;
pub use spacing::*;
pub use typography::*;

use serde::Serialize;

/// The token source consumed by all components.
///
/// Components take `&Tokens` at build time and never mutate it. The
/// process-wide palette is [`TOKENS`]; tests and hosts may construct another
/// value with struct update syntax over [`Tokens::DEFAULT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Tokens {
    pub spacing: SpacingScale,
    pub typography: TypographyScale,
    pub colors: ColorPalette,
    pub radius: RadiusScale,
    pub opacity: OpacityScale,
    pub transition: TransitionScale,
}

impl Tokens {
    pub const DEFAULT: Self = Self {
        spacing: SpacingScale::DEFAULT,
        typography: TypographyScale::DEFAULT,
        colors: ColorPalette::DEFAULT,
        radius: RadiusScale::DEFAULT,
        opacity: OpacityScale::DEFAULT,
        transition: TransitionScale::DEFAULT,
    };
}

impl Default for Tokens {
    fn default() -> Self {
        Self::DEFAULT
    }
}

pub static TOKENS: Tokens = Tokens::DEFAULT;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::alert::AlertVariant;

    #[test]
    fn palette_has_entry_for_every_alert_variant() {
        for variant in AlertVariant::ALL {
            let colors = TOKENS.colors.variant(variant);
            assert!(!colors.background.is_empty());
            assert!(!colors.border.is_empty());
            assert!(!colors.text.is_empty());
            assert!(!colors.icon.is_empty());
        }
    }

    #[test]
    fn variant_lookup_returns_matching_quadruple() {
        assert_eq!(TOKENS.colors.variant(AlertVariant::Success), &SUCCESS);
        assert_eq!(TOKENS.colors.variant(AlertVariant::Warning), &WARNING);
        assert_eq!(TOKENS.colors.variant(AlertVariant::Error), &ERROR);
        assert_eq!(TOKENS.colors.variant(AlertVariant::Info), &INFO);
    }

    #[test]
    fn quadruples_are_distinct_across_variants() {
        let backgrounds: Vec<_> = AlertVariant::ALL
            .iter()
            .map(|variant| TOKENS.colors.variant(*variant).background)
            .collect();
        for (index, background) in backgrounds.iter().enumerate() {
            assert!(!backgrounds[index + 1..].contains(background));
        }
    }

    #[test]
    fn tokens_serialize_with_named_sections() {
        let json = serde_json::to_value(TOKENS).unwrap();
        assert_eq!(json["colors"]["error"]["background"], "#f8d7da");
        assert_eq!(json["spacing"]["md"], "16px");
        assert_eq!(json["opacity"]["disabled"], "0.6");
    }
}
