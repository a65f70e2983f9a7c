use anyhow::{Context, Result, bail};
use atomkit::{
    AlertVariant, ButtonKind, ButtonSize, ButtonVariant, Callback, Node, alert, button,
};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct StoryBook {
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub stories: Vec<Story>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct AppSection {
    #[serde(default)]
    pub version: String,
}

impl AppSection {
    /// Current story file format version
    pub const CURRENT_VERSION: &'static str = "1.0.0";

    pub fn is_supported_version(&self) -> bool {
        matches!(self.version.as_str(), "1.0.0")
    }
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION.to_string(),
        }
    }
}

/// One named component configuration, tagged by `component = "..."`.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "component", rename_all = "lowercase")]
pub enum Story {
    Button(ButtonStory),
    Alert(AlertStory),
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct ButtonStory {
    pub name: String,
    pub content: String,
    #[serde(default)]
    pub variant: ButtonVariant,
    #[serde(default)]
    pub size: ButtonSize,
    #[serde(default)]
    pub kind: ButtonKind,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub aria_label: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct AlertStory {
    pub name: String,
    pub variant: AlertVariant,
    pub message: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub dismissible: bool,
}

impl Story {
    pub fn name(&self) -> &str {
        match self {
            Story::Button(story) => &story.name,
            Story::Alert(story) => &story.name,
        }
    }

    /// Renders the story, wiring `hook` as the story's only interaction
    /// callback (`on_activate` for buttons, `on_dismiss` for alerts).
    pub fn render(&self, hook: Option<Callback>) -> Node {
        match self {
            Story::Button(story) => {
                let mut builder = button(story.content.as_str())
                    .variant(story.variant)
                    .size(story.size)
                    .kind(story.kind)
                    .disabled(story.disabled)
                    .on_activate_shared(hook);
                if let Some(label) = &story.aria_label {
                    builder = builder.aria_label(label.as_str());
                }
                builder.build()
            }
            Story::Alert(story) => {
                let mut builder = alert(story.variant, story.message.as_str())
                    .dismissible(story.dismissible)
                    .on_dismiss_shared(hook);
                if let Some(title) = &story.title {
                    builder = builder.title(title.as_str());
                }
                builder.build()
            }
        }
    }
}

impl StoryBook {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let book: StoryBook = toml::from_str(content).context("Failed to parse story file")?;
        Ok(book)
    }

    /// Non-fatal problems: unsupported version, duplicate story names.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if !self.app.is_supported_version() {
            warnings.push(format!(
                "story file version {:?} is not supported, expected {}",
                self.app.version,
                AppSection::CURRENT_VERSION
            ));
        }
        for (index, story) in self.stories.iter().enumerate() {
            if self.stories[..index].iter().any(|other| other.name() == story.name()) {
                warnings.push(format!("duplicate story name {:?}", story.name()));
            }
        }
        warnings
    }

    pub fn find(&self, name: &str) -> Result<&Story> {
        match self.stories.iter().find(|story| story.name() == name) {
            Some(story) => Ok(story),
            None => bail!(
                "no story named {:?}; available: {}",
                name,
                self.stories.iter().map(Story::name).collect::<Vec<_>>().join(", ")
            ),
        }
    }
}

pub fn load_stories(path: &Path) -> Result<StoryBook> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read story file: {}", path.display()))?;

    let book = StoryBook::from_toml_str(&content)
        .with_context(|| format!("Invalid story file: {}", path.display()))?;

    for warning in book.validate() {
        log::warn!("{}: {}", path.display(), warning);
    }

    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomkit::Role;

    const BOOK: &str = r#"
[app]
version = "1.0.0"

[[stories]]
name = "saved"
component = "alert"
variant = "success"
message = "Saved."

[[stories]]
name = "ghost"
component = "button"
content = "Cancel"
variant = "ghost"
size = "sm"
"#;

    #[test]
    fn parses_tagged_stories_with_defaults() {
        let book = StoryBook::from_toml_str(BOOK).unwrap();

        assert_eq!(book.app, AppSection::default());
        assert_eq!(book.stories.len(), 2);
        match &book.stories[1] {
            Story::Button(story) => {
                assert_eq!(story.variant, ButtonVariant::Ghost);
                assert_eq!(story.size, ButtonSize::Small);
                assert_eq!(story.kind, ButtonKind::Action);
                assert!(!story.disabled);
            }
            other => panic!("expected button story, got {other:?}"),
        }
        assert!(book.validate().is_empty());
    }

    #[test]
    fn renders_alert_story() {
        let book = StoryBook::from_toml_str(BOOK).unwrap();
        let tree = book.find("saved").unwrap().render(None);

        assert!(tree.query_by_role(Role::Img, "success alert").is_some());
        assert!(tree.query_all_by_role(Role::Button).is_empty());
    }

    #[test]
    fn unknown_variant_is_a_parse_error() {
        let err = StoryBook::from_toml_str(
            "[[stories]]\nname = \"x\"\ncomponent = \"alert\"\nvariant = \"fatal\"\nmessage = \"m\"\n",
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse story file"));
    }

    #[test]
    fn alert_without_variant_is_rejected() {
        assert!(
            StoryBook::from_toml_str("[[stories]]\nname = \"x\"\ncomponent = \"alert\"\nmessage = \"m\"\n")
                .is_err()
        );
    }

    #[test]
    fn validate_reports_version_and_duplicates() {
        let book = StoryBook::from_toml_str(
            "[app]\nversion = \"0.1.0\"\n\n[[stories]]\nname = \"a\"\ncomponent = \"button\"\ncontent = \"A\"\n\n[[stories]]\nname = \"a\"\ncomponent = \"button\"\ncontent = \"B\"\n",
        )
        .unwrap();

        let warnings = book.validate();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("0.1.0"));
        assert!(warnings[1].contains("duplicate"));
    }

    #[test]
    fn find_lists_available_names_on_miss() {
        let book = StoryBook::from_toml_str(BOOK).unwrap();
        let err = book.find("missing").unwrap_err();
        assert!(err.to_string().contains("saved, ghost"));
    }
}
