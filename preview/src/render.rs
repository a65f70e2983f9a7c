use crate::stories::Story;
use anyhow::Result;
use atomkit::{Node, markup};
use clap::ValueEnum;
use serde_json::json;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Static HTML markup
    Html,
    /// Accessibility outline: roles, names and text
    Tree,
    /// Full element tree with resolved styles
    Json,
}

pub fn render(node: &Node, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Html => markup::to_html(node),
        OutputFormat::Tree => outline(node),
        OutputFormat::Json => serde_json::to_string_pretty(node)?,
    })
}

/// Renders several stories as one document.
///
/// Json output is a single array of `{ "story", "tree" }` objects; the text
/// formats print a `# name` header before each story.
pub fn render_stories(stories: &[&Story], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        let entries: Vec<_> = stories
            .iter()
            .map(|story| json!({ "story": story.name(), "tree": story.render(None) }))
            .collect();
        return Ok(serde_json::to_string_pretty(&entries)?);
    }
    let mut sections = Vec::with_capacity(stories.len());
    for story in stories {
        let tree = story.render(None);
        sections.push(format!("# {}\n{}", story.name(), render(&tree, format)?));
    }
    Ok(sections.join("\n"))
}

/// Indented accessibility outline, one line per exposed element.
pub fn outline(node: &Node) -> String {
    let mut lines = Vec::new();
    outline_into(node, 0, &mut lines);
    lines.join("\n")
}

fn outline_into(node: &Node, depth: usize, lines: &mut Vec<String>) {
    if node.aria_hidden {
        return;
    }
    let indent = "  ".repeat(depth);
    let mut next_depth = depth;
    if let Some(role) = node.role() {
        let name = node.accessible_name();
        let mut line = format!("{indent}{role}");
        if !name.is_empty() {
            line.push_str(&format!(" {name:?}"));
        }
        if node.disabled {
            line.push_str(" (disabled)");
        }
        lines.push(line);
        next_depth += 1;
        // Named roles already carry their text.
        if node.aria_label.is_some() || node.children.is_empty() {
            return;
        }
    }
    if let Some(text) = &node.text {
        lines.push(format!("{}text {:?}", "  ".repeat(next_depth), text));
    }
    for child in &node.children {
        outline_into(child, next_depth, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomkit::{button, success_alert, warning_alert};

    #[test]
    fn outlines_alert_roles_and_text() {
        let tree = success_alert("Saved.").title("Done").build();
        assert_eq!(
            outline(&tree),
            "alert\n  img \"success alert\"\n  text \"Done\"\n  text \"Saved.\""
        );
    }

    #[test]
    fn outlines_dismiss_control_by_label() {
        let tree = warning_alert("Check input.").dismissible(true).build();
        assert!(outline(&tree).ends_with("  button \"Dismiss alert\""));
    }

    #[test]
    fn outlines_disabled_button() {
        let tree = button("Save").disabled(true).build();
        assert_eq!(outline(&tree), "button \"Save\" (disabled)\n  text \"Save\"");
    }

    #[test]
    fn json_output_contains_styles() {
        let out = render(&button("Go").build(), OutputFormat::Json).unwrap();
        assert!(out.contains("\"background-color\": \"#17a2b8\""));
    }
}
