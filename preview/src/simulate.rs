use crate::stories::Story;
use anyhow::{Result, bail};
use atomkit::{Node, Role};
use std::cell::Cell;
use std::rc::Rc;

pub struct ActivateOptions {
    pub name: Option<String>,
    pub times: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ActivationReport {
    pub target: String,
    pub delivered: u32,
    pub invocations: u32,
}

/// Renders `story` with a counting hook and activates its control.
pub fn run_activations(story: &Story, options: &ActivateOptions) -> Result<ActivationReport> {
    let invocations = Rc::new(Cell::new(0u32));
    let counter = invocations.clone();
    let story_name = story.name().to_string();
    let tree = story.render(Some(Rc::new(move || {
        counter.set(counter.get() + 1);
        log::info!("{story_name}: callback invoked ({})", counter.get());
    })));

    let target = find_target(&tree, options.name.as_deref())?;
    let target_name = target.accessible_name();

    let mut delivered = 0;
    for _ in 0..options.times {
        if target.activate() {
            delivered += 1;
        }
    }
    log::debug!(
        "{}: {} activation(s) on {:?}, {} delivered",
        story.name(),
        options.times,
        target_name,
        delivered
    );

    Ok(ActivationReport {
        target: target_name,
        delivered,
        invocations: invocations.get(),
    })
}

fn find_target<'a>(tree: &'a Node, name: Option<&str>) -> Result<&'a Node> {
    let target = match name {
        Some(name) => tree.query_by_role(Role::Button, name),
        None => tree.query_all_by_role(Role::Button).into_iter().next(),
    };
    match target {
        Some(node) => Ok(node),
        None => match name {
            Some(name) => bail!("no button named {name:?} in rendered story"),
            None => bail!("rendered story has no button to activate"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stories::StoryBook;

    const BOOK: &str = r#"
[[stories]]
name = "dismissible-warning"
component = "alert"
variant = "warning"
message = "Check input."
dismissible = true

[[stories]]
name = "plain-info"
component = "alert"
variant = "info"
message = "FYI"

[[stories]]
name = "disabled-save"
component = "button"
content = "Save"
disabled = true
"#;

    fn book() -> StoryBook {
        StoryBook::from_toml_str(BOOK).unwrap()
    }

    #[test]
    fn dismiss_control_fires_once_per_activation() {
        let book = book();
        let story = book.find("dismissible-warning").unwrap();
        let report = run_activations(
            story,
            &ActivateOptions { name: Some("Dismiss alert".to_string()), times: 1 },
        )
        .unwrap();

        assert_eq!(
            report,
            ActivationReport { target: "Dismiss alert".to_string(), delivered: 1, invocations: 1 }
        );
    }

    #[test]
    fn disabled_button_never_fires() {
        let book = book();
        let story = book.find("disabled-save").unwrap();
        let report = run_activations(story, &ActivateOptions { name: None, times: 3 }).unwrap();

        assert_eq!(report.delivered, 0);
        assert_eq!(report.invocations, 0);
    }

    #[test]
    fn non_dismissible_alert_has_no_target() {
        let book = book();
        let story = book.find("plain-info").unwrap();
        let err = run_activations(story, &ActivateOptions { name: None, times: 1 }).unwrap_err();

        assert!(err.to_string().contains("no button"));
    }
}
