// Static Markup
// Serializes a rendered tree to HTML for previews and server-side output

use crate::node::Node;

pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// HTML attributes of a single element, in output order, without `style`.
///
/// `disabled` is a boolean attribute and carries an empty value.
pub fn html_attributes(node: &Node) -> Vec<(&'static str, String)> {
    let mut attrs = Vec::new();
    if let Some(role) = node.explicit_role {
        attrs.push(("role", role.as_str().to_string()));
    }
    if let Some(label) = &node.aria_label {
        attrs.push(("aria-label", label.clone()));
    }
    if node.aria_hidden {
        attrs.push(("aria-hidden", "true".to_string()));
    }
    for (name, value) in &node.attributes {
        attrs.push((*name, value.clone()));
    }
    if node.disabled {
        attrs.push(("disabled", String::new()));
    }
    attrs
}

fn write_node(node: &Node, out: &mut String) {
    let tag = node.tag.html_name();
    out.push('<');
    out.push_str(tag);

    for (name, value) in html_attributes(node) {
        if value.is_empty() {
            out.push(' ');
            out.push_str(name);
        } else {
            push_attr(out, name, &value);
        }
    }
    if !node.style.is_empty() {
        push_attr(out, "style", &node.style.to_css());
    }
    out.push('>');

    if let Some(text) = &node.text {
        escape_into(text, out);
    }
    for child in &node.children {
        write_node(child, out);
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(value, out);
    out.push('"');
}

fn escape_into(raw: &str, out: &mut String) {
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ButtonKind, button, info_alert, success_alert};
    use crate::components::alert::DISMISS_LABEL;

    #[test]
    fn renders_button_attributes() {
        let html = to_html(&button("Send").kind(ButtonKind::Submit).disabled(true).build());

        assert!(html.starts_with("<button type=\"submit\" disabled style=\""));
        assert!(html.contains("opacity: 0.6"));
        assert!(html.ends_with("<span>Send</span></button>"));
    }

    #[test]
    fn renders_alert_role_and_labels() {
        let html = to_html(&success_alert("Saved.").build());

        assert!(html.starts_with("<div role=\"alert\""));
        assert!(html.contains("role=\"img\" aria-label=\"success alert\""));
        assert!(html.contains(">Saved.</span>"));
    }

    #[test]
    fn escapes_text_and_attribute_values() {
        let html = to_html(&button("<b>").aria_label("say \"hi\"").build());

        assert!(html.contains("aria-label=\"say &quot;hi&quot;\""));
        assert!(html.contains("<span>&lt;b&gt;</span>"));
    }

    #[test]
    fn attributes_follow_output_order() {
        let tree = info_alert("x").dismissible(true).build();
        let dismiss = &tree.children[2];
        let names: Vec<_> = html_attributes(dismiss).into_iter().map(|(name, _)| name).collect();

        assert_eq!(html_attributes(&tree), [("role", "alert".to_string())]);
        assert_eq!(names, ["aria-label", "type"]);
        assert_eq!(html_attributes(dismiss)[0].1, DISMISS_LABEL);
    }

    #[test]
    fn hidden_icon_and_disabled_button_attributes() {
        let tree = button("Go").disabled(true).build();
        assert_eq!(
            html_attributes(&tree),
            [("type", "button".to_string()), ("disabled", String::new())]
        );

        let alert = info_alert("x").dismissible(true).build();
        let close = &alert.children[2].children[0];
        let attrs = html_attributes(close);
        assert_eq!(attrs[0], ("aria-hidden", "true".to_string()));
        assert!(attrs.contains(&("data-icon", "close".to_string())));
    }
}
