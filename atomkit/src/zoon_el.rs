// MoonZoon Adapter
// Mounts a rendered tree as raw HTML elements; clicks reach `Node::activate`

use crate::markup::html_attributes;
use crate::node::Node;
use std::rc::Rc;
use zoon::*;

/// Turns a rendered tree into a MoonZoon element.
///
/// Attributes and styles match [`crate::markup::to_html`]. Elements with a
/// callback get a click handler that goes through [`Node::activate`], so
/// disabled controls stay inert in the browser too.
///
/// ```no_run
/// use atomkit::zoon::*;
/// use atomkit::zoon_el::into_element;
/// use atomkit::{AlertVariant, alert};
///
/// fn root() -> impl Element {
///     let tree = alert(AlertVariant::Warning, "Check input.")
///         .dismissible(true)
///         .on_dismiss(|| println!("dismissed"))
///         .build();
///     into_element(tree)
/// }
///
/// fn main() {
///     start_app("app", root);
/// }
/// ```
pub fn into_element(mut node: Node) -> RawElOrText {
    let children = std::mem::take(&mut node.children);
    let mut el = RawHtmlEl::new(node.tag.html_name());

    for (name, value) in html_attributes(&node) {
        el = el.attr(name, &value);
    }
    for (prop, value) in node.style.iter() {
        el = el.style(prop.as_css(), value);
    }

    if let Some(text) = &node.text {
        el = el.child(Text::new(text.clone()));
    }
    el = el.children(children.into_iter().map(into_element));

    if node.on_activate.is_some() {
        // The handler keeps the childless node alive for the element's lifetime.
        let target = Rc::new(node);
        el = el.event_handler(move |_: events::Click| {
            target.activate();
        });
    }

    el.unify()
}
