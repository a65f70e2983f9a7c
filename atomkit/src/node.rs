// Element Tree
// Renderer-agnostic output of a single render pass

use crate::style::{StyleAttributes, StyleProp};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::rc::Rc;

/// Caller-owned interaction hook. Carries no payload.
pub type Callback = Rc<dyn Fn()>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Container,
    Button,
    Icon,
    Text,
}

impl Tag {
    pub fn html_name(self) -> &'static str {
        match self {
            Tag::Container => "div",
            Tag::Button => "button",
            Tag::Icon | Tag::Text => "span",
        }
    }
}

/// Accessible roles exposed by kit elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Alert,
    Button,
    Img,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Alert => "alert",
            Role::Button => "button",
            Role::Img => "img",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Serialize)]
pub struct Node {
    pub tag: Tag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub aria_hidden: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    pub style: StyleAttributes,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<&'static str, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(skip)]
    pub on_activate: Option<Callback>,
}

impl Node {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            explicit_role: None,
            aria_label: None,
            aria_hidden: false,
            disabled: false,
            style: StyleAttributes::new(),
            attributes: IndexMap::new(),
            text: None,
            children: Vec::new(),
            on_activate: None,
        }
    }

    /// Unstyled text run, used for plain button content.
    pub fn text(content: impl Into<String>) -> Self {
        let mut node = Self::new(Tag::Text);
        node.text = Some(content.into());
        node
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Explicit role first, then the implicit role of the tag.
    pub fn role(&self) -> Option<Role> {
        if self.aria_hidden {
            return None;
        }
        self.explicit_role.or(match self.tag {
            Tag::Button => Some(Role::Button),
            _ => None,
        })
    }

    /// `aria-label` wins; buttons otherwise take their name from content.
    /// Other roles have no name without a label.
    pub fn accessible_name(&self) -> String {
        if let Some(label) = &self.aria_label {
            return label.clone();
        }
        match self.role() {
            Some(Role::Button) => {
                let mut out = String::new();
                self.name_from_content(&mut out);
                out.trim().to_string()
            }
            _ => String::new(),
        }
    }

    /// Concatenated text of the whole subtree, hidden parts included.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn name_from_content(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            if child.aria_hidden {
                continue;
            }
            match &child.aria_label {
                Some(label) => out.push_str(label),
                None => child.name_from_content(out),
            }
        }
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Pre-order walk over this node and everything below it.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }
        out
    }

    pub fn query_all_by_role(&self, role: Role) -> Vec<&Node> {
        self.descendants()
            .into_iter()
            .filter(|node| node.role() == Some(role))
            .collect()
    }

    pub fn query_by_role(&self, role: Role, name: &str) -> Option<&Node> {
        self.query_all_by_role(role)
            .into_iter()
            .find(|node| node.accessible_name() == name)
    }

    /// Like [`Node::query_by_role`] but panics when nothing matches.
    /// Intended for tests and story assertions.
    pub fn get_by_role(&self, role: Role, name: &str) -> &Node {
        match self.query_by_role(role, name) {
            Some(node) => node,
            None => panic!("no element with role `{role}` and name {name:?}"),
        }
    }

    /// Nodes whose own text equals `text` exactly.
    pub fn query_all_by_text(&self, text: &str) -> Vec<&Node> {
        self.descendants()
            .into_iter()
            .filter(|node| node.text.as_deref() == Some(text))
            .collect()
    }

    pub fn style_value(&self, prop: StyleProp) -> Option<&str> {
        self.style.get(prop)
    }

    /// Delivers one discrete user activation to this element.
    ///
    /// Returns `true` when a callback ran. Disabled elements and elements
    /// without a callback are inert.
    pub fn activate(&self) -> bool {
        if self.disabled {
            log::debug!("activation ignored on disabled {:?}", self.tag);
            return false;
        }
        match &self.on_activate {
            Some(handler) => {
                log::trace!("activation delivered to {:?} {:?}", self.tag, self.accessible_name());
                handler();
                true
            }
            None => {
                log::trace!("activation on {:?} without callback", self.tag);
                false
            }
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("tag", &self.tag)
            .field("role", &self.role())
            .field("aria_label", &self.aria_label)
            .field("disabled", &self.disabled)
            .field("style", &self.style)
            .field("text", &self.text)
            .field("children", &self.children)
            .field("on_activate", &self.on_activate.is_some())
            .finish()
    }
}

impl From<&str> for Node {
    fn from(content: &str) -> Self {
        Node::text(content)
    }
}

impl From<String> for Node {
    fn from(content: String) -> Self {
        Node::text(content)
    }
}
