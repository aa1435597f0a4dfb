//! Declarative view nodes handed to a host templating engine.
//!
//! Widgets construct a [Node] tree describing tags, attributes and event
//! hooks. The host engine mounts the tree (see [RenderBackend]), renders it,
//! keeps signal-bound attributes live, and delivers user interaction back
//! through the node's event hooks.

use crate::signal::{BoxedSignal, Signal};
use indexmap::IndexMap;
use std::rc::Rc;

/// Handler invoked when the rendered element is activated.
pub type ClickHandler = Rc<dyn Fn()>;

/// Handler invoked when the rendered element's checked state flips.
pub type ToggleHandler = Rc<dyn Fn(bool)>;

/// Handler invoked with the full set of selected entry positions (1-based).
pub type SelectHandler = Rc<dyn Fn(&[usize])>;

/// An attribute value, either fixed at construction or bound to a signal.
pub enum AttrValue {
    /// A fixed string.
    Static(String),
    /// A value read from a signal whenever the attribute is resolved.
    Bound(BoxedSignal<String>),
}

impl AttrValue {
    /// Resolve the current attribute string.
    pub fn resolve(&self) -> String {
        match self {
            AttrValue::Static(value) => value.clone(),
            AttrValue::Bound(signal) => signal.get().into_owned(),
        }
    }
}

/// A single element in the declarative view tree.
///
/// Nodes are plain data plus event hooks; rendering them is the host engine's
/// job. Attribute insertion order is preserved.
pub struct Node {
    tag: String,
    attrs: IndexMap<String, AttrValue>,
    text: Option<String>,
    children: Vec<Node>,
    on_click: Option<ClickHandler>,
    on_toggle: Option<ToggleHandler>,
    on_select: Option<SelectHandler>,
}

impl Node {
    /// Create an element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: IndexMap::new(),
            text: None,
            children: Vec::new(),
            on_click: None,
            on_toggle: None,
            on_select: None,
        }
    }

    /// Set a fixed attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), AttrValue::Static(value.into()));
        self
    }

    /// Bind an attribute to a signal; the engine re-reads it on every change
    /// of the underlying cell.
    pub fn with_bound_attr(mut self, name: impl Into<String>, signal: BoxedSignal<String>) -> Self {
        self.attrs.insert(name.into(), AttrValue::Bound(signal));
        self
    }

    /// Append a class to the static `class` attribute.
    ///
    /// A class bound via [Node::with_bound_attr] is left untouched.
    pub fn with_class(mut self, class: impl AsRef<str>) -> Self {
        let class = class.as_ref();
        if class.is_empty() {
            return self;
        }
        let entry = self
            .attrs
            .entry("class".to_string())
            .or_insert_with(|| AttrValue::Static(String::new()));
        if let AttrValue::Static(existing) = entry {
            if !existing.is_empty() {
                existing.push(' ');
            }
            existing.push_str(class);
        }
        self
    }

    /// Set the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child element.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append a sequence of child elements.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Set the activation hook.
    pub fn with_on_click(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    /// Set the checked-state hook.
    pub fn with_on_toggle(mut self, handler: impl Fn(bool) + 'static) -> Self {
        self.on_toggle = Some(Rc::new(handler));
        self
    }

    /// Set the selection hook.
    pub fn with_on_select(mut self, handler: impl Fn(&[usize]) + 'static) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }

    /// The element tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Resolve the current value of an attribute.
    pub fn attr(&self, name: &str) -> Option<String> {
        self.attrs.get(name).map(AttrValue::resolve)
    }

    /// The resolved classes, split on whitespace.
    pub fn classes(&self) -> Vec<String> {
        self.attr("class")
            .map(|class| class.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Whether the resolved `class` attribute contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|candidate| candidate == class)
    }

    /// The text content.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The child elements.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Deliver an activation to this element, as the engine does for a DOM
    /// click. No-op when no hook is set.
    pub fn click(&self) {
        if let Some(handler) = &self.on_click {
            handler();
        }
    }

    /// Deliver a checked-state change to this element.
    pub fn toggle(&self, on: bool) {
        if let Some(handler) = &self.on_toggle {
            handler(on);
        }
    }

    /// Deliver a selection of entry positions (1-based) to this element.
    pub fn select(&self, positions: &[usize]) {
        if let Some(handler) = &self.on_select {
            handler(positions);
        }
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("tag", &self.tag)
            .field("attrs", &self.attrs.keys().collect::<Vec<_>>())
            .field("text", &self.text)
            .field("children", &self.children.len())
            .finish()
    }
}

/// The mounting contract a host templating engine implements.
///
/// The engine receives the declarative tree, renders it into the host
/// document, keeps bound attributes wired to their signals, and calls the
/// tree's event hooks on user interaction.
pub trait RenderBackend {
    /// Error raised when a tree cannot be mounted.
    type Error;

    /// Mount a view tree.
    fn mount(&mut self, root: &Node) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::state::StateSignal;
    use std::cell::Cell;

    #[test]
    fn test_static_and_bound_attrs() {
        let cell = StateSignal::new(String::from("2"));
        let node = Node::new("select")
            .with_attr("name", "flavor")
            .with_bound_attr("value", cell.dyn_clone());

        assert_eq!(node.attr("name").as_deref(), Some("flavor"));
        assert_eq!(node.attr("value").as_deref(), Some("2"));

        cell.set(String::from("3"));
        assert_eq!(node.attr("value").as_deref(), Some("3"));
    }

    #[test]
    fn test_with_class_appends() {
        let node = Node::new("div").with_class("first").with_class("second");
        assert!(node.has_class("first"));
        assert!(node.has_class("second"));
        assert_eq!(node.classes().len(), 2);
    }

    #[test]
    fn test_click_dispatch() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let node = Node::new("button").with_on_click(move || counter.set(counter.get() + 1));

        node.click();
        node.click();
        assert_eq!(hits.get(), 2);
    }
}
