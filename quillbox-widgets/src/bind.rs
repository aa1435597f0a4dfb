// Helpers shared by the widget builders: bound-attribute signals derived from
// bridge cells, and the common root-element assembly (theme class, caller
// class, pass-through attributes, optional label).

use indexmap::IndexMap;
use quillbox_core::signal::derived::DerivedSignal;
use quillbox_core::signal::state::StateSignal;
use quillbox_core::signal::{BoxedSignal, Signal};
use quillbox_core::view::Node;
use quillbox_theme::id::WidgetId;
use quillbox_theme::theme::{ClassRole, Theme};

pub(crate) fn index_string(index: &StateSignal<usize>) -> BoxedSignal<String> {
    Box::new(DerivedSignal::new(index.dyn_clone(), |position| {
        position.to_string()
    }))
}

pub(crate) fn selected_flag(index: &StateSignal<usize>, position: usize) -> BoxedSignal<String> {
    Box::new(DerivedSignal::new(index.dyn_clone(), move |current| {
        (*current == position).to_string()
    }))
}

pub(crate) fn membership_flag(
    indices: &StateSignal<Vec<usize>>,
    position: usize,
) -> BoxedSignal<String> {
    Box::new(DerivedSignal::new(indices.dyn_clone(), move |current| {
        current.contains(&position).to_string()
    }))
}

pub(crate) fn active_class(
    index: &StateSignal<usize>,
    position: usize,
    base: String,
    active: String,
) -> BoxedSignal<String> {
    Box::new(DerivedSignal::new(index.dyn_clone(), move |current| {
        if *current == position {
            format!("{base} {active}")
        } else {
            base.clone()
        }
    }))
}

pub(crate) fn panel_style(index: &StateSignal<usize>, position: usize) -> BoxedSignal<String> {
    Box::new(DerivedSignal::new(index.dyn_clone(), move |current| {
        if *current == position {
            String::new()
        } else {
            "display:none".to_string()
        }
    }))
}

pub(crate) fn assemble_root(
    id: &WidgetId,
    theme: &dyn Theme,
    label: Option<String>,
    class: Option<String>,
    attrs: IndexMap<String, String>,
    content: Node,
) -> Node {
    let fallback = id.id().to_ascii_lowercase();
    let mut root =
        Node::new("div").with_class(theme.class_or(id.clone(), ClassRole::Root, &fallback));
    if let Some(class) = class {
        root = root.with_class(class);
    }
    for (name, value) in attrs {
        root = root.with_attr(name, value);
    }
    if let Some(label) = label {
        let label_fallback = format!("{fallback}-label");
        root = root.with_child(
            Node::new("span")
                .with_class(theme.class_or(id.clone(), ClassRole::Label, &label_fallback))
                .with_text(label),
        );
    }
    root.with_child(content)
}
