//! A zero-or-more entry list with independent checkbox or toggle controls.

use crate::bind::{assemble_root, membership_flag};
use crate::bridge::MultiSelect;
use crate::handle::WidgetHandle;
use crate::options::{OptionRenderer, SelectOption, SelectOptions};
use indexmap::IndexMap;
use quillbox_core::signal::MaybeSignal;
use quillbox_core::view::Node;
use quillbox_theme::id::WidgetId;
use quillbox_theme::theme::{ClassRole, Theme};
use std::rc::Rc;

/// Visual control kind for multiselect entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Checkbox-style controls.
    Checkbox,
    /// Switch-style toggle controls.
    Toggle,
}

impl ControlKind {
    fn widget_name(&self) -> &'static str {
        match self {
            ControlKind::Checkbox => "Checkboxes",
            ControlKind::Toggle => "Toggles",
        }
    }
}

/// A generic multiselect over an ordered option collection.
///
/// Each entry carries an independent on/off control bound to membership of
/// its position in the shared selection. Toggling an entry adds or removes
/// its position while the remaining positions keep their relative order; the
/// exposed value is the sequence of selected option values in collection
/// order, regardless of the order entries were activated in.
pub struct Multiselect<T: 'static> {
    options: SelectOptions<T>,
    values: Option<MaybeSignal<Vec<T>>>,
    control: ControlKind,
    label: Option<String>,
    class: Option<String>,
    attrs: IndexMap<String, String>,
    render_option: Option<OptionRenderer<T>>,
}

impl<T: Clone + PartialEq + 'static> Multiselect<T> {
    /// Create a multiselect over `options` with checkbox-style controls.
    pub fn new(options: impl Into<SelectOptions<T>>) -> Self {
        Self {
            options: options.into(),
            values: None,
            control: ControlKind::Checkbox,
            label: None,
            class: None,
            attrs: IndexMap::new(),
            render_option: None,
        }
    }

    /// Set the control kind.
    pub fn with_control(mut self, control: ControlKind) -> Self {
        self.control = control;
        self
    }

    /// Set the initial or shared selected values.
    pub fn with_values(mut self, values: impl Into<MaybeSignal<Vec<T>>>) -> Self {
        self.values = Some(values.into());
        self
    }

    /// Render a text label next to the entry list.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Append a class to the rendered root element.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Forward an attribute onto the rendered root element.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Override how each entry's content is rendered.
    pub fn with_option_renderer(
        mut self,
        render: impl Fn(usize, &SelectOption<T>) -> Node + 'static,
    ) -> Self {
        self.render_option = Some(Rc::new(render));
        self
    }

    /// Build the widget against `theme`.
    pub fn build(self, theme: &dyn Theme) -> WidgetHandle<Vec<T>> {
        let bridge = MultiSelect::new(self.options, self.values);
        let id = WidgetId::new("quillbox-widgets", self.control.widget_name());
        let name = id.id().to_ascii_lowercase();

        let mut container = Node::new("div").with_class(theme.class_or(
            id.clone(),
            ClassRole::Container,
            &format!("{name}-container"),
        ));

        for (index, entry) in bridge.options().snapshot().iter().enumerate() {
            let position = index + 1;

            let toggle_bridge = bridge.clone();
            let control = Node::new("input")
                .with_attr("type", "checkbox")
                .with_attr("value", position.to_string())
                .with_class(theme.class_or(
                    id.clone(),
                    ClassRole::Control,
                    &format!("{name}-control"),
                ))
                .with_bound_attr("checked", membership_flag(bridge.indices(), position))
                .with_on_toggle(move |on| {
                    if on != toggle_bridge.is_selected(position) {
                        toggle_bridge.toggle(position);
                    }
                });

            let content = match &self.render_option {
                Some(render) => render(position, entry),
                None => Node::new("span").with_text(entry.label()),
            };

            container = container.with_child(
                Node::new("div")
                    .with_class(theme.class_or(
                        id.clone(),
                        ClassRole::Entry,
                        &format!("{name}-entry"),
                    ))
                    .with_child(control)
                    .with_child(content),
            );
        }

        let root = assemble_root(&id, theme, self.label, self.class, self.attrs, container);
        log::debug!(
            "built {} with {} options",
            name,
            bridge.options().len()
        );
        WidgetHandle::new(root, bridge.values())
    }
}
