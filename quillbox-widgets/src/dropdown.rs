//! A list-style selection control.

use crate::bind::{assemble_root, index_string, membership_flag, selected_flag};
use crate::bridge::{DefaultSelect, MultiSelect, SingleSelect};
use crate::error::WidgetResult;
use crate::handle::WidgetHandle;
use crate::options::{OptionRenderer, SelectOptions};
use indexmap::IndexMap;
use quillbox_core::signal::MaybeSignal;
use quillbox_core::view::Node;
use quillbox_theme::id::WidgetId;
use quillbox_theme::theme::{ClassRole, Theme};
use std::rc::Rc;

/// A single-select dropdown over an ordered option collection.
///
/// One list item is rendered per option, carrying the option's label and
/// 1-based position; the control's bound selection mirrors the internal
/// position cell. With no initial value the first entry is selected.
pub struct Dropdown<T: 'static> {
    options: SelectOptions<T>,
    value: Option<MaybeSignal<T>>,
    label: Option<String>,
    class: Option<String>,
    attrs: IndexMap<String, String>,
    render_option: Option<OptionRenderer<T>>,
}

impl<T: Clone + PartialEq + 'static> Dropdown<T> {
    /// Create a dropdown over `options`.
    pub fn new(options: impl Into<SelectOptions<T>>) -> Self {
        Self {
            options: options.into(),
            value: None,
            label: None,
            class: None,
            attrs: IndexMap::new(),
            render_option: None,
        }
    }

    /// Set the initial or shared selected value.
    pub fn with_value(mut self, value: impl Into<MaybeSignal<T>>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Render a text label next to the control.
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

    /// Override how each option entry is rendered.
    pub fn with_option_renderer(
        mut self,
        render: impl Fn(usize, &crate::options::SelectOption<T>) -> Node + 'static,
    ) -> Self {
        self.render_option = Some(Rc::new(render));
        self
    }

    /// Switch to the multi-select variant.
    ///
    /// A value set via [Dropdown::with_value] does not carry over; use
    /// [MultiDropdown::with_values] afterwards.
    pub fn multiple(self) -> MultiDropdown<T> {
        MultiDropdown {
            options: self.options,
            values: None,
            label: self.label,
            class: self.class,
            attrs: self.attrs,
            render_option: self.render_option,
        }
    }

    /// Build the widget against `theme`.
    pub fn build(self, theme: &dyn Theme) -> WidgetResult<WidgetHandle<T>> {
        let bridge = SingleSelect::new(self.options, self.value, DefaultSelect::First)?;
        let id = WidgetId::new("quillbox-widgets", "Dropdown");

        let mut control = Node::new("select")
            .with_class(theme.class_or(id.clone(), ClassRole::Control, "dropdown-control"))
            .with_bound_attr("value", index_string(bridge.index()));

        for (index, entry) in bridge.options().snapshot().iter().enumerate() {
            let position = index + 1;
            let item = match &self.render_option {
                Some(render) => render(position, entry),
                None => Node::new("option").with_text(entry.label()),
            };
            control = control.with_child(
                item.with_class(theme.class_or(id.clone(), ClassRole::Entry, "dropdown-entry"))
                    .with_attr("value", position.to_string())
                    .with_bound_attr("selected", selected_flag(bridge.index(), position)),
            );
        }

        let select_bridge = bridge.clone();
        control = control.with_on_select(move |positions| {
            if let Some(&position) = positions.first() {
                select_bridge.select(position);
            }
        });

        let root = assemble_root(&id, theme, self.label, self.class, self.attrs, control);
        log::debug!("built dropdown with {} options", bridge.options().len());
        Ok(WidgetHandle::new(root, bridge.value()))
    }
}

/// The multi-select dropdown variant.
///
/// The exposed value is the sequence of selected option values, ordered by
/// position in the option collection regardless of selection order.
pub struct MultiDropdown<T: 'static> {
    options: SelectOptions<T>,
    values: Option<MaybeSignal<Vec<T>>>,
    label: Option<String>,
    class: Option<String>,
    attrs: IndexMap<String, String>,
    render_option: Option<OptionRenderer<T>>,
}

impl<T: Clone + PartialEq + 'static> MultiDropdown<T> {
    /// Set the initial or shared selected values.
    pub fn with_values(mut self, values: impl Into<MaybeSignal<Vec<T>>>) -> Self {
        self.values = Some(values.into());
        self
    }

    /// Render a text label next to the control.
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

    /// Override how each option entry is rendered.
    pub fn with_option_renderer(
        mut self,
        render: impl Fn(usize, &crate::options::SelectOption<T>) -> Node + 'static,
    ) -> Self {
        self.render_option = Some(Rc::new(render));
        self
    }

    /// Build the widget against `theme`.
    pub fn build(self, theme: &dyn Theme) -> WidgetHandle<Vec<T>> {
        let bridge = MultiSelect::new(self.options, self.values);
        let id = WidgetId::new("quillbox-widgets", "Dropdown");

        let mut control = Node::new("select")
            .with_attr("multiple", "multiple")
            .with_class(theme.class_or(id.clone(), ClassRole::Control, "dropdown-control"));

        for (index, entry) in bridge.options().snapshot().iter().enumerate() {
            let position = index + 1;
            let item = match &self.render_option {
                Some(render) => render(position, entry),
                None => Node::new("option").with_text(entry.label()),
            };
            control = control.with_child(
                item.with_class(theme.class_or(id.clone(), ClassRole::Entry, "dropdown-entry"))
                    .with_attr("value", position.to_string())
                    .with_bound_attr("selected", membership_flag(bridge.indices(), position)),
            );
        }

        let select_bridge = bridge.clone();
        control = control.with_on_select(move |positions| select_bridge.select(positions));

        let root = assemble_root(&id, theme, self.label, self.class, self.attrs, control);
        log::debug!(
            "built multi-select dropdown with {} options",
            bridge.options().len()
        );
        WidgetHandle::new(root, bridge.values())
    }
}
