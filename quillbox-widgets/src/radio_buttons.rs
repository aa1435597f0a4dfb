//! An exclusive entry list: one radio-style control per option.

use crate::bind::{assemble_root, selected_flag};
use crate::bridge::{DefaultSelect, SingleSelect};
use crate::error::WidgetResult;
use crate::handle::WidgetHandle;
use crate::options::{OptionRenderer, SelectOption, SelectOptions};
use indexmap::IndexMap;
use quillbox_core::signal::MaybeSignal;
use quillbox_core::view::Node;
use quillbox_theme::id::WidgetId;
use quillbox_theme::theme::{ClassRole, Theme};
use std::rc::Rc;

/// A radio-button group over an ordered option collection.
///
/// All entries share one exclusivity group: exactly one is active at any
/// time, and activating an entry moves the shared position cell to it. With
/// no initial value the first entry is selected.
pub struct RadioButtons<T: 'static> {
    options: SelectOptions<T>,
    value: Option<MaybeSignal<T>>,
    group: String,
    label: Option<String>,
    class: Option<String>,
    attrs: IndexMap<String, String>,
    render_option: Option<OptionRenderer<T>>,
}

impl<T: Clone + PartialEq + 'static> RadioButtons<T> {
    /// Create a radio-button group over `options`.
    pub fn new(options: impl Into<SelectOptions<T>>) -> Self {
        Self {
            options: options.into(),
            value: None,
            group: String::from("qb-radio-group"),
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

    /// Set the exclusivity group name. Give every group rendered into the
    /// same document its own name.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Render a text label next to the group.
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
    pub fn build(self, theme: &dyn Theme) -> WidgetResult<WidgetHandle<T>> {
        let bridge = SingleSelect::new(self.options, self.value, DefaultSelect::First)?;
        let id = WidgetId::new("quillbox-widgets", "RadioButtons");

        let mut container = Node::new("div").with_class(theme.class_or(
            id.clone(),
            ClassRole::Container,
            "radiobuttons-container",
        ));

        for (index, entry) in bridge.options().snapshot().iter().enumerate() {
            let position = index + 1;

            let click_bridge = bridge.clone();
            let control = Node::new("input")
                .with_attr("type", "radio")
                .with_attr("name", self.group.clone())
                .with_attr("value", position.to_string())
                .with_class(theme.class_or(id.clone(), ClassRole::Control, "radiobuttons-control"))
                .with_bound_attr("checked", selected_flag(bridge.index(), position))
                .with_on_click(move || click_bridge.select(position));

            let content = match &self.render_option {
                Some(render) => render(position, entry),
                None => Node::new("span").with_text(entry.label()),
            };

            container = container.with_child(
                Node::new("div")
                    .with_class(theme.class_or(id.clone(), ClassRole::Entry, "radiobuttons-entry"))
                    .with_child(control)
                    .with_child(content),
            );
        }

        let root = assemble_root(&id, theme, self.label, self.class, self.attrs, container);
        log::debug!(
            "built radio buttons with {} options",
            bridge.options().len()
        );
        Ok(WidgetHandle::new(root, bridge.value()))
    }
}
