//! A single-select button row; tabs are the list-container variant.

use crate::bind::{active_class, assemble_root};
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

/// Container convention for the button row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// Buttons in a plain row container.
    Row,
    /// List items inside a list container (tab strip).
    List,
}

/// A toggle-button row over an ordered option collection.
///
/// One interactive element is rendered per option; activating an element
/// moves the shared position cell to it, and exactly one element carries the
/// active marker at any time. Single-select only. With no initial value the
/// median entry is selected (lower position on ties).
pub struct ToggleButtons<T: 'static> {
    options: SelectOptions<T>,
    value: Option<MaybeSignal<T>>,
    container: ContainerKind,
    label: Option<String>,
    class: Option<String>,
    attrs: IndexMap<String, String>,
    render_option: Option<OptionRenderer<T>>,
}

impl<T: Clone + PartialEq + 'static> ToggleButtons<T> {
    /// Create a toggle-button row over `options`.
    pub fn new(options: impl Into<SelectOptions<T>>) -> Self {
        Self {
            options: options.into(),
            value: None,
            container: ContainerKind::Row,
            label: None,
            class: None,
            attrs: IndexMap::new(),
            render_option: None,
        }
    }

    /// Set the container convention.
    pub fn with_container(mut self, container: ContainerKind) -> Self {
        self.container = container;
        self
    }

    /// Set the initial or shared selected value.
    pub fn with_value(mut self, value: impl Into<MaybeSignal<T>>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Render a text label next to the row.
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

    /// Override how each button's content is rendered.
    pub fn with_option_renderer(
        mut self,
        render: impl Fn(usize, &SelectOption<T>) -> Node + 'static,
    ) -> Self {
        self.render_option = Some(Rc::new(render));
        self
    }

    /// Build the widget against `theme`.
    pub fn build(self, theme: &dyn Theme) -> WidgetResult<WidgetHandle<T>> {
        let (view, bridge) = self.build_parts(theme)?;
        Ok(WidgetHandle::new(view, bridge.value()))
    }

    /// Build the view and hand back the selection bridge alongside it.
    ///
    /// Composite widgets (the tabulator) use the bridge to share the position
    /// cell with their own content.
    pub(crate) fn build_parts(self, theme: &dyn Theme) -> WidgetResult<(Node, SingleSelect<T>)> {
        let bridge = SingleSelect::new(self.options, self.value, DefaultSelect::Median)?;
        let (id, container_tag, entry_tag) = match self.container {
            ContainerKind::Row => (WidgetId::new("quillbox-widgets", "ToggleButtons"), "div", "button"),
            ContainerKind::List => (WidgetId::new("quillbox-widgets", "Tabs"), "ul", "li"),
        };
        let name = id.id().to_ascii_lowercase();

        let mut container = Node::new(container_tag).with_class(theme.class_or(
            id.clone(),
            ClassRole::Container,
            &format!("{name}-container"),
        ));

        let entry_class = theme.class_or(id.clone(), ClassRole::Entry, &format!("{name}-entry"));
        let active = theme.class_or(id.clone(), ClassRole::Active, &format!("{name}-active"));

        for (index, entry) in bridge.options().snapshot().iter().enumerate() {
            let position = index + 1;

            let click_bridge = bridge.clone();
            let mut element = Node::new(entry_tag)
                .with_bound_attr(
                    "class",
                    active_class(bridge.index(), position, entry_class.clone(), active.clone()),
                )
                .with_on_click(move || click_bridge.select(position));

            element = match &self.render_option {
                Some(render) => element.with_child(render(position, entry)),
                None => element.with_text(entry.label()),
            };

            container = container.with_child(element);
        }

        let view = assemble_root(&id, theme, self.label, self.class, self.attrs, container);
        log::debug!("built {} with {} options", name, bridge.options().len());
        Ok((view, bridge))
    }
}

/// A tab strip: toggle buttons rendered as list items inside a list
/// container. Behaviorally identical to [ToggleButtons].
pub fn tabs<T: Clone + PartialEq + 'static>(
    options: impl Into<SelectOptions<T>>,
) -> ToggleButtons<T> {
    ToggleButtons::new(options).with_container(ContainerKind::List)
}
