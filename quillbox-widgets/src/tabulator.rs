//! A tab selector composed with a content mask.

use crate::bind::panel_style;
use crate::bridge::SingleSelect;
use crate::error::{WidgetError, WidgetResult};
use crate::options::SelectOptions;
use crate::toggle_buttons::tabs;
use indexmap::IndexMap;
use quillbox_core::signal::state::StateSignal;
use quillbox_core::signal::MaybeSignal;
use quillbox_core::view::{Node, RenderBackend};
use quillbox_theme::id::WidgetId;
use quillbox_theme::theme::{ClassRole, Theme};

/// Builds a tab strip whose selection masks a parallel set of content panels.
///
/// Every panel stays mounted; only the panel whose position equals the
/// current selection is visible, and switching the selection flips visibility
/// in one synchronous propagation, with no intermediate state where zero or
/// several panels are visible.
pub struct Tabulator {
    keys: Vec<String>,
    panels: Vec<Node>,
    selection: Option<MaybeSignal<usize>>,
    class: Option<String>,
    attrs: IndexMap<String, String>,
}

impl Tabulator {
    /// Create from parallel key and panel sequences.
    pub fn new(
        keys: impl IntoIterator<Item = impl Into<String>>,
        panels: impl IntoIterator<Item = Node>,
    ) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            panels: panels.into_iter().collect(),
            selection: None,
            class: None,
            attrs: IndexMap::new(),
        }
    }

    /// Set the initially selected position (1-based), or share a live
    /// position cell. Defaults to the selector's median policy.
    pub fn with_selected(mut self, position: impl Into<MaybeSignal<usize>>) -> Self {
        self.selection = Some(position.into());
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

    /// Build the widget against `theme`.
    pub fn build(self, theme: &dyn Theme) -> WidgetResult<TabulatorHandle> {
        if self.keys.len() != self.panels.len() {
            return Err(WidgetError::PanelCountMismatch {
                keys: self.keys.len(),
                panels: self.panels.len(),
            });
        }

        // The selector's values are the panel positions themselves.
        let options = SelectOptions::keyed(self.keys.iter().cloned().zip(1usize..));
        let mut selector = tabs(options);
        if let Some(selection) = self.selection {
            selector = selector.with_value(selection);
        }
        let (selector_view, bridge) = selector.build_parts(theme)?;

        let id = WidgetId::new("quillbox-widgets", "Tabulator");
        let mut mask = Node::new("div").with_class(theme.class_or(
            id.clone(),
            ClassRole::Container,
            "tabulator-container",
        ));
        for (index, panel) in self.panels.into_iter().enumerate() {
            let position = index + 1;
            mask = mask.with_child(
                Node::new("div")
                    .with_class(theme.class_or(id.clone(), ClassRole::Panel, "tabulator-panel"))
                    .with_bound_attr("style", panel_style(bridge.index(), position))
                    .with_child(panel),
            );
        }

        let mut root =
            Node::new("div").with_class(theme.class_or(id.clone(), ClassRole::Root, "tabulator"));
        if let Some(class) = self.class {
            root = root.with_class(class);
        }
        for (name, value) in self.attrs {
            root = root.with_attr(name, value);
        }
        root = root.with_child(selector_view).with_child(mask);

        log::debug!("built tabulator with {} panels", bridge.options().len());
        Ok(TabulatorHandle { view: root, bridge })
    }
}

/// Handle for a built [Tabulator]: the composed view, the selector's rendered
/// scope and the raw selection-position cell.
pub struct TabulatorHandle {
    view: Node,
    bridge: SingleSelect<usize>,
}

impl TabulatorHandle {
    /// The composed view: the selector followed by the masked panels.
    pub fn view(&self) -> &Node {
        &self.view
    }

    /// The selector's rendered scope.
    pub fn selector(&self) -> &Node {
        &self.view.children()[0]
    }

    /// The container holding all masked panels.
    pub fn mask(&self) -> &Node {
        &self.view.children()[1]
    }

    /// The selection-position cell (1-based).
    pub fn index(&self) -> &StateSignal<usize> {
        self.bridge.index()
    }

    /// The currently visible panel's position (1-based).
    pub fn selected(&self) -> usize {
        self.bridge.position()
    }

    /// Select the panel at `position` (1-based). Positions outside the panel
    /// set are ignored.
    pub fn select(&self, position: usize) {
        self.bridge.select(position);
    }

    /// Mount the composed view on a host templating engine.
    pub fn attach<B: RenderBackend>(&self, backend: &mut B) -> Result<(), B::Error> {
        backend.mount(&self.view)
    }
}

impl std::fmt::Debug for TabulatorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabulatorHandle")
            .field("view", &self.view)
            .field("selected", &self.selected())
            .finish()
    }
}
