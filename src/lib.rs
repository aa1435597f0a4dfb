#![warn(missing_docs)]

//! Reactive input widgets for interactive documents.
//!
//! Each widget renders a declarative view tree and binds it bidirectionally
//! to a shared value cell: user interaction delivered by the host templating
//! engine updates application state, and programmatic state changes update
//! the rendered view.

pub use quillbox_core as core;
pub use quillbox_theme as theme;
pub use quillbox_widgets as widgets;

/// A "prelude" for users of the quillbox widget library.
///
/// Importing this module brings into scope the most common types needed to
/// build and bind the input widgets.
///
/// ```rust
/// use quillbox::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::reference::Ref;
    pub use crate::core::signal::{
        derived::DerivedSignal, fixed::FixedSignal, state::StateSignal, *,
    };
    pub use crate::core::view::{AttrValue, Node, RenderBackend};

    // Theming
    pub use crate::theme::config::{ConfiguredTheme, ThemeConfig};
    pub use crate::theme::id::WidgetId;
    pub use crate::theme::theme::{document::DocumentTheme, plain::PlainTheme, ClassRole, Theme};

    // Widgets
    pub use crate::widgets::bridge::{DefaultSelect, MultiSelect, SingleSelect};
    pub use crate::widgets::checkboxes::{checkboxes, toggles};
    pub use crate::widgets::dropdown::{Dropdown, MultiDropdown};
    pub use crate::widgets::error::{WidgetError, WidgetResult};
    pub use crate::widgets::handle::WidgetHandle;
    pub use crate::widgets::multiselect::{ControlKind, Multiselect};
    pub use crate::widgets::options::{OptionRenderer, SelectOption, SelectOptions};
    pub use crate::widgets::radio_buttons::RadioButtons;
    pub use crate::widgets::tabulator::{Tabulator, TabulatorHandle};
    pub use crate::widgets::toggle_buttons::{tabs, ContainerKind, ToggleButtons};
}
