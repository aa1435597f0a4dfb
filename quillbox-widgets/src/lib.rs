#![warn(missing_docs)]

//! Input widgets for quillbox => See the `quillbox` crate.
//!
//! Every widget builder renders a declarative view tree and binds it
//! bidirectionally to a shared value cell: user interaction delivered by the
//! host engine updates the cell, programmatic writes to the cell update the
//! view's bound attributes.

/// Contains the [error::WidgetError] type.
pub mod error;

/// Contains the [options::SelectOptions] collection.
pub mod options;

/// Contains the index/value selection bridges.
pub mod bridge;

/// Contains the [handle::WidgetHandle] returned by builders.
pub mod handle;

/// Contains the [dropdown::Dropdown] widget.
pub mod dropdown;

/// Contains the [radio_buttons::RadioButtons] widget.
pub mod radio_buttons;

/// Contains the [multiselect::Multiselect] widget.
pub mod multiselect;

/// Contains the [checkboxes::checkboxes] and [checkboxes::toggles] entry
/// points.
pub mod checkboxes;

/// Contains the [toggle_buttons::ToggleButtons] widget and the
/// [toggle_buttons::tabs] variant.
pub mod toggle_buttons;

/// Contains the [tabulator::Tabulator] widget.
pub mod tabulator;

mod bind;
