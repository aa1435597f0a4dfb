//! Widget construction errors.

use thiserror::Error;

/// Errors raised while constructing a widget.
///
/// All failures are synchronous and surface at construction time; a failed
/// build renders nothing rather than silently substituting a selection.
#[derive(Error, Debug)]
pub enum WidgetError {
    /// The configured initial selection is not present among the options.
    #[error("invalid default selection: {details}")]
    InvalidDefault {
        /// What was looked up and not found.
        details: String,
    },

    /// A single-selection widget was built over an empty option collection.
    #[error("cannot pick a default selection from an empty option collection")]
    EmptyOptions,

    /// Tabulator keys and content panels differ in length.
    #[error("tabulator expects one content panel per key ({keys} keys, {panels} panels)")]
    PanelCountMismatch {
        /// Number of selector keys.
        keys: usize,
        /// Number of content panels.
        panels: usize,
    },
}

impl WidgetError {
    /// Create an invalid-default error.
    pub fn invalid_default(details: impl Into<String>) -> Self {
        Self::InvalidDefault {
            details: details.into(),
        }
    }
}

/// Result type alias for widget construction.
pub type WidgetResult<T> = Result<T, WidgetError>;
