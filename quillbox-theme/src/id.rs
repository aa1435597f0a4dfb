//! Widget identifiers associating widget kinds with their theme styling.

/// Unique identifier for a widget kind, namespaced by the defining crate.
///
/// ```rust
/// use quillbox_theme::id::WidgetId;
///
/// let dropdown_id = WidgetId::new("quillbox-widgets", "Dropdown");
/// assert_eq!(dropdown_id.id(), "Dropdown");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId {
    namespace: String,
    id: String,
}

impl WidgetId {
    /// Create a new widget id.
    pub fn new(namespace: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            id: id.into(),
        }
    }

    /// The namespace, conventionally the defining crate's name.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The widget kind's name inside its namespace.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.namespace, self.id)
    }
}
