use crate::id::WidgetId;
use crate::theme::{ClassRole, Theme};

/// The default quillbox theme.
///
/// Resolves every widget kind to a `qb-` prefixed class derived from the
/// kind's name and the role suffix, e.g. `qb-dropdown-entry`. Suited to hosts
/// shipping the stock stylesheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentTheme;

impl DocumentTheme {
    /// Create the theme.
    pub fn new() -> Self {
        Self
    }
}

impl Theme for DocumentTheme {
    fn class(&self, id: WidgetId, role: ClassRole) -> Option<String> {
        Some(format!(
            "qb-{}{}",
            id.id().to_ascii_lowercase(),
            role.suffix()
        ))
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("quillbox-theme", "DocumentTheme")
    }
}
