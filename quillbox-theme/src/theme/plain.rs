use crate::id::WidgetId;
use crate::theme::{ClassRole, Theme};

/// A theme that resolves nothing.
///
/// Widgets fall back to their built-in class names; hosts that style by tag
/// or attribute selectors use this to keep the rendered tree free of theme
/// classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTheme;

impl PlainTheme {
    /// Create the theme.
    pub fn new() -> Self {
        Self
    }
}

impl Theme for PlainTheme {
    fn class(&self, _: WidgetId, _: ClassRole) -> Option<String> {
        None
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("quillbox-theme", "PlainTheme")
    }
}
