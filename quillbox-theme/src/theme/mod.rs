//! The core theme trait and built-in themes.
//!
//! A [Theme] maps a widget kind plus a structural [ClassRole] to a concrete
//! CSS class string. Themes are plain context objects passed by reference into
//! every widget builder; there is no ambient global theme.

use crate::id::WidgetId;

/// The Document theme.
pub mod document;

/// The Plain theme.
pub mod plain;

/// Structural roles a theme can resolve to a class, per widget kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassRole {
    /// The widget's root element.
    Root,
    /// The optional text label next to the control.
    Label,
    /// The interactive control element.
    Control,
    /// One selectable entry.
    Entry,
    /// The marker carried by the active entry.
    Active,
    /// The container wrapping all entries.
    Container,
    /// One masked content panel.
    Panel,
}

impl ClassRole {
    /// Conventional class suffix for this role.
    pub fn suffix(&self) -> &'static str {
        match self {
            ClassRole::Root => "",
            ClassRole::Label => "-label",
            ClassRole::Control => "-control",
            ClassRole::Entry => "-entry",
            ClassRole::Active => "-active",
            ClassRole::Container => "-container",
            ClassRole::Panel => "-panel",
        }
    }

    /// Stable lowercase name, used in config override keys.
    pub fn name(&self) -> &'static str {
        match self {
            ClassRole::Root => "root",
            ClassRole::Label => "label",
            ClassRole::Control => "control",
            ClassRole::Entry => "entry",
            ClassRole::Active => "active",
            ClassRole::Container => "container",
            ClassRole::Panel => "panel",
        }
    }

    /// Parse a role from its [name](ClassRole::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "root" => ClassRole::Root,
            "label" => ClassRole::Label,
            "control" => ClassRole::Control,
            "entry" => ClassRole::Entry,
            "active" => ClassRole::Active,
            "container" => ClassRole::Container,
            "panel" => ClassRole::Panel,
            _ => return None,
        })
    }
}

/// Base trait for all themes.
///
/// Implementations resolve a widget kind and role to a class string, or
/// `None` when they do not style that combination; callers supply their own
/// fallback through [Theme::class_or].
pub trait Theme {
    /// Resolve the class for the given widget kind and role, if this theme
    /// styles it.
    fn class(&self, id: WidgetId, role: ClassRole) -> Option<String>;

    /// The theme's own identifier.
    fn widget_id(&self) -> WidgetId;

    /// Resolve the class for the given widget kind and role, falling back to
    /// `fallback` when the theme does not style it.
    fn class_or(&self, id: WidgetId, role: ClassRole, fallback: &str) -> String {
        self.class(id, role).unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{document::DocumentTheme, plain::PlainTheme};

    #[test]
    fn test_builtin_themes_resolve() {
        let document = DocumentTheme::new();
        let plain = PlainTheme::new();

        let id = WidgetId::new("quillbox-widgets", "Dropdown");
        assert_eq!(
            document.class(id.clone(), ClassRole::Entry).as_deref(),
            Some("qb-dropdown-entry")
        );
        assert_eq!(plain.class(id.clone(), ClassRole::Entry), None);
        assert_eq!(plain.class_or(id, ClassRole::Entry, "entry"), "entry");

        // Both are usable behind the trait object the builders take.
        let _: &dyn Theme = &document;
        let _: &dyn Theme = &plain;
    }

    #[test]
    fn test_role_names_round_trip() {
        for role in [
            ClassRole::Root,
            ClassRole::Label,
            ClassRole::Control,
            ClassRole::Entry,
            ClassRole::Active,
            ClassRole::Container,
            ClassRole::Panel,
        ] {
            assert_eq!(ClassRole::from_name(role.name()), Some(role));
        }
        assert_eq!(ClassRole::from_name("banner"), None);
    }
}
