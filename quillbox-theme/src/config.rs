//! TOML-backed class overrides.
//!
//! Hosts can override the class a theme resolves for any widget kind and
//! role without writing a theme implementation:
//!
//! ```toml
//! [classes]
//! "Dropdown.root" = "form-select-wrapper"
//! "Dropdown.entry" = "form-select-option"
//! ```
//!
//! Overrides are layered over a base theme with [ConfiguredTheme].

use crate::error::{ThemeError, ThemeResult};
use crate::id::WidgetId;
use crate::theme::{ClassRole, Theme};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Class overrides keyed by `"Widget.role"`, e.g. `"Dropdown.entry"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeConfig {
    /// The override table.
    #[serde(default)]
    pub classes: IndexMap<String, String>,
}

impl ThemeConfig {
    /// Parse a config from a TOML document.
    pub fn from_toml(document: &str) -> ThemeResult<Self> {
        let config: Self =
            toml::from_str(document).map_err(|err| ThemeError::parse_error(err.to_string()))?;
        config.validate()?;
        log::debug!("loaded {} theme class overrides", config.classes.len());
        Ok(config)
    }

    /// Load a config from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path)
            .map_err(|source| ThemeError::read_error(path, source))?;
        Self::from_toml(&document)
    }

    /// Check that every override key names a known class role.
    fn validate(&self) -> ThemeResult<()> {
        for key in self.classes.keys() {
            let (_, role) = key
                .rsplit_once('.')
                .ok_or_else(|| ThemeError::malformed_key(key))?;
            if ClassRole::from_name(role).is_none() {
                return Err(ThemeError::unknown_role(key, role));
            }
        }
        Ok(())
    }

    /// The override for the given widget kind and role, if any.
    pub fn class(&self, id: &WidgetId, role: ClassRole) -> Option<&str> {
        self.classes
            .get(&format!("{}.{}", id.id(), role.name()))
            .map(String::as_str)
    }
}

/// A theme layering [ThemeConfig] overrides over a base theme.
pub struct ConfiguredTheme<B: Theme> {
    base: B,
    config: ThemeConfig,
}

impl<B: Theme> ConfiguredTheme<B> {
    /// Layer `config` over `base`.
    pub fn new(base: B, config: ThemeConfig) -> Self {
        Self { base, config }
    }
}

impl<B: Theme> Theme for ConfiguredTheme<B> {
    fn class(&self, id: WidgetId, role: ClassRole) -> Option<String> {
        if let Some(class) = self.config.class(&id, role) {
            return Some(class.to_string());
        }
        self.base.class(id, role)
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("quillbox-theme", "ConfiguredTheme")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::document::DocumentTheme;

    #[test]
    fn test_parse_and_resolve_overrides() {
        let config = ThemeConfig::from_toml(
            r#"
            [classes]
            "Dropdown.root" = "form-select-wrapper"
            "Tabs.active" = "is-current"
            "#,
        )
        .unwrap();

        let theme = ConfiguredTheme::new(DocumentTheme::new(), config);
        let dropdown = WidgetId::new("quillbox-widgets", "Dropdown");
        let tabs = WidgetId::new("quillbox-widgets", "Tabs");

        assert_eq!(
            theme.class(dropdown.clone(), ClassRole::Root).as_deref(),
            Some("form-select-wrapper")
        );
        assert_eq!(
            theme.class(tabs, ClassRole::Active).as_deref(),
            Some("is-current")
        );
        // Non-overridden lookups fall through to the base theme.
        assert_eq!(
            theme.class(dropdown, ClassRole::Entry).as_deref(),
            Some("qb-dropdown-entry")
        );
    }

    #[test]
    fn test_empty_document_is_valid() {
        let config = ThemeConfig::from_toml("").unwrap();
        assert!(config.classes.is_empty());
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let err = ThemeConfig::from_toml(
            r#"
            [classes]
            "Dropdown.banner" = "x"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ThemeError::UnknownRole { .. }));
    }

    #[test]
    fn test_malformed_key_is_rejected() {
        let err = ThemeConfig::from_toml(
            r#"
            [classes]
            "Dropdown" = "x"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ThemeError::MalformedKey { .. }));
    }
}
