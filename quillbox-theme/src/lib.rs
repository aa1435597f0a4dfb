#![warn(missing_docs)]

//! Themes & class resolution for quillbox widgets => See the `quillbox` crate
//! for more.
//!
//! Widgets never emit concrete CSS classes themselves; they ask a [Theme]
//! to resolve a ([id::WidgetId], [theme::ClassRole]) pair into a class string.

/// Contains the [id::WidgetId] identifying widget kinds.
pub mod id;

/// Contains the [theme::Theme] trait and built-in themes.
pub mod theme;

/// Contains TOML-backed class overrides.
pub mod config;

/// Contains the [error::ThemeError] type.
pub mod error;
