//! Themes for the quill editor shell.
//!
//! A [`ThemeDef`] is parsed from TOML; a [`ThemeCatalog`] maps names to
//! definitions; a [`ThemeCapability`] is what the editor's theme slot holds.

mod capability;
mod catalog;
mod color;
mod error;
mod theme;

pub use capability::ThemeCapability;
pub use catalog::{DEFAULT_DARK_THEME, ThemeCatalog};
pub use color::Color;
pub use error::{Result, ThemeError};
pub use theme::{SyntaxStyle, ThemeDef, ThemeVariant, UiColors};
