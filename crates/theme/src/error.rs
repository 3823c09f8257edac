//! Error types for theme parsing and lookup.

use thiserror::Error;

/// Errors that can occur when parsing or resolving themes.
#[derive(Debug, Error)]
pub enum ThemeError {
	/// Error parsing TOML syntax.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A color value could not be parsed.
	#[error("invalid color format: {0}")]
	InvalidColor(String),

	/// A palette color reference was not defined.
	#[error("undefined palette color: ${0}")]
	UndefinedPaletteColor(String),

	/// No theme with this name is registered.
	#[error(
		"unknown theme '{name}'{}",
		.suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default()
	)]
	Unknown {
		name: String,
		suggestion: Option<String>,
	},
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
