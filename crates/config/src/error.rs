//! Error types for configuration parsing.

use std::path::PathBuf;

use quill_keymap::KeymapError;
use quill_language::UnknownLanguage;
use quill_theme::ThemeError;
use thiserror::Error;

/// Errors that can occur when parsing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A language name is not one of the supported ids.
	#[error(transparent)]
	UnknownLanguage(#[from] UnknownLanguage),

	/// The configured dark theme is neither builtin nor loaded from a file.
	#[error(
		"unknown theme '{name}'{}",
		.suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default()
	)]
	UnknownTheme {
		name: String,
		suggestion: Option<String>,
	},

	/// A theme file failed to parse.
	#[error("invalid theme file {path}: {source}")]
	Theme {
		path: PathBuf,
		#[source]
		source: ThemeError,
	},

	/// The embedded theme table failed to parse.
	#[error("failed to load builtin themes: {0}")]
	BuiltinThemes(#[source] ThemeError),

	/// A `[keys]` entry names a command that does not exist.
	#[error("unknown command '{command}' bound to '{chord}'")]
	UnknownCommand { chord: String, command: String },

	/// A `[keys]` entry has a chord that does not parse.
	#[error(transparent)]
	InvalidChord(#[from] KeymapError),

	/// Indent units are one or more spaces, or a single tab.
	#[error("invalid indent unit {0:?} (expected spaces or a single tab)")]
	InvalidIndentUnit(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
