//! Error types for loading language capabilities.

use std::path::PathBuf;

use thiserror::Error;

use crate::id::LanguageId;

/// Errors that can occur while producing a language capability.
#[derive(Debug, Error)]
pub enum LoadError {
	/// The loader has no definition for the requested language.
	#[error("no definition for language '{0}'")]
	NotFound(LanguageId),

	/// Error reading a definition file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The definition is not valid TOML for a language table.
	#[error("invalid language definition: {0}")]
	Toml(#[from] toml::de::Error),

	/// A definition file describes a different language than requested.
	#[error("definition for '{found}' returned for requested language '{requested}'")]
	IdMismatch {
		requested: LanguageId,
		found: LanguageId,
	},

	/// A bracket entry is not exactly two characters.
	#[error("invalid bracket pair '{0}' (expected two characters)")]
	InvalidBracket(String),

	/// The same language is defined twice in one table.
	#[error("duplicate definition for language '{0}'")]
	Duplicate(LanguageId),
}

/// Result type for capability loading.
pub type Result<T> = std::result::Result<T, LoadError>;
