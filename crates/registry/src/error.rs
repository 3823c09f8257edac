//! Error types for capability resolution.

use quill_language::{LanguageId, LoadError, UnknownLanguage};
use quill_theme::ThemeError;
use thiserror::Error;

/// A request names something the registry is not configured to provide.
///
/// Never answered by falling back to a different capability.
#[derive(Debug, Error)]
pub enum ConfigurationError {
	#[error(transparent)]
	UnknownLanguage(#[from] UnknownLanguage),

	/// The id is valid but no eager capability or loader covers it.
	#[error("no capability provider registered for language '{0}'")]
	Unavailable(LanguageId),

	#[error(transparent)]
	UnknownTheme(ThemeError),
}

/// Errors produced by the extension registry.
#[derive(Debug, Error)]
pub enum RegistryError {
	#[error(transparent)]
	Configuration(#[from] ConfigurationError),

	/// A loader rejected the request.
	#[error("failed to load language '{id}': {source}")]
	CapabilityLoad {
		id: LanguageId,
		#[source]
		source: LoadError,
	},

	/// The builtin language table failed to parse.
	#[error("failed to build builtin language table: {0}")]
	Languages(#[source] LoadError),

	/// The builtin theme table failed to parse.
	#[error("failed to build theme catalog: {0}")]
	Themes(#[source] ThemeError),
}

impl RegistryError {
	pub fn is_configuration(&self) -> bool {
		matches!(self, Self::Configuration(_))
	}
}

impl From<UnknownLanguage> for RegistryError {
	fn from(err: UnknownLanguage) -> Self {
		Self::Configuration(err.into())
	}
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
