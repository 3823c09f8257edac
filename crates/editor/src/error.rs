//! Error types for the editor shell.

use quill_config::ConfigError;
use quill_language::{LanguageId, LoadError, UnknownLanguage};
use quill_registry::{ConfigurationError, RegistryError};
use thiserror::Error;

use crate::extension::{Baseline, Slot};

/// The engine could not be mounted.
#[derive(Debug, Error)]
pub enum MountError {
	/// No container was supplied.
	#[error("no container to mount into")]
	MissingContainer,

	/// The container already hosts an editor.
	#[error("container '{0}' already hosts an editor")]
	Occupied(String),
}

/// Errors produced by [`EditorShell`](crate::EditorShell) operations.
///
/// None of them leaves the shell in a changed state: the previously installed
/// slot values stay in force.
#[derive(Debug, Error)]
pub enum ShellError {
	#[error(transparent)]
	Configuration(#[from] ConfigurationError),

	#[error(transparent)]
	Mount(#[from] MountError),

	/// Baseline capabilities are fixed for the lifetime of an instance.
	#[error("'{0}' cannot be reconfigured after mount")]
	UnsupportedReconfiguration(Baseline),

	/// A slot was handed a value belonging to another slot.
	#[error("{value} value cannot be installed in the {target} slot")]
	SlotMismatch { target: Slot, value: Slot },

	/// The current language request failed to load.
	#[error("failed to load language '{id}': {source}")]
	CapabilityLoad {
		id: LanguageId,
		#[source]
		source: LoadError,
	},

	#[error("editor is not initialized")]
	NotInitialized,

	#[error("editor is already initialized")]
	AlreadyInitialized,

	/// The registry could not be built.
	#[error(transparent)]
	Registry(RegistryError),

	#[error(transparent)]
	Config(#[from] ConfigError),
}

impl ShellError {
	pub fn is_configuration(&self) -> bool {
		matches!(self, Self::Configuration(_))
	}
}

impl From<RegistryError> for ShellError {
	fn from(err: RegistryError) -> Self {
		match err {
			RegistryError::Configuration(err) => Self::Configuration(err),
			RegistryError::CapabilityLoad { id, source } => Self::CapabilityLoad { id, source },
			other => Self::Registry(other),
		}
	}
}

impl From<UnknownLanguage> for ShellError {
	fn from(err: UnknownLanguage) -> Self {
		Self::Configuration(err.into())
	}
}

/// Result type for shell operations.
pub type Result<T> = std::result::Result<T, ShellError>;
