//! Capability loaders.
//!
//! A loader turns a [`LanguageId`] into a [`LanguageCapability`], possibly
//! asynchronously. Loaders do not cache; memoization belongs to the registry
//! that owns them.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::defs::LanguageDefs;
use crate::error::{LoadError, Result};
use crate::id::LanguageId;
use crate::language::{LanguageCapability, LanguageDef};

/// Produces language capabilities on demand.
#[async_trait]
pub trait LanguageLoader: Send + Sync {
	/// Loads the capability for `id`.
	async fn load(&self, id: LanguageId) -> Result<LanguageCapability>;

	/// Whether this loader can be asked for `id` at all.
	fn provides(&self, id: LanguageId) -> bool;
}

/// Builds capabilities from the embedded definition table.
#[derive(Debug, Clone)]
pub struct BuiltinLoader {
	defs: LanguageDefs,
}

impl BuiltinLoader {
	pub fn new() -> Result<Self> {
		Ok(Self {
			defs: LanguageDefs::embedded()?,
		})
	}

	pub fn with_defs(defs: LanguageDefs) -> Self {
		Self { defs }
	}

	/// Synchronous construction, used for eagerly built languages.
	pub fn build(&self, id: LanguageId) -> Result<LanguageCapability> {
		let def = self.defs.get(id).cloned().ok_or(LoadError::NotFound(id))?;
		LanguageCapability::from_def(def)
	}
}

#[async_trait]
impl LanguageLoader for BuiltinLoader {
	async fn load(&self, id: LanguageId) -> Result<LanguageCapability> {
		self.build(id)
	}

	fn provides(&self, id: LanguageId) -> bool {
		self.defs.contains(id)
	}
}

/// Reads `<root>/<id>.toml` definition files at load time.
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
	root: PathBuf,
}

impl DirectoryLoader {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	fn path_for(&self, id: LanguageId) -> PathBuf {
		self.root.join(format!("{id}.toml"))
	}
}

#[async_trait]
impl LanguageLoader for DirectoryLoader {
	async fn load(&self, id: LanguageId) -> Result<LanguageCapability> {
		let path = self.path_for(id);
		tracing::debug!(language = %id, path = %path.display(), "language.load.read");

		let content = tokio::fs::read_to_string(&path)
			.await
			.map_err(|error| LoadError::Io { path, error })?;
		let def: LanguageDef = toml::from_str(&content)?;
		if def.id != id {
			return Err(LoadError::IdMismatch {
				requested: id,
				found: def.id,
			});
		}

		LanguageCapability::from_def(def)
	}

	/// Only ids whose definition file exists.
	fn provides(&self, id: LanguageId) -> bool {
		self.path_for(id).is_file()
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use super::*;

	#[tokio::test]
	async fn builtin_loader_builds_requested_language() {
		let loader = BuiltinLoader::new().unwrap();
		let cap = loader.load(LanguageId::Python).await.unwrap();
		assert_eq!(cap.id(), LanguageId::Python);
		assert_eq!(cap.line_comment.as_deref(), Some("#"));
	}

	#[tokio::test]
	async fn builtin_loader_reports_missing_definition() {
		let loader = BuiltinLoader::with_defs(LanguageDefs::default());
		assert!(!loader.provides(LanguageId::Rust));
		assert!(matches!(loader.load(LanguageId::Rust).await, Err(LoadError::NotFound(LanguageId::Rust))));
	}

	#[tokio::test]
	async fn directory_loader_reads_definition_file() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(
			dir.path().join("sql.toml"),
			"id = \"sql\"\nname = \"SQL\"\nline-comment = \"--\"\nbrackets = [\"()\"]\n",
		)
		.unwrap();

		let cap = DirectoryLoader::new(dir.path()).load(LanguageId::Sql).await.unwrap();
		assert_eq!(cap.id(), LanguageId::Sql);
		assert_eq!(cap.closing_bracket('('), Some(')'));
	}

	#[tokio::test]
	async fn directory_loader_rejects_mismatched_definition() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("json.toml"), "id = \"yaml\"\nname = \"YAML\"\n").unwrap();

		let err = DirectoryLoader::new(dir.path()).load(LanguageId::Json).await.unwrap_err();
		assert!(matches!(
			err,
			LoadError::IdMismatch {
				requested: LanguageId::Json,
				found: LanguageId::Yaml
			}
		));
	}

	#[tokio::test]
	async fn directory_loader_surfaces_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let loader = DirectoryLoader::new(dir.path());
		assert!(!loader.provides(LanguageId::Php));
		let err = loader.load(LanguageId::Php).await.unwrap_err();
		assert!(matches!(err, LoadError::Io { ref path, .. } if path.ends_with("php.toml")));
	}
}
