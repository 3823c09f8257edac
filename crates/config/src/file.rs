//! The unvalidated, mergeable form of a configuration file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use quill_keymap::Platform;
use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Platform selection; `auto` follows the running binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformChoice {
	#[default]
	Auto,
	Mac,
	Other,
}

impl PlatformChoice {
	pub fn resolve(self) -> Platform {
		match self {
			Self::Auto => Platform::current(),
			Self::Mac => Platform::Mac,
			Self::Other => Platform::Other,
		}
	}
}

/// A configuration file as written.
///
/// Every field is optional so that files can be layered with
/// [`ConfigFile::merge`] before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
	/// Initial document text.
	pub document: Option<String>,
	/// Initial language name.
	pub language: Option<String>,
	/// Initial state of the dark theme toggle.
	pub dark: Option<bool>,
	/// Theme installed when the toggle is on.
	pub dark_theme: Option<String>,
	pub platform: Option<PlatformChoice>,
	pub indent_unit: Option<String>,
	/// Languages built when the registry is built; the rest load lazily.
	pub eager: Option<Vec<String>>,
	/// Directory of `<id>.toml` language definitions consulted ahead of the
	/// builtin table.
	pub language_dir: Option<PathBuf>,
	/// Extra theme files.
	#[serde(default)]
	pub theme_files: Vec<PathBuf>,
	/// Chord to command name; installed ahead of the builtin keymaps.
	#[serde(default)]
	pub keys: BTreeMap<String, String>,
}

impl ConfigFile {
	/// Parses a TOML string.
	pub fn parse(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Reads and parses a file. Relative paths inside it are taken relative
	/// to the file's directory.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		let mut file = Self::parse(&content)?;
		if let Some(base) = path.parent() {
			file.rebase(base);
		}
		Ok(file)
	}

	fn rebase(&mut self, base: &Path) {
		let rebase = |p: &mut PathBuf| {
			if p.is_relative() {
				*p = base.join(&*p);
			}
		};
		if let Some(dir) = &mut self.language_dir {
			rebase(dir);
		}
		self.theme_files.iter_mut().for_each(rebase);
	}

	/// Merges `other` into this file; values set in `other` win.
	pub fn merge(&mut self, other: ConfigFile) {
		macro_rules! take {
			($($field:ident),*) => {
				$(if other.$field.is_some() {
					self.$field = other.$field;
				})*
			};
		}
		take!(document, language, dark, dark_theme, platform, indent_unit, eager, language_dir);
		self.theme_files.extend(other.theme_files);
		self.keys.extend(other.keys);
	}
}
