//! Named theme lookup.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::capability::ThemeCapability;
use crate::error::{Result, ThemeError};
use crate::theme::ThemeDef;

/// Builtin dark theme shipped with the editor.
pub const DEFAULT_DARK_THEME: &str = "one-dark";

const ONE_DARK_TOML: &str = include_str!("../../../runtime/themes/one-dark.toml");

/// Themes by name.
#[derive(Debug, Clone, Default)]
pub struct ThemeCatalog {
	themes: FxHashMap<String, Arc<ThemeDef>>,
}

impl ThemeCatalog {
	/// A catalog holding the builtin themes.
	pub fn builtin() -> Result<Self> {
		let mut catalog = Self::default();
		catalog.register(ThemeDef::parse(ONE_DARK_TOML)?);
		Ok(catalog)
	}

	/// Adds or replaces a theme under its own name.
	pub fn register(&mut self, theme: ThemeDef) {
		self.themes.insert(theme.name.clone(), Arc::new(theme));
	}

	pub fn get(&self, name: &str) -> Option<Arc<ThemeDef>> {
		self.themes.get(name).cloned()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.themes.contains_key(name)
	}

	/// Closest registered name within three edits.
	pub fn suggest(&self, name: &str) -> Option<String> {
		self.themes
			.keys()
			.min_by_key(|k| strsim::levenshtein(name, k))
			.filter(|k| strsim::levenshtein(name, k) <= 3)
			.cloned()
	}

	/// Maps a theme name, or its absence, to a slot value.
	pub fn resolve(&self, name: Option<&str>) -> Result<ThemeCapability> {
		let Some(name) = name else {
			return Ok(ThemeCapability::empty());
		};
		self.get(name).map(ThemeCapability::single).ok_or_else(|| ThemeError::Unknown {
			name: name.to_string(),
			suggestion: self.suggest(name),
		})
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.themes.keys().map(String::as_str)
	}
}
