//! Embedded builtin language table.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::error::{LoadError, Result};
use crate::id::LanguageId;
use crate::language::LanguageDef;

/// Embedded languages.toml from the runtime directory.
const LANGUAGES_TOML: &str = include_str!("../../../runtime/languages.toml");

#[derive(Debug, Deserialize)]
struct LanguagesFile {
	#[serde(default)]
	language: Vec<LanguageDef>,
}

/// Definitions keyed by id. Each id appears at most once.
#[derive(Debug, Clone, Default)]
pub struct LanguageDefs {
	defs: FxHashMap<LanguageId, LanguageDef>,
}

impl LanguageDefs {
	/// Parses the embedded builtin table.
	pub fn embedded() -> Result<Self> {
		Self::parse(LANGUAGES_TOML)
	}

	/// Parses a `[[language]]` table. A repeated id is an error rather than a
	/// silent overwrite.
	pub fn parse(input: &str) -> Result<Self> {
		let file: LanguagesFile = toml::from_str(input)?;
		let mut defs = FxHashMap::default();
		for def in file.language {
			let id = def.id;
			if defs.insert(id, def).is_some() {
				return Err(LoadError::Duplicate(id));
			}
		}
		Ok(Self { defs })
	}

	pub fn get(&self, id: LanguageId) -> Option<&LanguageDef> {
		self.defs.get(&id)
	}

	pub fn contains(&self, id: LanguageId) -> bool {
		self.defs.contains_key(&id)
	}

	pub fn len(&self) -> usize {
		self.defs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.defs.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn embedded_table_covers_every_id_once() {
		let defs = LanguageDefs::embedded().unwrap();
		assert_eq!(defs.len(), LanguageId::all().count());
		for id in LanguageId::all() {
			assert_eq!(defs.get(id).map(|d| d.id), Some(id));
		}
	}

	#[test]
	fn json_and_yaml_are_not_swapped() {
		let defs = LanguageDefs::embedded().unwrap();
		assert_eq!(defs.get(LanguageId::Json).unwrap().name, "JSON");
		assert_eq!(defs.get(LanguageId::Yaml).unwrap().name, "YAML");
		assert!(defs.get(LanguageId::Yaml).unwrap().extensions.contains(&"yml".to_string()));
	}

	#[test]
	fn duplicate_ids_are_rejected() {
		let input = r#"
			[[language]]
			id = "json"
			name = "JSON"

			[[language]]
			id = "json"
			name = "YAML"
		"#;
		assert!(matches!(LanguageDefs::parse(input), Err(LoadError::Duplicate(LanguageId::Json))));
	}
}
