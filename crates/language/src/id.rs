//! The closed set of supported language modes.

use serde::Deserialize;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Identifier of a supported language mode.
///
/// The set is fixed at build time; matching on it is exhaustive.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, IntoStaticStr, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
	Javascript,
	Python,
	Css,
	Html,
	Cpp,
	Java,
	Xml,
	Sql,
	Yaml,
	Markdown,
	Rust,
	Php,
	Json,
}

/// A language name that is not one of the [`LanguageId`]s.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
	"unknown language '{name}'{}",
	.suggestion.map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default()
)]
pub struct UnknownLanguage {
	pub name: String,
	pub suggestion: Option<LanguageId>,
}

impl LanguageId {
	/// Parses a language name, suggesting the closest known id on failure.
	pub fn parse_name(name: &str) -> Result<Self, UnknownLanguage> {
		name.parse().map_err(|_| UnknownLanguage {
			name: name.to_string(),
			suggestion: Self::suggest(name),
		})
	}

	/// Closest id by edit distance, if any is within three edits.
	pub fn suggest(name: &str) -> Option<Self> {
		let lowered = name.to_ascii_lowercase();
		Self::iter()
			.min_by_key(|id| strsim::levenshtein(&lowered, id.as_str()))
			.filter(|id| strsim::levenshtein(&lowered, id.as_str()) <= 3)
	}

	pub fn as_str(self) -> &'static str {
		self.into()
	}

	pub fn all() -> impl Iterator<Item = Self> {
		Self::iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_lowercase_names() {
		assert_eq!(LanguageId::parse_name("javascript").unwrap(), LanguageId::Javascript);
		assert_eq!(LanguageId::Cpp.to_string(), "cpp");
		assert_eq!(LanguageId::all().count(), 13);
	}

	#[test]
	fn unknown_name_carries_suggestion() {
		let err = LanguageId::parse_name("pyhton").unwrap_err();
		assert_eq!(err.suggestion, Some(LanguageId::Python));
		assert_eq!(err.to_string(), "unknown language 'pyhton' (did you mean 'python'?)");

		let err = LanguageId::parse_name("unknown-id").unwrap_err();
		assert_eq!(err.suggestion, None);
		assert_eq!(err.to_string(), "unknown language 'unknown-id'");
	}
}
