//! Language definitions and the capability built from them.
//!
//! A [`LanguageDef`] is the serialized form (one `[[language]]` table). A
//! [`LanguageCapability`] is the validated, shareable unit that gets installed
//! into the editor's language slot. Everything the editing engine needs to
//! tokenize and indent comes from the grammar named here; the shell treats the
//! capability as opaque apart from its id.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{LoadError, Result};
use crate::id::LanguageId;

/// Serialized language definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LanguageDef {
	pub id: LanguageId,
	pub name: String,
	/// Grammar name; defaults to the id.
	#[serde(default)]
	pub grammar: Option<String>,
	#[serde(default)]
	pub extensions: Vec<String>,
	#[serde(default)]
	pub line_comment: Option<String>,
	#[serde(default)]
	pub block_comment: Option<(String, String)>,
	/// Two-character strings, opener then closer.
	#[serde(default)]
	pub brackets: Vec<String>,
	#[serde(default)]
	pub indent: IndentRule,
}

/// Indentation hints for the engine's indent-on-input behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct IndentRule {
	/// Line endings after which the next line is indented.
	#[serde(default)]
	pub after: Vec<String>,
	/// Line prefixes that dedent the current line when typed.
	#[serde(default)]
	pub dedent_on: Vec<String>,
}

/// A matched bracket pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BracketPair {
	pub open: char,
	pub close: char,
}

impl BracketPair {
	fn parse(raw: &str) -> Result<Self> {
		let mut chars = raw.chars();
		match (chars.next(), chars.next(), chars.next()) {
			(Some(open), Some(close), None) => Ok(Self { open, close }),
			_ => Err(LoadError::InvalidBracket(raw.to_string())),
		}
	}
}

/// Validated language support data.
#[derive(Debug, PartialEq, Eq)]
pub struct LanguageSupport {
	pub id: LanguageId,
	pub name: String,
	pub grammar: String,
	pub extensions: Vec<String>,
	pub line_comment: Option<String>,
	pub block_comment: Option<(String, String)>,
	pub brackets: Vec<BracketPair>,
	pub indent: IndentRule,
}

impl LanguageSupport {
	pub fn from_def(def: LanguageDef) -> Result<Self> {
		let brackets = def.brackets.iter().map(|raw| BracketPair::parse(raw)).collect::<Result<Vec<_>>>()?;
		Ok(Self {
			grammar: def.grammar.unwrap_or_else(|| def.id.to_string()),
			id: def.id,
			name: def.name,
			extensions: def.extensions,
			line_comment: def.line_comment,
			block_comment: def.block_comment,
			brackets,
			indent: def.indent,
		})
	}

	/// Returns the closer for `open`, if `open` starts a bracket pair.
	pub fn closing_bracket(&self, open: char) -> Option<char> {
		self.brackets.iter().find(|pair| pair.open == open).map(|pair| pair.close)
	}
}

/// Shareable language capability handle.
///
/// Clones share one allocation; [`LanguageCapability::same`] tells whether two
/// handles came from the same construction.
#[derive(Clone)]
pub struct LanguageCapability(Arc<LanguageSupport>);

impl LanguageCapability {
	pub fn new(support: LanguageSupport) -> Self {
		Self(Arc::new(support))
	}

	pub fn from_def(def: LanguageDef) -> Result<Self> {
		LanguageSupport::from_def(def).map(Self::new)
	}

	pub fn id(&self) -> LanguageId {
		self.0.id
	}

	pub fn same(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

impl Deref for LanguageCapability {
	type Target = LanguageSupport;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl fmt::Debug for LanguageCapability {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("LanguageCapability").field(&self.0.id).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn def(brackets: &[&str]) -> LanguageDef {
		LanguageDef {
			id: LanguageId::Rust,
			name: "Rust".to_string(),
			grammar: None,
			extensions: vec!["rs".to_string()],
			line_comment: Some("//".to_string()),
			block_comment: None,
			brackets: brackets.iter().map(|s| s.to_string()).collect(),
			indent: IndentRule::default(),
		}
	}

	#[test]
	fn grammar_defaults_to_id() {
		let support = LanguageSupport::from_def(def(&["()"])).unwrap();
		assert_eq!(support.grammar, "rust");
		assert_eq!(support.closing_bracket('('), Some(')'));
		assert_eq!(support.closing_bracket('{'), None);
	}

	#[test]
	fn bracket_must_be_two_chars() {
		let err = LanguageSupport::from_def(def(&["()", "{"])).unwrap_err();
		assert!(matches!(err, LoadError::InvalidBracket(ref raw) if raw == "{"));
	}

	#[test]
	fn clones_share_identity() {
		let a = LanguageCapability::from_def(def(&[])).unwrap();
		let b = a.clone();
		let c = LanguageCapability::from_def(def(&[])).unwrap();
		assert!(a.same(&b));
		assert!(!a.same(&c));
		assert_eq!(a.id(), c.id());
	}
}
