use std::sync::Arc;

use crate::theme::{ThemeDef, ThemeVariant};

/// The value held by the editor's theme slot.
///
/// The default (light) look is the empty set; it is never represented by a
/// missing value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeCapability {
	themes: Vec<Arc<ThemeDef>>,
}

impl ThemeCapability {
	pub fn empty() -> Self {
		Self::default()
	}

	pub fn single(theme: Arc<ThemeDef>) -> Self {
		Self { themes: vec![theme] }
	}

	pub fn is_empty(&self) -> bool {
		self.themes.is_empty()
	}

	pub fn themes(&self) -> &[Arc<ThemeDef>] {
		&self.themes
	}

	/// Whether any installed theme has a dark background.
	pub fn is_dark(&self) -> bool {
		self.themes.iter().any(|t| t.variant == ThemeVariant::Dark)
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.themes.iter().map(|t| t.name.as_str())
	}
}
