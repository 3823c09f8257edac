//! Theme definitions.
//!
//! Theme files are TOML with a `[palette]` table whose entries can be
//! referenced elsewhere as `$name`:
//!
//! ```toml
//! name = "one-dark"
//! variant = "dark"
//!
//! [palette]
//! violet = "#c678dd"
//!
//! [ui]
//! bg = "#282c34"
//! fg = "#abb2bf"
//!
//! [syntax]
//! keyword = { fg = "$violet", bold = true }
//! ```

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::color::Color;
use crate::error::{Result, ThemeError};

/// Whether a theme uses a light or dark background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
	#[default]
	Dark,
	Light,
}

/// Colors for the editor chrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiColors {
	pub bg: Color,
	pub fg: Color,
	pub gutter_bg: Color,
	pub gutter_fg: Color,
	pub cursor: Color,
	pub selection_bg: Color,
	pub active_line_bg: Color,
	/// Falls back to `selection_bg` when unset.
	pub matching_bracket_bg: Color,
	/// Falls back to `selection_bg` when unset.
	pub search_match_bg: Color,
}

/// Style for one highlight scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SyntaxStyle {
	pub fg: Option<Color>,
	pub bold: bool,
	pub italic: bool,
	pub underline: bool,
}

/// A complete, palette-resolved theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeDef {
	pub name: String,
	pub variant: ThemeVariant,
	pub ui: UiColors,
	/// Highlight scope name to style.
	pub syntax: BTreeMap<String, SyntaxStyle>,
}

impl ThemeDef {
	/// Parses a standalone theme file.
	pub fn parse(input: &str) -> Result<Self> {
		let raw: RawTheme = toml::from_str(input)?;
		raw.resolve()
	}

	/// Style for `scope`, falling back along dotted prefixes
	/// (`keyword.control` then `keyword`).
	pub fn style_for(&self, scope: &str) -> Option<&SyntaxStyle> {
		let mut scope = scope;
		loop {
			if let Some(style) = self.syntax.get(scope) {
				return Some(style);
			}
			scope = &scope[..scope.rfind('.')?];
		}
	}
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawTheme {
	name: String,
	#[serde(default)]
	variant: ThemeVariant,
	#[serde(default)]
	palette: FxHashMap<String, String>,
	ui: RawUi,
	#[serde(default)]
	syntax: BTreeMap<String, RawStyle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawUi {
	bg: String,
	fg: String,
	gutter_bg: Option<String>,
	gutter_fg: Option<String>,
	cursor: Option<String>,
	selection_bg: String,
	active_line_bg: Option<String>,
	matching_bracket_bg: Option<String>,
	search_match_bg: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawStyle {
	fg: Option<String>,
	#[serde(default)]
	bold: bool,
	#[serde(default)]
	italic: bool,
	#[serde(default)]
	underline: bool,
}

/// Resolves `$name` palette references and literal colors.
struct Palette {
	colors: FxHashMap<String, Color>,
}

impl Palette {
	fn parse(raw: &FxHashMap<String, String>) -> Result<Self> {
		let colors = raw
			.iter()
			.map(|(name, value)| Ok((name.clone(), value.parse::<Color>()?)))
			.collect::<Result<_>>()?;
		Ok(Self { colors })
	}

	fn resolve(&self, value: &str) -> Result<Color> {
		if let Some(name) = value.strip_prefix('$') {
			self.colors
				.get(name)
				.copied()
				.ok_or_else(|| ThemeError::UndefinedPaletteColor(name.to_string()))
		} else {
			value.parse()
		}
	}

	fn resolve_or(&self, value: Option<&str>, fallback: Color) -> Result<Color> {
		value.map_or(Ok(fallback), |v| self.resolve(v))
	}
}

impl RawTheme {
	fn resolve(self) -> Result<ThemeDef> {
		let palette = Palette::parse(&self.palette)?;
		let bg = palette.resolve(&self.ui.bg)?;
		let fg = palette.resolve(&self.ui.fg)?;
		let selection_bg = palette.resolve(&self.ui.selection_bg)?;

		let ui = UiColors {
			bg,
			fg,
			gutter_bg: palette.resolve_or(self.ui.gutter_bg.as_deref(), bg)?,
			gutter_fg: palette.resolve_or(self.ui.gutter_fg.as_deref(), fg)?,
			cursor: palette.resolve_or(self.ui.cursor.as_deref(), fg)?,
			selection_bg,
			active_line_bg: palette.resolve_or(self.ui.active_line_bg.as_deref(), bg)?,
			matching_bracket_bg: palette.resolve_or(self.ui.matching_bracket_bg.as_deref(), selection_bg)?,
			search_match_bg: palette.resolve_or(self.ui.search_match_bg.as_deref(), selection_bg)?,
		};

		let syntax = self
			.syntax
			.into_iter()
			.map(|(scope, raw)| {
				let style = SyntaxStyle {
					fg: raw.fg.as_deref().map(|v| palette.resolve(v)).transpose()?,
					bold: raw.bold,
					italic: raw.italic,
					underline: raw.underline,
				};
				Ok((scope, style))
			})
			.collect::<Result<_>>()?;

		Ok(ThemeDef {
			name: self.name,
			variant: self.variant,
			ui,
			syntax,
		})
	}
}
