//! The ordered capability list handed to the editing engine.
//!
//! The list is a fixed run of [`Baseline`] capabilities followed by the two
//! reconfigurable [`Slot`]s. Only slots change after mount.

use quill_keymap::{Keymap, Platform};
use quill_language::{LanguageCapability, LanguageId};
use quill_theme::ThemeCapability;
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

/// Fixed capabilities, in installation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Baseline {
	Autocompletion,
	LineNumbers,
	ActiveLineGutter,
	SpecialChars,
	History,
	FoldGutter,
	DrawSelection,
	IndentUnit,
	DefaultHighlight,
	MultipleSelections,
	IndentOnInput,
	BracketMatching,
	CloseBrackets,
	RectangularSelection,
	CrosshairCursor,
	ActiveLine,
	SelectionMatches,
	LintPanel,
	CustomKeymap,
	StandardKeymap,
}

/// A reconfigurable position in the capability list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Slot {
	Language,
	Theme,
}

/// Addresses one entry of the capability list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
	Baseline(Baseline),
	Slot(Slot),
}

/// The value a slot holds.
#[derive(Debug, Clone)]
pub enum SlotValue {
	Language(LanguageCapability),
	Theme(ThemeCapability),
}

impl SlotValue {
	pub fn slot(&self) -> Slot {
		match self {
			Self::Language(_) => Slot::Language,
			Self::Theme(_) => Slot::Theme,
		}
	}

	pub fn language(&self) -> Option<LanguageId> {
		match self {
			Self::Language(cap) => Some(cap.id()),
			Self::Theme(_) => None,
		}
	}
}

/// Payload carried by a baseline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaselineConfig {
	Enabled,
	IndentUnit(String),
	Keymap(Keymap),
}

/// One entry of the capability list.
#[derive(Debug, Clone)]
pub enum Extension {
	Baseline { kind: Baseline, config: BaselineConfig },
	Slot(SlotValue),
}

impl Extension {
	pub fn target(&self) -> Target {
		match self {
			Self::Baseline { kind, .. } => Target::Baseline(*kind),
			Self::Slot(value) => Target::Slot(value.slot()),
		}
	}
}

/// Settings for the configurable baseline entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaselineOptions {
	pub indent_unit: String,
	/// Consulted ahead of `standard_keymap`.
	pub custom_keymap: Keymap,
	pub standard_keymap: Keymap,
}

impl BaselineOptions {
	/// Four-space indent and the builtin keymaps for `platform`.
	pub fn for_platform(platform: Platform) -> Self {
		Self {
			indent_unit: quill_config::DEFAULT_INDENT_UNIT.to_string(),
			custom_keymap: Keymap::custom(platform),
			standard_keymap: Keymap::standard(platform),
		}
	}

	/// Builds the baseline run of the capability list.
	pub fn extensions(&self) -> Vec<Extension> {
		Baseline::iter()
			.map(|kind| {
				let config = match kind {
					Baseline::IndentUnit => BaselineConfig::IndentUnit(self.indent_unit.clone()),
					Baseline::CustomKeymap => BaselineConfig::Keymap(self.custom_keymap.clone()),
					Baseline::StandardKeymap => BaselineConfig::Keymap(self.standard_keymap.clone()),
					_ => BaselineConfig::Enabled,
				};
				Extension::Baseline { kind, config }
			})
			.collect()
	}
}

impl Default for BaselineOptions {
	fn default() -> Self {
		Self::for_platform(Platform::current())
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use quill_keymap::Command;

	use super::*;

	#[test]
	fn baseline_order_ends_with_the_keymaps() {
		let extensions = BaselineOptions::for_platform(Platform::Other).extensions();
		assert_eq!(extensions.len(), 20);
		assert_eq!(extensions[0].target(), Target::Baseline(Baseline::Autocompletion));
		assert_eq!(extensions[18].target(), Target::Baseline(Baseline::CustomKeymap));
		assert_eq!(extensions[19].target(), Target::Baseline(Baseline::StandardKeymap));
	}

	#[test]
	fn configurable_entries_carry_their_payload() {
		let mut options = BaselineOptions::for_platform(Platform::Mac);
		options.indent_unit = "\t".to_string();
		let extensions = options.extensions();

		let indent = extensions.iter().find(|e| e.target() == Target::Baseline(Baseline::IndentUnit)).unwrap();
		assert!(matches!(indent, Extension::Baseline { config: BaselineConfig::IndentUnit(unit), .. } if unit == "\t"));

		let Some(Extension::Baseline {
			config: BaselineConfig::Keymap(custom),
			..
		}) = extensions.get(18)
		else {
			panic!("custom keymap missing");
		};
		assert_eq!(custom.lookup_str("Mod-Shift-u").unwrap(), Some(Command::RedoSelection));
	}

	#[test]
	fn baseline_names_are_kebab_case() {
		assert_eq!(Baseline::ActiveLineGutter.to_string(), "active-line-gutter");
		assert_eq!(Slot::Theme.to_string(), "theme");
	}
}
