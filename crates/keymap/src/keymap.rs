//! Ordered chord-to-command tables.

use crate::chord::{KeyChord, Platform};
use crate::command::Command;
use crate::parser::{ParseError, parse};

/// One chord bound to one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
	pub chord: KeyChord,
	pub command: Command,
}

/// Error raised while building a keymap from chord strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid chord '{chord}': {source}")]
pub struct KeymapError {
	pub chord: String,
	#[source]
	pub source: ParseError,
}

/// An ordered keymap capability.
///
/// Lookups scan in insertion order; when a chord is bound more than once the
/// earliest binding wins. The editing engine applies multiple keymaps the same
/// way: a keymap listed earlier shadows later ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keymap {
	platform: Platform,
	bindings: Vec<Binding>,
}

impl Keymap {
	pub fn new(platform: Platform) -> Self {
		Self {
			platform,
			bindings: Vec::new(),
		}
	}

	/// Builds a keymap from `(chord, command)` pairs.
	pub fn from_entries<'a>(
		platform: Platform,
		entries: impl IntoIterator<Item = (&'a str, Command)>,
	) -> Result<Self, KeymapError> {
		let mut keymap = Self::new(platform);
		for (chord, command) in entries {
			keymap.bind(chord, command)?;
		}
		Ok(keymap)
	}

	/// Appends a binding parsed against this keymap's platform.
	pub fn bind(&mut self, chord: &str, command: Command) -> Result<(), KeymapError> {
		let parsed = parse(chord, self.platform).map_err(|source| KeymapError {
			chord: chord.to_string(),
			source,
		})?;
		self.bindings.push(Binding {
			chord: parsed,
			command,
		});
		Ok(())
	}

	/// Returns the command bound to `chord`, honoring first-binding precedence.
	pub fn lookup(&self, chord: &KeyChord) -> Option<Command> {
		self.bindings.iter().find(|b| b.chord == *chord).map(|b| b.command)
	}

	/// Parses `chord` and looks it up.
	pub fn lookup_str(&self, chord: &str) -> Result<Option<Command>, ParseError> {
		Ok(self.lookup(&parse(chord, self.platform)?))
	}

	pub fn platform(&self) -> Platform {
		self.platform
	}

	pub fn bindings(&self) -> &[Binding] {
		&self.bindings
	}

	pub fn len(&self) -> usize {
		self.bindings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bindings.is_empty()
	}

	/// Appends all of `other`'s bindings after this keymap's own.
	pub fn extend(&mut self, other: &Keymap) {
		self.bindings.extend_from_slice(&other.bindings);
	}

	/// The editor's own bindings, installed ahead of the standard ones.
	pub fn custom(platform: Platform) -> Self {
		let mac = platform.is_mac();
		let mut entries = vec![
			("Mod-z", Command::Undo),
			("Mod-Shift-z", Command::Redo),
			("Mod-u", Command::UndoSelection),
			(if mac { "Mod-Shift-u" } else { "Alt-u" }, Command::RedoSelection),
		];
		if !mac {
			entries.push(("Ctrl-y", Command::Redo));
		}
		entries.extend([
			("Shift-Tab", Command::IndentSelection),
			("Mod-Alt-[", Command::FoldCode),
			("Mod-Alt-]", Command::UnfoldCode),
			("Shift-Mod-m", Command::OpenLintPanel),
		]);
		Self::from_builtin(platform, entries)
	}

	/// The standard bundles: indent-with-tab, bracket closing, default
	/// movement/editing, history, folding, and completion.
	pub fn standard(platform: Platform) -> Self {
		let mac = platform.is_mac();
		let mut entries = vec![
			("Tab", Command::IndentMore),
			("Shift-Tab", Command::IndentLess),
			("Backspace", Command::DeleteBracketPair),
			("ArrowLeft", Command::CursorCharLeft),
			("ArrowRight", Command::CursorCharRight),
			("ArrowUp", Command::CursorLineUp),
			("ArrowDown", Command::CursorLineDown),
			("Home", Command::CursorLineBoundaryBackward),
			("End", Command::CursorLineBoundaryForward),
			("Mod-Home", Command::CursorDocStart),
			("Mod-End", Command::CursorDocEnd),
			("Enter", Command::InsertNewlineAndIndent),
			("Mod-a", Command::SelectAll),
			("Alt-l", Command::SelectLine),
			("Backspace", Command::DeleteCharBackward),
			("Delete", Command::DeleteCharForward),
			("Mod-/", Command::ToggleComment),
			("Mod-z", Command::Undo),
			("Mod-u", Command::UndoSelection),
		];
		if mac {
			entries.extend([("Mod-Shift-z", Command::Redo), ("Mod-Shift-u", Command::RedoSelection)]);
		} else {
			entries.extend([("Mod-y", Command::Redo), ("Alt-u", Command::RedoSelection)]);
		}
		entries.extend([
			("Ctrl-Shift-[", Command::FoldCode),
			("Ctrl-Shift-]", Command::UnfoldCode),
			("Ctrl-Alt-[", Command::FoldAll),
			("Ctrl-Alt-]", Command::UnfoldAll),
			("Ctrl-Space", Command::StartCompletion),
			("Escape", Command::CloseCompletion),
			("ArrowDown", Command::MoveCompletionSelectionForward),
			("ArrowUp", Command::MoveCompletionSelectionBackward),
			("Enter", Command::AcceptCompletion),
		]);
		Self::from_builtin(platform, entries)
	}

	/// Builtin tables are static literals; a chord that fails to parse is
	/// logged and skipped.
	fn from_builtin(platform: Platform, entries: Vec<(&'static str, Command)>) -> Self {
		let mut keymap = Self::new(platform);
		for (text, command) in entries {
			match parse(text, platform) {
				Ok(chord) => keymap.bindings.push(Binding { chord, command }),
				Err(error) => tracing::warn!(chord = text, %command, %error, "keymap.builtin.skipped"),
			}
		}
		keymap
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	#[test]
	fn earliest_binding_wins() {
		let keymap = Keymap::from_entries(Platform::Other, [("Ctrl-y", Command::Redo), ("Ctrl-y", Command::Undo)]).unwrap();
		assert_eq!(keymap.lookup_str("Ctrl-y").unwrap(), Some(Command::Redo));
	}

	#[test]
	fn bind_reports_the_offending_chord() {
		let err = Keymap::from_entries(Platform::Other, [("Mod-", Command::Undo)]).unwrap_err();
		assert_eq!(err.chord, "Mod-");
		assert_eq!(err.source.position, 4);
	}

	#[rstest]
	#[case(Platform::Other, "Alt-u", Some(Command::RedoSelection))]
	#[case(Platform::Mac, "Alt-u", None)]
	#[case(Platform::Mac, "Mod-Shift-u", Some(Command::RedoSelection))]
	#[case(Platform::Other, "Ctrl-y", Some(Command::Redo))]
	#[case(Platform::Mac, "Ctrl-y", None)]
	#[case(Platform::Mac, "Meta-z", Some(Command::Undo))]
	#[case(Platform::Other, "Ctrl-Shift-m", Some(Command::OpenLintPanel))]
	fn custom_keymap_is_platform_specific(#[case] platform: Platform, #[case] chord: &str, #[case] expected: Option<Command>) {
		assert_eq!(Keymap::custom(platform).lookup_str(chord).unwrap(), expected);
	}

	#[test]
	fn builtin_tables_parse_completely() {
		for platform in [Platform::Mac, Platform::Other] {
			assert_eq!(Keymap::custom(platform).len(), if platform.is_mac() { 8 } else { 9 });
			assert_eq!(Keymap::standard(platform).len(), 30);
		}
	}

	#[test]
	fn unparsable_builtin_chord_is_skipped() {
		let keymap = Keymap::from_builtin(Platform::Other, vec![("Mod-", Command::Undo), ("Mod-y", Command::Redo)]);
		assert_eq!(keymap.len(), 1);
		assert_eq!(keymap.lookup_str("Ctrl-y").unwrap(), Some(Command::Redo));
	}

	#[test]
	fn custom_shadows_standard_when_chained() {
		let mut keymap = Keymap::custom(Platform::Other);
		keymap.extend(&Keymap::standard(Platform::Other));
		assert_eq!(keymap.lookup_str("Shift-Tab").unwrap(), Some(Command::IndentSelection));
		assert_eq!(keymap.lookup_str("Tab").unwrap(), Some(Command::IndentMore));
	}
}
