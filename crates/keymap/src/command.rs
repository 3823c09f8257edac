//! Editor commands addressable from a keymap.
//!
//! Commands are names only. Executing them is the editing engine's job; the
//! shell never interprets a command itself.

use serde::Deserialize;
use strum::{Display, EnumString, IntoStaticStr};

/// A command a key chord can trigger.
///
/// String forms are camelCase (`undoSelection`) so that configuration files
/// can name them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, Deserialize)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum Command {
	Undo,
	Redo,
	UndoSelection,
	RedoSelection,
	IndentSelection,
	IndentMore,
	IndentLess,
	InsertNewlineAndIndent,
	InsertTab,
	DeleteCharBackward,
	DeleteCharForward,
	DeleteBracketPair,
	CursorCharLeft,
	CursorCharRight,
	CursorLineUp,
	CursorLineDown,
	CursorLineBoundaryBackward,
	CursorLineBoundaryForward,
	CursorDocStart,
	CursorDocEnd,
	SelectAll,
	SelectLine,
	ToggleComment,
	FoldCode,
	UnfoldCode,
	FoldAll,
	UnfoldAll,
	StartCompletion,
	CloseCompletion,
	AcceptCompletion,
	MoveCompletionSelectionForward,
	MoveCompletionSelectionBackward,
	OpenLintPanel,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn names_are_camel_case() {
		assert_eq!(Command::UndoSelection.to_string(), "undoSelection");
		assert_eq!("openLintPanel".parse::<Command>().unwrap(), Command::OpenLintPanel);
		assert!("open_lint_panel".parse::<Command>().is_err());
	}
}
