//! Key chords and keymaps for the quill editor shell.
//!
//! Provides:
//! - Chord strings in the `Mod-Shift-z` style, with `Mod` resolved per [`Platform`]
//! - [`Command`] names the editing engine executes
//! - Ordered [`Keymap`] capabilities, including the two baseline keymaps

pub use chord::{KEY_SEP, Key, KeyChord, Modifiers, NamedKey, Platform};
pub use command::Command;
pub use keymap::{Binding, Keymap, KeymapError};
pub use parser::{ParseError, parse};

mod chord;
mod command;
mod keymap;
pub mod parser;
