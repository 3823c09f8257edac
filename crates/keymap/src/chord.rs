//! Key chord representation.
//!
//! A [`KeyChord`] is a set of held modifiers plus a single key. Chords are
//! platform-resolved: the portable `Mod` modifier never survives parsing, it
//! becomes [`Modifiers::META`] on macOS and [`Modifiers::CTRL`] elsewhere.

use std::fmt;

use bitflags::bitflags;
use serde::Deserialize;
use strum::{Display, EnumString, IntoStaticStr};

/// Separator between chord components (`Ctrl-z`).
pub const KEY_SEP: char = '-';

bitflags! {
	/// Modifier keys held while pressing a chord's key.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct Modifiers: u8 {
		const CTRL = 1 << 0;
		const ALT = 1 << 1;
		const SHIFT = 1 << 2;
		const META = 1 << 3;
	}
}

/// Target platform for `Mod` resolution and platform-specific bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
	/// macOS: `Mod` is the command key.
	Mac,
	/// Everything else: `Mod` is control.
	#[default]
	Other,
}

impl Platform {
	/// Platform of the running binary.
	pub const fn current() -> Self {
		if cfg!(target_os = "macos") { Self::Mac } else { Self::Other }
	}

	pub const fn is_mac(self) -> bool {
		matches!(self, Self::Mac)
	}

	/// Concrete modifier that `Mod` stands for on this platform.
	pub const fn primary_modifier(self) -> Modifiers {
		match self {
			Self::Mac => Modifiers::META,
			Self::Other => Modifiers::CTRL,
		}
	}
}

/// Non-character keys addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum NamedKey {
	Tab,
	Enter,
	#[strum(to_string = "Escape", serialize = "Esc")]
	Escape,
	Backspace,
	Delete,
	Insert,
	Space,
	Home,
	End,
	PageUp,
	PageDown,
	ArrowUp,
	ArrowDown,
	ArrowLeft,
	ArrowRight,
}

/// The non-modifier part of a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
	/// A printable character. ASCII letters are stored lowercase.
	Char(char),
	/// A named key such as `Tab` or `ArrowUp`.
	Named(NamedKey),
	/// A function key, `F1` through `F24`.
	F(u8),
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Char(ch) => write!(f, "{ch}"),
			Self::Named(named) => write!(f, "{named}"),
			Self::F(n) => write!(f, "F{n}"),
		}
	}
}

/// A resolved key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
	pub modifiers: Modifiers,
	pub key: Key,
}

impl KeyChord {
	pub const fn new(modifiers: Modifiers, key: Key) -> Self {
		Self { modifiers, key }
	}

	/// Builds a chord, folding an uppercase ASCII letter into `Shift` + lowercase.
	pub fn normalized(mut modifiers: Modifiers, key: Key) -> Self {
		let key = match key {
			Key::Char(ch) if ch.is_ascii_uppercase() => {
				modifiers |= Modifiers::SHIFT;
				Key::Char(ch.to_ascii_lowercase())
			}
			other => other,
		};
		Self { modifiers, key }
	}
}

impl From<Key> for KeyChord {
	fn from(key: Key) -> Self {
		Self::normalized(Modifiers::empty(), key)
	}
}

impl fmt::Display for KeyChord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (flag, name) in [
			(Modifiers::CTRL, "Ctrl"),
			(Modifiers::ALT, "Alt"),
			(Modifiers::SHIFT, "Shift"),
			(Modifiers::META, "Meta"),
		] {
			if self.modifiers.contains(flag) {
				write!(f, "{name}{KEY_SEP}")?;
			}
		}
		write!(f, "{}", self.key)
	}
}
