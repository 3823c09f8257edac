//! # Parser
//!
//! Parses plain-text chord definitions such as `"Mod-Shift-z"` or `"Mod-Alt-["`
//! into platform-resolved [`KeyChord`]s.
//!
//! ## Supported Syntax
//!
//! ```text
//! chord     = (modifier "-")* key
//! modifier  = "mod" | "ctrl" | "control" | "c" | "alt" | "a"
//!           | "shift" | "s" | "meta" | "cmd" | "m"
//! key       = fn-key | named-key | char
//! fn-key    = ("f" | "F") digit digit?
//! named-key = "Tab" | "Enter" | "Escape" | "ArrowUp" | ...
//! char      = any single character (including "-")
//! ```
//!
//! Modifier and named-key names are case-insensitive. `Mod` is resolved against
//! the [`Platform`] handed to [`parse`].

use std::str::FromStr;

use strum::EnumString;
use thiserror::Error;

use crate::chord::{KEY_SEP, Key, KeyChord, Modifiers, NamedKey, Platform};

#[cfg(test)]
mod tests;

/// Function pointer type for parser combinators.
type ParserFn<T> = fn(&mut Parser) -> Result<Option<T>, ParseError>;

/// Represents an error that occurred during parsing.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
#[error("parse error at position {position}: {message}")]
pub struct ParseError {
	/// Human-readable description of the parse error.
	pub message: String,
	/// Byte offset in the input where the error occurred.
	pub position: usize,
}

/// Modifier spellings accepted in chord strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
enum ModifierName {
	Mod,
	#[strum(serialize = "ctrl", serialize = "control", serialize = "c")]
	Ctrl,
	#[strum(serialize = "alt", serialize = "a")]
	Alt,
	#[strum(serialize = "shift", serialize = "s")]
	Shift,
	#[strum(serialize = "meta", serialize = "cmd", serialize = "m")]
	Meta,
}

impl ModifierName {
	fn resolve(self, platform: Platform) -> Modifiers {
		match self {
			Self::Mod => platform.primary_modifier(),
			Self::Ctrl => Modifiers::CTRL,
			Self::Alt => Modifiers::ALT,
			Self::Shift => Modifiers::SHIFT,
			Self::Meta => Modifiers::META,
		}
	}
}

/// Maintains the parser's state for recursive descent parsing.
struct Parser<'a> {
	/// The input string being parsed.
	input: &'a str,
	/// Current byte position in the input.
	position: usize,
	/// Platform used to resolve `Mod`.
	platform: Platform,
}

impl<'a> Parser<'a> {
	fn new(input: &'a str, platform: Platform) -> Self {
		Self {
			input,
			position: 0,
			platform,
		}
	}

	/// Peeks at the next character without consuming it.
	fn peek(&self) -> Option<char> {
		self.input.chars().next()
	}

	/// Peeks at the character `n` positions ahead without consuming it.
	fn peek_at(&self, n: usize) -> Option<char> {
		self.input.chars().nth(n)
	}

	/// Consumes and returns the next character, advancing the parser.
	fn next(&mut self) -> Option<char> {
		let ch = self.peek()?;
		self.position += ch.len_utf8();
		self.input = &self.input[ch.len_utf8()..];
		Some(ch)
	}

	fn is_end(&self) -> bool {
		self.input.is_empty()
	}

	/// Consumes the next character if it matches the expected one.
	fn take(&mut self, expected: char) -> Result<(), ParseError> {
		match self.next() {
			Some(ch) if ch == expected => Ok(()),
			Some(ch) => Err(ParseError {
				message: format!("expected '{expected}', found '{ch}'"),
				position: self.position - ch.len_utf8(),
			}),
			None => Err(ParseError {
				message: format!("expected '{expected}', found end of input"),
				position: self.position,
			}),
		}
	}

	/// Attempts to parse with a fallback: restores state if parsing fails.
	fn try_parse<T, F>(&mut self, f: F) -> Result<Option<T>, ParseError>
	where
		F: FnOnce(&mut Parser<'a>) -> Result<Option<T>, ParseError>,
	{
		let snapshot = (self.input, self.position);
		match f(self) {
			Ok(Some(val)) => Ok(Some(val)),
			Ok(None) | Err(_) => {
				self.input = snapshot.0;
				self.position = snapshot.1;
				Ok(None)
			}
		}
	}

	/// Consumes and returns characters that satisfy a predicate.
	fn take_while<F>(&mut self, predicate: F) -> String
	where
		F: Fn(char) -> bool,
	{
		let mut result = String::new();
		while let Some(ch) = self.peek() {
			if !predicate(ch) {
				break;
			}
			result.push(ch);
			self.next();
		}
		result
	}

	/// Tries multiple parsers in sequence, returning the result of the first successful one.
	fn alt<T>(&mut self, parsers: &[ParserFn<T>]) -> Result<Option<T>, ParseError> {
		for p in parsers {
			if let Some(value) = p(self)? {
				return Ok(Some(value));
			}
		}
		Ok(None)
	}

	fn error(&self, message: String) -> ParseError {
		ParseError {
			message,
			position: self.position,
		}
	}
}

/// Parses a single chord expression into a [`KeyChord`].
///
/// # Errors
///
/// Returns a [`ParseError`] if the input does not match the chord grammar.
///
/// # Examples
///
/// ```
/// use quill_keymap::{Key, KeyChord, Modifiers, Platform, parse};
///
/// let chord = parse("Mod-Shift-z", Platform::Other).unwrap();
/// assert_eq!(chord, KeyChord::new(Modifiers::CTRL | Modifiers::SHIFT, Key::Char('z')));
/// ```
pub fn parse(s: &str, platform: Platform) -> Result<KeyChord, ParseError> {
	let mut parser = Parser::new(s, platform);
	let chord = parse_chord(&mut parser)?;

	if let Some(ch) = parser.peek() {
		return Err(parser.error(format!("expected end of input, found: '{ch}'")));
	}

	Ok(chord)
}

/// Grammar: `chord = (modifier "-")* key`
fn parse_chord(parser: &mut Parser) -> Result<KeyChord, ParseError> {
	if parser.is_end() {
		return Err(parser.error("empty chord".to_string()));
	}

	let mut modifiers = Modifiers::empty();
	while let Some(modifier) = try_parse_modifier(parser)? {
		modifiers |= modifier;
	}

	let key = parse_key(parser)?;
	Ok(KeyChord::normalized(modifiers, key))
}

/// Attempts to parse a single modifier, followed by a `-`.
fn try_parse_modifier(parser: &mut Parser) -> Result<Option<Modifiers>, ParseError> {
	parser.try_parse(|p| {
		let name = p.take_while(|ch| ch.is_ascii_alphabetic());
		let Ok(modifier) = name.parse::<ModifierName>() else {
			return Ok(None);
		};

		p.take(KEY_SEP)?;
		Ok(Some(modifier.resolve(p.platform)))
	})
}

fn parse_key(parser: &mut Parser) -> Result<Key, ParseError> {
	match parser.alt(&[try_parse_fn_key, try_parse_named_key, try_parse_char])? {
		Some(key) => Ok(key),
		None => Err(parser.error("expected a valid key".to_string())),
	}
}

/// Attempts to parse a function key (`F1` to `F24`).
///
/// Once `f` followed by a digit is seen, the number must be in range or the
/// whole chord is rejected.
fn try_parse_fn_key(parser: &mut Parser) -> Result<Option<Key>, ParseError> {
	if !matches!(parser.peek(), Some('f' | 'F')) {
		return Ok(None);
	}

	if !matches!(parser.peek_at(1), Some(ch) if ch.is_ascii_digit()) {
		return Ok(None);
	}

	parser.next();
	let num = parser.take_while(|ch| ch.is_ascii_digit());

	match num.parse::<u8>() {
		Ok(n) if (1..=24).contains(&n) => Ok(Some(Key::F(n))),
		_ => Err(parser.error("invalid function key number (must be 1-24)".to_string())),
	}
}

fn try_parse_named_key(parser: &mut Parser) -> Result<Option<Key>, ParseError> {
	parser.try_parse(|p| {
		let name = p.take_while(|ch| ch.is_ascii_alphabetic());
		if name.len() < 2 {
			return Ok(None);
		}

		Ok(name.parse::<NamedKey>().ok().map(Key::Named))
	})
}

fn try_parse_char(parser: &mut Parser) -> Result<Option<Key>, ParseError> {
	Ok(parser.next().map(Key::Char))
}

impl FromStr for KeyChord {
	type Err = ParseError;

	/// Parses with [`Platform::current`].
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse(s, Platform::current())
	}
}
