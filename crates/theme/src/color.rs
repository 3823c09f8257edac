//! Colors as written in theme files.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ThemeError};

/// An sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: u8,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 0xff }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self { r, g, b, a }
	}

	pub const fn is_opaque(self) -> bool {
		self.a == 0xff
	}
}

impl FromStr for Color {
	type Err = ThemeError;

	/// Parses `#RGB`, `#RRGGBB`, or `#RRGGBBAA`.
	fn from_str(value: &str) -> Result<Self> {
		let value = value.trim();
		let hex = value.strip_prefix('#').ok_or_else(|| ThemeError::InvalidColor(value.to_string()))?;
		parse_hex_color(hex)
	}
}

fn parse_hex_color(hex: &str) -> Result<Color> {
	let err = || ThemeError::InvalidColor(format!("#{hex}"));
	if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
		return Err(err());
	}
	let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());

	match hex.len() {
		3 => Ok(Color::rgb(
			channel(&hex[0..1].repeat(2))?,
			channel(&hex[1..2].repeat(2))?,
			channel(&hex[2..3].repeat(2))?,
		)),
		6 => Ok(Color::rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
		8 => Ok(Color::rgba(
			channel(&hex[0..2])?,
			channel(&hex[2..4])?,
			channel(&hex[4..6])?,
			channel(&hex[6..8])?,
		)),
		_ => Err(err()),
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
		if !self.is_opaque() {
			write!(f, "{:02x}", self.a)?;
		}
		Ok(())
	}
}
