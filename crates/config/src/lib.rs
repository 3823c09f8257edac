//! Configuration for the quill editor shell.
//!
//! Configuration is written in TOML with kebab-case keys:
//!
//! ```toml
//! document = "console.log(42);\n"
//! language = "javascript"
//! dark = false
//! dark-theme = "one-dark"
//! platform = "auto"          # auto | mac | other
//! indent-unit = "    "
//! eager = ["javascript", "python"]
//! language-dir = "languages"
//! theme-files = ["themes/solarized.toml"]
//!
//! [keys]
//! "Mod-d" = "selectLine"
//! ```
//!
//! Files are parsed into a [`ConfigFile`], optionally layered with
//! [`ConfigFile::merge`], and validated into a [`ShellConfig`]. Validation
//! rejects unknown languages, themes, and commands up front; none of them is
//! replaced by a default.

pub mod error;
pub mod file;

use std::path::{Path, PathBuf};

use quill_keymap::{Command, Keymap, Platform};
use quill_language::LanguageId;
use quill_theme::{DEFAULT_DARK_THEME, ThemeCatalog, ThemeDef};

pub use error::{ConfigError, Result};
pub use file::{ConfigFile, PlatformChoice};

/// Indent unit used when none is configured.
pub const DEFAULT_INDENT_UNIT: &str = "    ";

/// Validated shell configuration.
#[derive(Debug, Clone)]
pub struct ShellConfig {
	pub document: String,
	pub language: LanguageId,
	pub dark: bool,
	pub dark_theme: String,
	pub platform: Platform,
	pub indent_unit: String,
	pub eager: Vec<LanguageId>,
	pub language_dir: Option<PathBuf>,
	/// Themes loaded from `theme-files`, in file order.
	pub themes: Vec<ThemeDef>,
	/// User bindings, consulted ahead of the builtin keymaps.
	pub keys: Keymap,
}

impl Default for ShellConfig {
	fn default() -> Self {
		let platform = Platform::current();
		Self {
			document: String::new(),
			language: LanguageId::Javascript,
			dark: false,
			dark_theme: DEFAULT_DARK_THEME.to_string(),
			platform,
			indent_unit: DEFAULT_INDENT_UNIT.to_string(),
			eager: vec![LanguageId::Javascript],
			language_dir: None,
			themes: Vec::new(),
			keys: Keymap::new(platform),
		}
	}
}

impl ShellConfig {
	/// Parses and validates a TOML string.
	pub fn parse(input: &str) -> Result<Self> {
		Self::from_file(ConfigFile::parse(input)?)
	}

	/// Loads and validates a single file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		Self::from_file(ConfigFile::load(path)?)
	}

	/// Loads every file in order, merging later files over earlier ones.
	pub fn load_layered<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Result<Self> {
		let mut merged = ConfigFile::default();
		for path in paths {
			merged.merge(ConfigFile::load(path)?);
		}
		Self::from_file(merged)
	}

	/// Validates a parsed file, filling unset values with defaults.
	pub fn from_file(file: ConfigFile) -> Result<Self> {
		let defaults = Self::default();
		let platform = file.platform.map_or(defaults.platform, PlatformChoice::resolve);

		let language = match file.language {
			Some(name) => LanguageId::parse_name(&name)?,
			None => defaults.language,
		};
		let eager = match file.eager {
			Some(names) => names
				.iter()
				.map(|name| LanguageId::parse_name(name))
				.collect::<std::result::Result<Vec<_>, _>>()?,
			None => defaults.eager,
		};

		let indent_unit = file.indent_unit.unwrap_or(defaults.indent_unit);
		if !is_valid_indent_unit(&indent_unit) {
			return Err(ConfigError::InvalidIndentUnit(indent_unit));
		}

		let themes = file
			.theme_files
			.iter()
			.map(|path| load_theme_file(path))
			.collect::<Result<Vec<_>>>()?;

		let mut keys = Keymap::new(platform);
		for (chord, name) in &file.keys {
			let command = name.parse::<Command>().map_err(|_| ConfigError::UnknownCommand {
				chord: chord.clone(),
				command: name.clone(),
			})?;
			keys.bind(chord, command)?;
		}

		let config = Self {
			document: file.document.unwrap_or(defaults.document),
			language,
			dark: file.dark.unwrap_or(defaults.dark),
			dark_theme: file.dark_theme.unwrap_or(defaults.dark_theme),
			platform,
			indent_unit,
			eager,
			language_dir: file.language_dir,
			themes,
			keys,
		};

		let catalog = config.theme_catalog()?;
		if !catalog.contains(&config.dark_theme) {
			return Err(ConfigError::UnknownTheme {
				suggestion: catalog.suggest(&config.dark_theme),
				name: config.dark_theme,
			});
		}

		tracing::debug!(
			language = %config.language,
			eager = config.eager.len(),
			themes = config.themes.len(),
			keys = config.keys.len(),
			"config.loaded"
		);
		Ok(config)
	}

	/// Builtin themes plus the configured theme files. A file theme replaces
	/// a builtin of the same name.
	pub fn theme_catalog(&self) -> Result<ThemeCatalog> {
		let mut catalog = ThemeCatalog::builtin().map_err(ConfigError::BuiltinThemes)?;
		for theme in &self.themes {
			catalog.register(theme.clone());
		}
		Ok(catalog)
	}
}

fn is_valid_indent_unit(unit: &str) -> bool {
	unit == "\t" || (!unit.is_empty() && unit.chars().all(|c| c == ' '))
}

/// Loads a standalone theme file.
pub fn load_theme_file(path: impl AsRef<Path>) -> Result<ThemeDef> {
	let path = path.as_ref();
	let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
		path: path.to_path_buf(),
		error: e,
	})?;
	ThemeDef::parse(&content).map_err(|source| ConfigError::Theme {
		path: path.to_path_buf(),
		source,
	})
}

#[cfg(test)]
mod tests;
