use pretty_assertions::assert_eq;
use quill_keymap::{Command, Platform};
use quill_language::LanguageId;

use super::*;

const PAPER_THEME: &str = r##"
name = "paper"
variant = "light"

[ui]
bg = "#ffffff"
fg = "#222222"
selection-bg = "#cce0ff"
"##;

#[test]
fn empty_file_yields_defaults() {
	let config = ShellConfig::parse("").unwrap();
	assert_eq!(config.document, "");
	assert_eq!(config.language, LanguageId::Javascript);
	assert!(!config.dark);
	assert_eq!(config.dark_theme, DEFAULT_DARK_THEME);
	assert_eq!(config.indent_unit, DEFAULT_INDENT_UNIT);
	assert_eq!(config.platform, Platform::current());
	assert!(config.keys.is_empty());
}

#[test]
fn full_file_is_validated_into_typed_values() {
	let config = ShellConfig::parse(
		r#"
		document = "console.log(42);\n"
		language = "rust"
		dark = true
		platform = "mac"
		indent-unit = "\t"
		eager = ["rust", "json"]

		[keys]
		"Mod-d" = "selectLine"
		"#,
	)
	.unwrap();

	assert_eq!(config.document, "console.log(42);\n");
	assert_eq!(config.language, LanguageId::Rust);
	assert!(config.dark);
	assert_eq!(config.platform, Platform::Mac);
	assert_eq!(config.indent_unit, "\t");
	assert_eq!(config.eager, vec![LanguageId::Rust, LanguageId::Json]);
	assert_eq!(config.keys.lookup_str("Cmd-d").unwrap(), Some(Command::SelectLine));
}

#[test]
fn unknown_language_is_rejected_with_suggestion() {
	let err = ShellConfig::parse("language = \"pyton\"").unwrap_err();
	assert_eq!(err.to_string(), "unknown language 'pyton' (did you mean 'python'?)");

	let err = ShellConfig::parse("eager = [\"javascript\", \"cobol\"]").unwrap_err();
	assert!(matches!(err, ConfigError::UnknownLanguage(ref e) if e.name == "cobol"));
}

#[test]
fn unknown_dark_theme_is_rejected() {
	let err = ShellConfig::parse("dark-theme = \"one-drak\"").unwrap_err();
	assert!(matches!(
		err,
		ConfigError::UnknownTheme { ref name, suggestion: Some(ref s) } if name == "one-drak" && s == "one-dark"
	));
}

#[test]
fn key_overrides_need_known_commands_and_valid_chords() {
	let err = ShellConfig::parse("[keys]\n\"Mod-d\" = \"explode\"").unwrap_err();
	assert!(matches!(err, ConfigError::UnknownCommand { ref command, .. } if command == "explode"));

	let err = ShellConfig::parse("[keys]\n\"Hyper-d\" = \"undo\"").unwrap_err();
	assert!(matches!(err, ConfigError::InvalidChord(ref e) if e.chord == "Hyper-d"));
}

#[test]
fn indent_unit_must_be_spaces_or_a_tab() {
	for bad in ["", "\t\t", " \t", "ab"] {
		let input = format!("indent-unit = {bad:?}");
		assert!(
			matches!(ShellConfig::parse(&input), Err(ConfigError::InvalidIndentUnit(_))),
			"{bad:?} should be rejected"
		);
	}
	assert_eq!(ShellConfig::parse("indent-unit = \"  \"").unwrap().indent_unit, "  ");
}

#[test]
fn theme_files_extend_the_catalog() {
	let dir = tempfile::tempdir().unwrap();
	std::fs::write(dir.path().join("paper.toml"), PAPER_THEME).unwrap();
	let path = dir.path().join("quill.toml");
	std::fs::write(&path, "dark-theme = \"paper\"\ntheme-files = [\"paper.toml\"]\n").unwrap();

	let config = ShellConfig::load(&path).unwrap();
	assert_eq!(config.dark_theme, "paper");
	let catalog = config.theme_catalog().unwrap();
	assert!(catalog.contains("paper"));
	assert!(catalog.contains(DEFAULT_DARK_THEME));
}

#[test]
fn broken_theme_file_names_its_path() {
	let dir = tempfile::tempdir().unwrap();
	let theme = dir.path().join("broken.toml");
	std::fs::write(&theme, "name = \"broken\"\n").unwrap();
	let path = dir.path().join("quill.toml");
	std::fs::write(&path, "theme-files = [\"broken.toml\"]\n").unwrap();

	let err = ShellConfig::load(&path).unwrap_err();
	assert!(matches!(err, ConfigError::Theme { ref path, .. } if *path == theme));
}

#[test]
fn layered_files_merge_in_order() {
	let dir = tempfile::tempdir().unwrap();
	let system = dir.path().join("system.toml");
	let user = dir.path().join("user.toml");
	std::fs::write(&system, "language = \"python\"\ndark = true\n").unwrap();
	std::fs::write(&user, "dark = false\n").unwrap();

	let config = ShellConfig::load_layered([&system, &user]).unwrap();
	assert_eq!(config.language, LanguageId::Python);
	assert!(!config.dark);
}
