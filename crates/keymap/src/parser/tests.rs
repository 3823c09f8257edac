use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

fn chord(modifiers: Modifiers, key: Key) -> KeyChord {
	KeyChord::new(modifiers, key)
}

#[rstest]
#[case("z", chord(Modifiers::empty(), Key::Char('z')))]
#[case("Mod-z", chord(Modifiers::CTRL, Key::Char('z')))]
#[case("Mod-Shift-z", chord(Modifiers::CTRL | Modifiers::SHIFT, Key::Char('z')))]
#[case("Shift-Mod-m", chord(Modifiers::CTRL | Modifiers::SHIFT, Key::Char('m')))]
#[case("Mod-Alt-[", chord(Modifiers::CTRL | Modifiers::ALT, Key::Char('[')))]
#[case("Shift-Tab", chord(Modifiers::SHIFT, Key::Named(NamedKey::Tab)))]
#[case("Ctrl-Space", chord(Modifiers::CTRL, Key::Named(NamedKey::Space)))]
#[case("Alt-u", chord(Modifiers::ALT, Key::Char('u')))]
#[case("c-a", chord(Modifiers::CTRL, Key::Char('a')))]
#[case("Ctrl--", chord(Modifiers::CTRL, Key::Char('-')))]
#[case("F5", chord(Modifiers::empty(), Key::F(5)))]
#[case("esc", chord(Modifiers::empty(), Key::Named(NamedKey::Escape)))]
fn parses_chords_on_other_platforms(#[case] input: &str, #[case] expected: KeyChord) {
	assert_eq!(parse(input, Platform::Other).unwrap(), expected);
}

#[test]
fn mod_resolves_to_meta_on_mac() {
	assert_eq!(
		parse("Mod-Shift-u", Platform::Mac).unwrap(),
		chord(Modifiers::META | Modifiers::SHIFT, Key::Char('u'))
	);
	assert_eq!(parse("Cmd-s", Platform::Other).unwrap(), chord(Modifiers::META, Key::Char('s')));
}

#[test]
fn single_letter_modifier_alias_is_still_a_key() {
	assert_eq!(parse("a", Platform::Other).unwrap(), chord(Modifiers::empty(), Key::Char('a')));
	assert_eq!(parse("m", Platform::Other).unwrap(), chord(Modifiers::empty(), Key::Char('m')));
}

#[test]
fn uppercase_char_implies_shift() {
	assert_eq!(parse("Mod-Z", Platform::Other).unwrap(), parse("Mod-Shift-z", Platform::Other).unwrap());
}

#[rstest]
#[case("", 0)]
#[case("Ctrl-", 5)]
#[case("Mod-ab", 5)]
#[case("F99", 3)]
fn rejects_malformed_chords(#[case] input: &str, #[case] position: usize) {
	let err = parse(input, Platform::Other).unwrap_err();
	assert_eq!(err.position, position, "{err}");
}
