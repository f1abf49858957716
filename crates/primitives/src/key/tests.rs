use talewright_keymap_parser::parse;

use super::*;

#[test]
fn node_matches_parser_for_common_combinations() {
	let cases: Vec<(&str, Key)> = vec![
		("b", Key::char('b')),
		("ctrl-b", Key::ctrl('b')),
		("ctrl-alt-1", Key::char('1').with_modifiers(Modifiers::NONE.ctrl().alt())),
		("ctrl-shift-e", Key::char('e').with_modifiers(Modifiers::NONE.ctrl().shift())),
		("tab", Key::new(KeyCode::Tab)),
		("space", Key::char(' ')),
		("ctrl-shift-backspace", Key::new(KeyCode::Backspace).with_modifiers(Modifiers::NONE.ctrl().shift())),
	];

	for (input, key) in cases {
		assert_eq!(key.to_node(), parse(input).unwrap(), "mismatch for {input}");
	}
}

#[test]
fn cmd_folds_into_ctrl() {
	let key = Key::char('s').with_modifiers(Modifiers::CMD);
	assert_eq!(key.to_node(), parse("ctrl-s").unwrap());
}

#[test]
fn uppercase_letter_implies_shift() {
	let key = Key::char('E').with_modifiers(Modifiers::CTRL);
	assert_eq!(key.to_node(), parse("ctrl-shift-e").unwrap());

	let key = Key::char('E').with_modifiers(Modifiers::NONE.ctrl().shift());
	assert_eq!(key.to_node(), parse("ctrl-shift-e").unwrap());
}

#[test]
fn typed_char_ignores_command_keys() {
	assert_eq!(Key::char('a').typed_char(), Some('a'));
	assert_eq!(Key::char('A').with_modifiers(Modifiers::SHIFT).typed_char(), Some('A'));
	assert_eq!(Key::ctrl('a').typed_char(), None);
	assert_eq!(Key::new(KeyCode::Space).typed_char(), Some(' '));
	assert_eq!(Key::new(KeyCode::Enter).typed_char(), None);
}

#[test]
fn display_uses_keymap_syntax() {
	let key = Key::char('7').with_modifiers(Modifiers::NONE.ctrl().shift());
	assert_eq!(key.to_string(), "ctrl-shift-7");
}
