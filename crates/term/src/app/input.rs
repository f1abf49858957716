//! Terminal key events to editor keys.

use ratatui::crossterm::event::{KeyCode as TermKey, KeyEvent, KeyModifiers};
use talewright_primitives::{Key, KeyCode, Modifiers};

/// US-layout digits for shifted symbols, so `ctrl-shift-7` matches when the
/// terminal reports the shifted character.
fn unshift_digit(c: char) -> Option<char> {
	let digit = match c {
		'!' => '1',
		'@' => '2',
		'#' => '3',
		'$' => '4',
		'%' => '5',
		'^' => '6',
		'&' => '7',
		'*' => '8',
		'(' => '9',
		')' => '0',
		_ => return None,
	};
	Some(digit)
}

/// Alt combination standing in for a shortcut that legacy terminals report
/// as some other key.
#[derive(Debug, Clone, Copy)]
pub struct Fallback {
	/// Alt combination in keymap syntax, for the help popup.
	pub keys: &'static str,
	/// Key pressed together with Alt.
	pub code: KeyCode,
	/// Shortcut it stands for.
	pub target: Key,
}

const fn fallback(keys: &'static str, code: KeyCode, target: Key) -> Fallback {
	Fallback { keys, code, target }
}

const CTRL_SHIFT: Modifiers = Modifiers::CTRL.shift();
const CTRL_ALT: Modifiers = Modifiers::CTRL.alt();

/// Without keyboard enhancement Ctrl+I is Tab, Ctrl+Shift+X is Ctrl+X,
/// Ctrl+Alt+M is Alt+Enter and Ctrl+Shift+Backspace is Backspace. These Alt
/// keys reach the shortcuts legacy reporting can lose.
pub static FALLBACKS: &[Fallback] = &[
	fallback("alt-i", KeyCode::Char('i'), Key::ctrl('i')),
	fallback("alt-1", KeyCode::Char('1'), Key::char('1').with_modifiers(CTRL_ALT)),
	fallback("alt-2", KeyCode::Char('2'), Key::char('2').with_modifiers(CTRL_ALT)),
	fallback("alt-3", KeyCode::Char('3'), Key::char('3').with_modifiers(CTRL_ALT)),
	fallback("alt-7", KeyCode::Char('7'), Key::char('7').with_modifiers(CTRL_SHIFT)),
	fallback("alt-8", KeyCode::Char('8'), Key::char('8').with_modifiers(CTRL_SHIFT)),
	fallback("alt-e", KeyCode::Char('e'), Key::char('e').with_modifiers(CTRL_SHIFT)),
	fallback("alt-m", KeyCode::Char('m'), Key::char('m').with_modifiers(CTRL_ALT)),
	fallback("alt-n", KeyCode::Char('n'), Key::char('n').with_modifiers(CTRL_ALT)),
	fallback("alt-x", KeyCode::Char('x'), Key::char('x').with_modifiers(CTRL_SHIFT)),
	fallback("alt-backspace", KeyCode::Backspace, Key::new(KeyCode::Backspace).with_modifiers(CTRL_SHIFT)),
	fallback("alt-/", KeyCode::Char('/'), Key::ctrl('/')),
];

/// The shortcut an Alt fallback key stands for.
pub fn fallback_target(key: Key) -> Option<Key> {
	if key.modifiers != Modifiers::ALT {
		return None;
	}
	FALLBACKS.iter().find(|fallback| fallback.code == key.code).map(|fallback| fallback.target)
}

/// Converts a terminal key event. Returns `None` for keys the editor has no
/// name for (media keys, bare modifiers).
///
/// `enhanced` tells whether the terminal disambiguates modified keys; the
/// legacy Ctrl+/ decoding only applies without it.
pub fn to_key(event: &KeyEvent, enhanced: bool) -> Option<Key> {
	let m = event.modifiers;
	let mut modifiers = Modifiers {
		ctrl: m.contains(KeyModifiers::CONTROL),
		alt: m.contains(KeyModifiers::ALT),
		shift: m.contains(KeyModifiers::SHIFT),
		cmd: m.contains(KeyModifiers::SUPER),
	};

	let code = match event.code {
		TermKey::Char(c) if modifiers.ctrl && modifiers.shift => KeyCode::Char(unshift_digit(c).unwrap_or(c)),
		// Legacy terminals send Ctrl+/ as 0x1f, which decodes as Ctrl+7.
		TermKey::Char('7') if !enhanced && modifiers.ctrl && !modifiers.alt => KeyCode::Char('/'),
		TermKey::Char(c) => {
			if !modifiers.ctrl && !modifiers.alt && !c.is_ascii_alphabetic() {
				modifiers.shift = false;
			}
			KeyCode::Char(c)
		}
		TermKey::Backspace => KeyCode::Backspace,
		TermKey::Enter => KeyCode::Enter,
		TermKey::Left => KeyCode::Left,
		TermKey::Right => KeyCode::Right,
		TermKey::Up => KeyCode::Up,
		TermKey::Down => KeyCode::Down,
		TermKey::Home => KeyCode::Home,
		TermKey::End => KeyCode::End,
		TermKey::PageUp => KeyCode::PageUp,
		TermKey::PageDown => KeyCode::PageDown,
		TermKey::Tab => KeyCode::Tab,
		TermKey::BackTab => KeyCode::BackTab,
		TermKey::Delete => KeyCode::Delete,
		TermKey::Insert => KeyCode::Insert,
		TermKey::F(n) => KeyCode::F(n),
		TermKey::Esc => KeyCode::Esc,
		_ => return None,
	};

	Some(Key { code, modifiers })
}
