use std::fmt;
use std::str::FromStr;

/// Separator between modifiers and the key in a combination (`ctrl-b`).
pub const KEY_SEP: char = '-';

/// Bit set of [`Modifier`] flags.
pub type Modifiers = u8;

/// A modifier key. Discriminants are bit flags combined into [`Modifiers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Modifier {
	/// Control.
	Ctrl = 0b0001,
	/// Alt / Option.
	Alt = 0b0010,
	/// Shift.
	Shift = 0b0100,
	/// Command / Super.
	Cmd = 0b1000,
}

impl Modifier {
	/// All modifiers in display order.
	pub const ALL: [Modifier; 4] = [Modifier::Ctrl, Modifier::Alt, Modifier::Shift, Modifier::Cmd];

	/// Returns the canonical lowercase name.
	pub fn name(self) -> &'static str {
		match self {
			Modifier::Ctrl => "ctrl",
			Modifier::Alt => "alt",
			Modifier::Shift => "shift",
			Modifier::Cmd => "cmd",
		}
	}
}

impl FromStr for Modifier {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"ctrl" => Ok(Modifier::Ctrl),
			"alt" => Ok(Modifier::Alt),
			"shift" => Ok(Modifier::Shift),
			"cmd" => Ok(Modifier::Cmd),
			_ => Err(()),
		}
	}
}

/// A key identifier without modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
	/// Shift+Tab.
	BackTab,
	/// Backspace.
	Backspace,
	/// A printable character.
	Char(char),
	/// Delete.
	Delete,
	/// Down arrow.
	Down,
	/// End.
	End,
	/// Enter / Return.
	Enter,
	/// Escape.
	Esc,
	/// Function key `F1`..`F35`.
	F(u8),
	/// Home.
	Home,
	/// Insert.
	Insert,
	/// Left arrow.
	Left,
	/// Page down.
	PageDown,
	/// Page up.
	PageUp,
	/// Right arrow.
	Right,
	/// Space bar.
	Space,
	/// Tab.
	Tab,
	/// Up arrow.
	Up,
}

impl FromStr for Key {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let key = match s {
			"backtab" => Key::BackTab,
			"backspace" => Key::Backspace,
			"del" | "delete" => Key::Delete,
			"down" => Key::Down,
			"end" => Key::End,
			"enter" => Key::Enter,
			"esc" => Key::Esc,
			"home" => Key::Home,
			"insert" => Key::Insert,
			"left" => Key::Left,
			"pagedown" => Key::PageDown,
			"pageup" => Key::PageUp,
			"right" => Key::Right,
			"space" => Key::Space,
			"tab" => Key::Tab,
			"up" => Key::Up,
			_ => return Err(()),
		};
		Ok(key)
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Key::BackTab => f.write_str("backtab"),
			Key::Backspace => f.write_str("backspace"),
			Key::Char(c) => write!(f, "{c}"),
			Key::Delete => f.write_str("del"),
			Key::Down => f.write_str("down"),
			Key::End => f.write_str("end"),
			Key::Enter => f.write_str("enter"),
			Key::Esc => f.write_str("esc"),
			Key::F(n) => write!(f, "f{n}"),
			Key::Home => f.write_str("home"),
			Key::Insert => f.write_str("insert"),
			Key::Left => f.write_str("left"),
			Key::PageDown => f.write_str("pagedown"),
			Key::PageUp => f.write_str("pageup"),
			Key::Right => f.write_str("right"),
			Key::Space => f.write_str("space"),
			Key::Tab => f.write_str("tab"),
			Key::Up => f.write_str("up"),
		}
	}
}

/// A key combination: a modifier bit set plus a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node {
	/// Modifier flags, see [`Modifier`].
	pub modifiers: Modifiers,
	/// The key pressed together with the modifiers.
	pub key: Key,
}

impl Node {
	/// Creates a node from a modifier bit set and a key.
	pub fn new(modifiers: Modifiers, key: Key) -> Self {
		Self { modifiers, key }
	}

	/// Returns true if `modifier` is part of this combination.
	pub fn has(&self, modifier: Modifier) -> bool {
		self.modifiers & modifier as u8 != 0
	}
}

impl From<Key> for Node {
	fn from(key: Key) -> Self {
		Self::new(0, key)
	}
}

impl fmt::Display for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for modifier in Modifier::ALL {
			if self.has(modifier) {
				write!(f, "{}{KEY_SEP}", modifier.name())?;
			}
		}
		write!(f, "{}", self.key)
	}
}
