//! Key event representation shared by the editor and its frontends.

use std::fmt;

pub use talewright_keymap_parser::Key as KeyCode;
use talewright_keymap_parser::Node;

mod modifiers;

pub use modifiers::Modifiers;

#[cfg(test)]
mod tests;

/// A key with its modifiers, as delivered by a frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
	pub code: KeyCode,
	pub modifiers: Modifiers,
}

impl Key {
	/// A key code with no modifiers.
	pub const fn new(code: KeyCode) -> Self {
		Self {
			code,
			modifiers: Modifiers::NONE,
		}
	}

	/// A character key with no modifiers.
	pub const fn char(c: char) -> Self {
		Self::new(KeyCode::Char(c))
	}

	/// A character key with Ctrl held.
	pub const fn ctrl(c: char) -> Self {
		Self {
			code: KeyCode::Char(c),
			modifiers: Modifiers::CTRL,
		}
	}

	/// Returns the key with `modifiers` replacing the current ones.
	pub const fn with_modifiers(self, modifiers: Modifiers) -> Self {
		Self { modifiers, ..self }
	}

	/// Canonical form used for shortcut matching.
	///
	/// Cmd folds into Ctrl, and a shifted letter reported in upper case is
	/// lowered so `ctrl-shift-e` matches whichever form the terminal sends.
	pub fn normalize(self) -> Self {
		let mut modifiers = self.modifiers;
		if modifiers.cmd {
			modifiers.cmd = false;
			modifiers.ctrl = true;
		}

		let code = match self.code {
			KeyCode::Char(c) if c.is_ascii_uppercase() => {
				modifiers.shift = true;
				KeyCode::Char(c.to_ascii_lowercase())
			}
			KeyCode::Char(' ') => KeyCode::Space,
			other => other,
		};

		Self { code, modifiers }
	}

	/// Converts the key into a keymap [`Node`] after normalization.
	pub fn to_node(self) -> Node {
		let key = self.normalize();
		Node::new(key.modifiers.bits(), key.code)
	}

	/// Returns the printable character this key types, if any.
	///
	/// Keys held with Ctrl, Alt or Cmd never type text.
	pub fn typed_char(&self) -> Option<char> {
		if self.modifiers.ctrl || self.modifiers.alt || self.modifiers.cmd {
			return None;
		}
		match self.code {
			KeyCode::Char(c) if !c.is_control() => Some(c),
			KeyCode::Space => Some(' '),
			_ => None,
		}
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", Node::new(self.modifiers.bits(), self.code))
	}
}
