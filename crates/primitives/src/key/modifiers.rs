//! Key modifier types (Ctrl, Alt, Shift, Cmd).

use talewright_keymap_parser::Modifier;

/// Key modifiers held during a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
	/// Whether Ctrl is held.
	pub ctrl: bool,
	/// Whether Alt / Option is held.
	pub alt: bool,
	/// Whether Shift is held.
	pub shift: bool,
	/// Whether Cmd / Super is held.
	pub cmd: bool,
}

impl Modifiers {
	/// No modifiers pressed.
	pub const NONE: Self = Self {
		ctrl: false,
		alt: false,
		shift: false,
		cmd: false,
	};

	/// Only Ctrl pressed.
	pub const CTRL: Self = Self { ctrl: true, ..Self::NONE };

	/// Only Alt pressed.
	pub const ALT: Self = Self { alt: true, ..Self::NONE };

	/// Only Shift pressed.
	pub const SHIFT: Self = Self { shift: true, ..Self::NONE };

	/// Only Cmd pressed.
	pub const CMD: Self = Self { cmd: true, ..Self::NONE };

	pub const fn ctrl(self) -> Self {
		Self { ctrl: true, ..self }
	}

	pub const fn alt(self) -> Self {
		Self { alt: true, ..self }
	}

	pub const fn shift(self) -> Self {
		Self { shift: true, ..self }
	}

	pub const fn cmd(self) -> Self {
		Self { cmd: true, ..self }
	}

	/// Returns true if no modifiers are set.
	pub fn is_empty(self) -> bool {
		!self.ctrl && !self.alt && !self.shift && !self.cmd
	}

	/// Returns true if Ctrl or Cmd is held, the "command" modifier on either platform.
	pub fn command(self) -> bool {
		self.ctrl || self.cmd
	}

	/// Packs the flags into the keymap parser's bit set.
	pub fn bits(self) -> u8 {
		let mut bits = 0;
		if self.ctrl {
			bits |= Modifier::Ctrl as u8;
		}
		if self.alt {
			bits |= Modifier::Alt as u8;
		}
		if self.shift {
			bits |= Modifier::Shift as u8;
		}
		if self.cmd {
			bits |= Modifier::Cmd as u8;
		}
		bits
	}
}
