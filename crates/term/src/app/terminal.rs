//! Terminal setup and teardown.

use std::io;

use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags};
use ratatui::crossterm::{execute, terminal};
use tracing::{debug, warn};

/// The terminal while the editor owns it. Dropping it restores the screen.
pub struct TerminalSession {
	pub terminal: DefaultTerminal,
	/// Whether the terminal reports modified keys distinctly (kitty keyboard
	/// protocol). Without it, Ctrl+I arrives as Tab and Ctrl+Shift+X as Ctrl+X.
	pub enhanced_keys: bool,
}

impl TerminalSession {
	pub fn start() -> Self {
		let terminal = ratatui::init();
		let enhanced_keys = push_key_disambiguation();
		Self {
			terminal,
			enhanced_keys,
		}
	}
}

impl Drop for TerminalSession {
	fn drop(&mut self) {
		if self.enhanced_keys
			&& let Err(error) = execute!(io::stdout(), PopKeyboardEnhancementFlags)
		{
			warn!(%error, "failed to pop keyboard enhancement flags");
		}
		ratatui::restore();
	}
}

fn push_key_disambiguation() -> bool {
	match terminal::supports_keyboard_enhancement() {
		Ok(true) => {}
		Ok(false) => {
			debug!("no keyboard enhancement; legacy key reporting");
			return false;
		}
		Err(error) => {
			warn!(%error, "keyboard enhancement query failed");
			return false;
		}
	}

	let flags = KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES;
	match execute!(io::stdout(), PushKeyboardEnhancementFlags(flags)) {
		Ok(()) => {
			debug!("keyboard enhancement enabled");
			true
		}
		Err(error) => {
			warn!(%error, "failed to push keyboard enhancement flags");
			false
		}
	}
}
