use talewright_primitives::Key;
use tracing::{debug, trace, warn};

use super::{ShortcutAction, ShortcutTable};
use crate::buffer::StoryBuffer;
use crate::clipboard::Clipboard;
use crate::paste::normalize_to_lf;

/// Result of offering a key to the shortcut table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
	/// No shortcut is bound; the key belongs to plain text input.
	Ignored,
	/// An editing shortcut ran.
	Applied { changed: bool },
	/// The save shortcut was pressed. The host runs its save callback.
	Save,
	/// The help shortcut was pressed. The host runs its help callback.
	Help,
}

impl Dispatch {
	/// Whether the key was consumed and must not reach default handling.
	pub fn prevents_default(self) -> bool {
		!matches!(self, Dispatch::Ignored)
	}

	/// Whether the buffer text changed.
	pub fn changed(self) -> bool {
		matches!(self, Dispatch::Applied { changed: true })
	}
}

/// Runs `action` against `buffer`.
///
/// Clipboard failures are logged and leave the buffer as it was. Cut only
/// deletes once the clipboard write succeeded.
pub fn dispatch(
	action: ShortcutAction,
	buffer: &mut StoryBuffer,
	clipboard: &mut dyn Clipboard,
	tab_spaces: usize,
) -> Dispatch {
	let changed = match action {
		ShortcutAction::Wrap { open, close } => buffer.wrap_selection(open, close),
		ShortcutAction::Insert(text) => buffer.insert_at_caret(text),
		ShortcutAction::IndentTab => buffer.insert_at_caret(&" ".repeat(tab_spaces)),
		ShortcutAction::ClearTags => buffer.clear_tags_in_selection(),
		ShortcutAction::ClearAll => buffer.clear_all(),
		ShortcutAction::Copy => {
			copy_selection(buffer, clipboard);
			false
		}
		ShortcutAction::Cut => copy_selection(buffer, clipboard) && buffer.replace_selection(""),
		ShortcutAction::Paste => match clipboard.read_text() {
			Ok(text) if text.is_empty() => false,
			Ok(text) => buffer.replace_selection(&normalize_to_lf(text)),
			Err(error) => {
				warn!(%error, "paste failed");
				false
			}
		},
		ShortcutAction::Save => return Dispatch::Save,
		ShortcutAction::Help => return Dispatch::Help,
	};
	Dispatch::Applied { changed }
}

/// Writes the selection to the clipboard. Returns false when nothing was written.
fn copy_selection(buffer: &StoryBuffer, clipboard: &mut dyn Clipboard) -> bool {
	if buffer.selection().is_empty() {
		trace!("copy with empty selection");
		return false;
	}
	match clipboard.write_text(&buffer.selected_text()) {
		Ok(()) => true,
		Err(error) => {
			warn!(%error, "clipboard write failed");
			false
		}
	}
}

impl ShortcutTable {
	/// Looks up `key` and runs its action.
	pub fn dispatch(
		&self,
		key: Key,
		buffer: &mut StoryBuffer,
		clipboard: &mut dyn Clipboard,
		tab_spaces: usize,
	) -> Dispatch {
		let Some(def) = self.lookup(key) else {
			return Dispatch::Ignored;
		};
		debug!(keys = def.keys, action = ?def.action, "shortcut");
		dispatch(def.action, buffer, clipboard, tab_spaces)
	}
}
