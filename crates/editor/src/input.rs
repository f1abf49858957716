//! Plain text-area key handling for keys no shortcut claimed.

use talewright_primitives::{Key, KeyCode};

use crate::buffer::StoryBuffer;

/// What a plain key did to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInput {
	/// The text changed.
	Edited,
	/// Only the caret or selection moved.
	Moved,
	/// The key has no text-area meaning.
	Ignored,
}

/// Applies a key the way a native text area would.
///
/// Shift extends the selection for movement keys. Ctrl+A selects all.
pub fn apply_text_key(buffer: &mut StoryBuffer, key: Key) -> TextInput {
	if let Some(c) = key.typed_char() {
		let mut tmp = [0u8; 4];
		return edited(buffer.replace_selection(c.encode_utf8(&mut tmp)));
	}

	let key = key.normalize();
	let extend = key.modifiers.shift;

	if key.modifiers.ctrl {
		return match key.code {
			KeyCode::Char('a') if !key.modifiers.alt => {
				buffer.select_all();
				TextInput::Moved
			}
			_ => TextInput::Ignored,
		};
	}

	match key.code {
		KeyCode::Enter => edited(buffer.replace_selection("\n")),
		KeyCode::Backspace => edited(buffer.delete_backward()),
		KeyCode::Delete => edited(buffer.delete_forward()),
		KeyCode::Left => moved(buffer, |b| b.move_horizontally(false, extend)),
		KeyCode::Right => moved(buffer, |b| b.move_horizontally(true, extend)),
		KeyCode::Up => moved(buffer, |b| b.move_vertically(false, extend)),
		KeyCode::Down => moved(buffer, |b| b.move_vertically(true, extend)),
		KeyCode::Home => moved(buffer, |b| b.move_to_line_start(extend)),
		KeyCode::End => moved(buffer, |b| b.move_to_line_end(extend)),
		_ => TextInput::Ignored,
	}
}

fn edited(changed: bool) -> TextInput {
	if changed { TextInput::Edited } else { TextInput::Moved }
}

fn moved(buffer: &mut StoryBuffer, f: impl FnOnce(&mut StoryBuffer)) -> TextInput {
	f(buffer);
	TextInput::Moved
}
