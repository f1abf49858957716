//! System clipboard backed by arboard.

use talewright_editor::{Clipboard, ClipboardError};
use tracing::warn;

/// The platform clipboard. Every call fails with `Unavailable` when the
/// platform has none (for example a headless session).
pub struct SystemClipboard {
	inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
	pub fn new() -> Self {
		let inner = match arboard::Clipboard::new() {
			Ok(clipboard) => Some(clipboard),
			Err(error) => {
				warn!(%error, "system clipboard unavailable");
				None
			}
		};
		Self { inner }
	}

	fn inner(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
		self.inner
			.as_mut()
			.ok_or_else(|| ClipboardError::Unavailable("no system clipboard".to_string()))
	}
}

fn map_error(error: arboard::Error) -> ClipboardError {
	match error {
		arboard::Error::ClipboardOccupied => ClipboardError::Denied,
		other => ClipboardError::Unavailable(other.to_string()),
	}
}

impl Clipboard for SystemClipboard {
	fn read_text(&mut self) -> Result<String, ClipboardError> {
		match self.inner()?.get_text() {
			Ok(text) => Ok(text),
			Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
			Err(error) => Err(map_error(error)),
		}
	}

	fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
		self.inner()?.set_text(text.to_string()).map_err(map_error)
	}
}
