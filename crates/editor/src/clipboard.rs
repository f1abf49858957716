//! Clipboard access for copy, cut and paste shortcuts.
//!
//! Clipboard calls can be refused by the platform. Callers treat a failure
//! as "nothing happened": it is logged and the buffer is left untouched.

use thiserror::Error;

/// Errors returned by a [`Clipboard`] implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
	/// The platform refused access (permissions, sandboxing).
	#[error("clipboard access denied")]
	Denied,
	/// No clipboard is available in this environment.
	#[error("clipboard unavailable: {0}")]
	Unavailable(String),
}

/// A text clipboard.
pub trait Clipboard {
	/// Reads the current clipboard text.
	fn read_text(&mut self) -> Result<String, ClipboardError>;

	/// Replaces the clipboard text.
	fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Process-local clipboard, used when no system clipboard is wired in.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
	contents: String,
}

impl MemoryClipboard {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a clipboard already holding `text`.
	pub fn with_text(text: impl Into<String>) -> Self {
		Self { contents: text.into() }
	}

	pub fn contents(&self) -> &str {
		&self.contents
	}
}

impl Clipboard for MemoryClipboard {
	fn read_text(&mut self) -> Result<String, ClipboardError> {
		Ok(self.contents.clone())
	}

	fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
		self.contents = text.to_string();
		Ok(())
	}
}
