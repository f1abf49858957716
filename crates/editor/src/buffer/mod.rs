//! The story buffer: an HTML string plus a caret/selection.
//!
//! The buffer never parses its contents. Offsets are character offsets into
//! the HTML source, so `<strong>` counts as eight characters like any other
//! text.

mod editing;
mod navigation;

use talewright_primitives::range::{CharIdx, Range};
use talewright_primitives::{Rope, RopeSlice};


/// HTML text being edited, with the caret/selection over it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryBuffer {
	text: Rope,
	selection: Range,
}

impl StoryBuffer {
	/// Creates an empty buffer with the caret at 0.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a buffer pre-populated with `content`, caret at 0.
	pub fn from_content(content: &str) -> Self {
		Self {
			text: Rope::from_str(content),
			selection: Range::point(0),
		}
	}

	/// Read-only view of the text.
	pub fn text(&self) -> RopeSlice<'_> {
		self.text.slice(..)
	}

	/// The full HTML content as a `String`.
	pub fn content(&self) -> String {
		self.text.to_string()
	}

	pub fn len_chars(&self) -> usize {
		self.text.len_chars()
	}

	pub fn is_empty(&self) -> bool {
		self.text.len_chars() == 0
	}

	/// Current selection. Empty when only a caret is placed.
	pub fn selection(&self) -> Range {
		self.selection
	}

	/// Caret position, the head of the selection.
	pub fn caret(&self) -> CharIdx {
		self.selection.head
	}

	/// Sets the selection, clamped to the text.
	pub fn set_selection(&mut self, range: Range) {
		self.selection = range.clamp(self.len_chars());
	}

	/// Selects `from..to` (forward), clamped to the text.
	pub fn select(&mut self, from: CharIdx, to: CharIdx) {
		self.set_selection(Range::new(from, to));
	}

	/// Places a bare caret at `pos`, clamped to the text.
	pub fn set_caret(&mut self, pos: CharIdx) {
		self.set_selection(Range::point(pos));
	}

	/// Text covered by the selection.
	pub fn selected_text(&self) -> String {
		self.selection.slice(self.text()).to_string()
	}

	/// Replaces the whole content, keeping the selection where it still fits.
	///
	/// Returns false when `content` equals the current text.
	pub fn set_content(&mut self, content: &str) -> bool {
		if self.text == content {
			return false;
		}
		self.text = Rope::from_str(content);
		self.selection = self.selection.clamp(self.len_chars());
		true
	}

	/// Replaces `from..to` with `replacement`.
	fn splice(&mut self, from: CharIdx, to: CharIdx, replacement: &str) {
		if from < to {
			self.text.remove(from..to);
		}
		if !replacement.is_empty() {
			self.text.insert(from, replacement);
		}
	}
}
