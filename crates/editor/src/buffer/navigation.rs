//! Caret movement and plain deletion, the behaviour of a native text area.

use talewright_primitives::movement;
use talewright_primitives::range::Range;

use super::StoryBuffer;

impl StoryBuffer {
	/// Moves the caret one grapheme left or right, extending the selection if asked.
	pub fn move_horizontally(&mut self, forward: bool, extend: bool) {
		self.selection = movement::move_horizontally(self.text(), self.selection, forward, extend);
	}

	/// Moves the caret one line up or down.
	pub fn move_vertically(&mut self, down: bool, extend: bool) {
		self.selection = movement::move_vertically(self.text(), self.selection, down, extend);
	}

	pub fn move_to_line_start(&mut self, extend: bool) {
		self.selection = movement::move_to_line_start(self.text(), self.selection, extend);
	}

	pub fn move_to_line_end(&mut self, extend: bool) {
		self.selection = movement::move_to_line_end(self.text(), self.selection, extend);
	}

	/// Selects the whole buffer.
	pub fn select_all(&mut self) {
		self.selection = Range::new(0, self.len_chars());
	}

	/// Backspace: deletes the selection, or the grapheme before the caret.
	pub fn delete_backward(&mut self) -> bool {
		if self.selection.is_empty() {
			let head = self.selection.head;
			if head == 0 {
				return false;
			}
			self.selection = Range::new(head, movement::prev_grapheme(self.text(), head));
		}
		self.replace_selection("")
	}

	/// Delete: deletes the selection, or the grapheme after the caret.
	pub fn delete_forward(&mut self) -> bool {
		if self.selection.is_empty() {
			let head = self.selection.head;
			if head >= self.len_chars() {
				return false;
			}
			self.selection = Range::new(head, movement::next_grapheme(self.text(), head));
		}
		self.replace_selection("")
	}

	/// Zero-based `(line, column)` of the caret.
	pub fn caret_line_col(&self) -> (usize, usize) {
		movement::line_col(self.text(), self.selection.head)
	}
}
