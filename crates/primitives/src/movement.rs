//! Caret and selection movement primitives.
//!
//! Horizontal movement steps over whole grapheme clusters so a caret never
//! lands inside a combined emoji or accented letter.

use ropey::RopeSlice;
use unicode_segmentation::UnicodeSegmentation;

use crate::range::{CharIdx, Range};


/// Creates a range for caret movement.
///
/// Without `extend` the range collapses to `new_head`; with it the anchor
/// stays put and only the head moves.
#[inline]
pub fn make_range(range: Range, new_head: CharIdx, extend: bool) -> Range {
	if extend {
		Range::new(range.anchor, new_head)
	} else {
		Range::point(new_head)
	}
}

/// Returns the grapheme boundary after `idx`, or the text length.
pub fn next_grapheme(text: RopeSlice, idx: CharIdx) -> CharIdx {
	let len = text.len_chars();
	if idx >= len {
		return len;
	}

	let line = text.char_to_line(idx);
	let line_start = text.line_to_char(line);
	let offset = idx - line_start;
	let content: String = text.line(line).into();

	let mut seen = 0;
	for grapheme in content.graphemes(true) {
		seen += grapheme.chars().count();
		if seen > offset {
			return line_start + seen;
		}
	}
	idx + 1
}

/// Returns the grapheme boundary before `idx`, or 0.
pub fn prev_grapheme(text: RopeSlice, idx: CharIdx) -> CharIdx {
	if idx == 0 {
		return 0;
	}
	let idx = idx.min(text.len_chars());

	let line = text.char_to_line(idx - 1);
	let line_start = text.line_to_char(line);
	let offset = idx - line_start;
	let content: String = text.line(line).into();

	let mut seen = 0;
	for grapheme in content.graphemes(true) {
		let next = seen + grapheme.chars().count();
		if next >= offset {
			return line_start + seen;
		}
		seen = next;
	}
	line_start + seen
}

/// Number of characters on `line`, excluding its line terminator.
pub fn line_len(text: RopeSlice, line: usize) -> usize {
	let slice = text.line(line);
	let mut len = slice.len_chars();
	if len > 0 && slice.char(len - 1) == '\n' {
		len -= 1;
		if len > 0 && slice.char(len - 1) == '\r' {
			len -= 1;
		}
	}
	len
}

/// Zero-based `(line, column)` of a character position.
pub fn line_col(text: RopeSlice, idx: CharIdx) -> (usize, usize) {
	let idx = idx.min(text.len_chars());
	let line = text.char_to_line(idx);
	(line, idx - text.line_to_char(line))
}

/// Character position for `(line, column)`, clamped to existing text.
pub fn pos_at(text: RopeSlice, line: usize, col: usize) -> CharIdx {
	let line = line.min(text.len_lines().saturating_sub(1));
	text.line_to_char(line) + col.min(line_len(text, line))
}

/// Moves the head one grapheme left or right.
///
/// Without `extend`, a non-empty selection collapses to its near edge
/// instead of moving.
pub fn move_horizontally(text: RopeSlice, range: Range, forward: bool, extend: bool) -> Range {
	if !extend && !range.is_empty() {
		return Range::point(if forward { range.to() } else { range.from() });
	}

	let head = if forward {
		next_grapheme(text, range.head)
	} else {
		prev_grapheme(text, range.head)
	};
	make_range(range, head, extend)
}

/// Moves the head one line up or down, keeping the column where possible.
pub fn move_vertically(text: RopeSlice, range: Range, down: bool, extend: bool) -> Range {
	let (line, col) = line_col(text, range.head);
	let last_line = text.len_lines().saturating_sub(1);

	let head = match (down, line) {
		(true, l) if l >= last_line => text.len_chars(),
		(true, l) => pos_at(text, l + 1, col),
		(false, 0) => 0,
		(false, l) => pos_at(text, l - 1, col),
	};
	make_range(range, head, extend)
}

/// Moves the head to the start of its line.
pub fn move_to_line_start(text: RopeSlice, range: Range, extend: bool) -> Range {
	let (line, _) = line_col(text, range.head);
	make_range(range, text.line_to_char(line), extend)
}

/// Moves the head to the end of its line, before the terminator.
pub fn move_to_line_end(text: RopeSlice, range: Range, extend: bool) -> Range {
	let (line, _) = line_col(text, range.head);
	make_range(range, pos_at(text, line, usize::MAX), extend)
}
