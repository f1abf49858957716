//! Tag-insertion operations.
//!
//! Every operation is a plain string splice followed by a selection update.
//! Nothing here validates the resulting HTML: wrapping twice nests the tags
//! twice, and overlapping wraps can produce improperly nested markup.

use std::sync::LazyLock;

use regex::Regex;
use talewright_primitives::Rope;
use talewright_primitives::range::Range;
use tracing::trace;

use super::StoryBuffer;

/// Any HTML tag, including comments and closing tags.
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

/// A font-family span and its content, as produced by [`StoryBuffer::wrap_font_family`].
static FONT_FAMILY_SPAN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r#"(?s)<span style="font-family:[^"]*">(.*?)</span>"#).expect("valid font span pattern")
});

fn char_len(s: &str) -> usize {
	s.chars().count()
}

impl StoryBuffer {
	/// Wraps the selection in `open` / `close`.
	///
	/// With a selection, the result is `open + selected + close` and the whole
	/// inserted span is selected. With a bare caret, `open + close` is
	/// inserted and the caret lands between them.
	pub fn wrap_selection(&mut self, open: &str, close: &str) -> bool {
		let sel = self.selection;
		let (from, to) = (sel.from(), sel.to());

		if sel.is_empty() {
			let inserted = format!("{open}{close}");
			self.splice(from, from, &inserted);
			self.selection = Range::point(from + char_len(open));
		} else {
			let replacement = format!("{open}{}{close}", self.selected_text());
			self.splice(from, to, &replacement);
			self.selection = Range::span(from, char_len(&replacement));
		}

		!open.is_empty() || !close.is_empty()
	}

	/// Splices `text` in at the caret and moves the caret past it.
	///
	/// With a selection, the text goes in at the selection start and the
	/// selection collapses; the selected text itself is kept.
	pub fn insert_at_caret(&mut self, text: &str) -> bool {
		let at = self.selection.from();
		self.splice(at, at, text);
		self.selection = Range::point(at + char_len(text));
		!text.is_empty()
	}

	/// Replaces the selection with `text`, caret after the inserted text.
	///
	/// This is how typed text, paste and cut behave.
	pub fn replace_selection(&mut self, text: &str) -> bool {
		let sel = self.selection;
		if sel.is_empty() && text.is_empty() {
			return false;
		}
		self.splice(sel.from(), sel.to(), text);
		self.selection = Range::point(sel.from() + char_len(text));
		true
	}

	/// Removes every HTML tag from the selected text only.
	///
	/// The stripped text stays selected. Applying it again finds no tags and
	/// changes nothing.
	pub fn clear_tags_in_selection(&mut self) -> bool {
		let sel = self.selection;
		if sel.is_empty() {
			trace!("clear tags: empty selection");
			return false;
		}

		let selected = self.selected_text();
		let stripped = TAG_PATTERN.replace_all(&selected, "");
		let changed = stripped != selected;
		if changed {
			self.splice(sel.from(), sel.to(), &stripped);
		}
		self.selection = Range::span(sel.from(), char_len(&stripped));
		changed
	}

	/// Empties the buffer.
	pub fn clear_all(&mut self) -> bool {
		let changed = !self.is_empty();
		self.text = Rope::new();
		self.selection = Range::point(0);
		changed
	}

	/// Wraps the selection in a font-family span.
	///
	/// Font-family spans already inside the selection are unwrapped first so
	/// repeated family changes replace each other instead of nesting. No other
	/// formatting operation does this.
	pub fn wrap_font_family(&mut self, family: &str) -> bool {
		let family = family.replace('"', "");
		let value = if family.contains(' ') && !family.starts_with('\'') {
			format!("'{family}'")
		} else {
			family
		};
		let open = format!(r#"<span style="font-family: {value};">"#);

		let sel = self.selection;
		if !sel.is_empty() {
			let selected = self.selected_text();
			let unwrapped = FONT_FAMILY_SPAN.replace_all(&selected, "$1");
			if unwrapped != selected {
				self.splice(sel.from(), sel.to(), &unwrapped);
				self.selection = Range::span(sel.from(), char_len(&unwrapped));
			}
		}

		self.wrap_selection(&open, "</span>")
	}
}
