use ropey::RopeSlice;

/// Selection direction (anchor to head).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	/// Head is at or after anchor.
	Forward,
	/// Head is before anchor.
	Backward,
}

/// A position in the text, measured in characters (not bytes).
///
/// Positions sit between characters: `0` is before the first character and
/// `len_chars()` is after the last one.
pub type CharIdx = usize;

/// A length or count in the text, measured in characters (not bytes).
pub type CharLen = usize;

/// A text range defined by anchor and head positions.
///
/// The anchor is the fixed end and the head is the caret. A range whose ends
/// coincide is a bare caret; otherwise it covers `from()..to()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
	/// The fixed end of the range.
	pub anchor: CharIdx,
	/// The moving end of the range (caret position).
	pub head: CharIdx,
}

impl Range {
	/// Creates a new range from anchor to head.
	pub fn new(anchor: CharIdx, head: CharIdx) -> Self {
		Self { anchor, head }
	}

	/// Creates a zero-width range (caret) at the given position.
	pub fn point(pos: CharIdx) -> Self {
		Self::new(pos, pos)
	}

	/// Creates a forward range starting at `from` covering `len` characters.
	pub fn span(from: CharIdx, len: CharLen) -> Self {
		Self::new(from, from + len)
	}

	/// Returns the smaller of anchor and head.
	#[inline]
	pub fn min(&self) -> CharIdx {
		std::cmp::min(self.anchor, self.head)
	}

	/// Returns the larger of anchor and head.
	#[inline]
	pub fn max(&self) -> CharIdx {
		std::cmp::max(self.anchor, self.head)
	}

	/// Start of the covered text (inclusive).
	#[inline]
	pub fn from(&self) -> CharIdx {
		self.min()
	}

	/// End of the covered text (exclusive).
	#[inline]
	pub fn to(&self) -> CharIdx {
		self.max()
	}

	/// Number of characters covered.
	#[inline]
	pub fn len(&self) -> CharLen {
		self.to() - self.from()
	}

	/// Returns true if anchor equals head.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.anchor == self.head
	}

	#[inline]
	pub fn direction(&self) -> Direction {
		if self.head < self.anchor {
			Direction::Backward
		} else {
			Direction::Forward
		}
	}

	/// Returns a new range with anchor and head swapped.
	pub fn flip(&self) -> Self {
		Self {
			anchor: self.head,
			head: self.anchor,
		}
	}

	/// Collapses the range to a caret at its head.
	pub fn collapse(&self) -> Self {
		Self::point(self.head)
	}

	/// Applies a function to both anchor and head.
	pub fn map(self, mut f: impl FnMut(CharIdx) -> CharIdx) -> Self {
		Self {
			anchor: f(self.anchor),
			head: f(self.head),
		}
	}

	/// Returns true if the position is within the covered text.
	pub fn contains(&self, pos: CharIdx) -> bool {
		pos >= self.min() && pos < self.max()
	}

	/// Clamps anchor and head to `[0, max_char]`.
	pub fn clamp(&self, max_char: CharIdx) -> Self {
		Self {
			anchor: self.anchor.min(max_char),
			head: self.head.min(max_char),
		}
	}

	/// Returns the covered slice of `text`.
	///
	/// The range must already be clamped to the text length.
	pub fn slice<'a>(&self, text: RopeSlice<'a>) -> RopeSlice<'a> {
		text.slice(self.from()..self.to())
	}
}

impl Default for Range {
	fn default() -> Self {
		Self::point(0)
	}
}
