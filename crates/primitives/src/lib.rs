//! Core types for text editing: ranges, caret movement and key events.

/// Key event types.
pub mod key;
/// Caret and selection movement over a rope.
pub mod movement;
/// Text range types measured in characters.
pub mod range;

pub use key::{Key, KeyCode, Modifiers};
pub use range::{CharIdx, CharLen, Direction, Range};
pub use ropey::{Rope, RopeSlice};
