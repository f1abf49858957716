//! Textual key-combination parsing.
//!
//! Turns strings like `"ctrl-b"`, `"ctrl-alt-1"` or `"tab"` into [`Node`]
//! values that can be compared against key events at runtime.

mod node;
mod parser;

pub use node::{KEY_SEP, Key, Modifier, Modifiers, Node};
pub use parser::{ParseError, parse, parse_seq};
