//! Story HTML editor engine.
//!
//! The story is a plain HTML string. Every editing feature here is textual
//! splicing over that string:
//!
//! - [`StoryBuffer`] holds the text and the caret/selection and implements
//!   the tag-insertion operations (wrap, insert, clear tags, clear all).
//! - [`shortcuts`] maps a fixed table of key combinations onto those
//!   operations or onto host callbacks (save, help).
//! - [`toolbar`] is the stateless command surface used by UI buttons and
//!   dialogs.
//! - [`preview`] sanitizes and styles the HTML for the live preview pane.
//! - [`SplitViewHost`] ties editor and preview together behind a single
//!   `content` / `on_change` contract.

pub mod buffer;
pub mod clipboard;
pub mod config;
pub mod html;
pub mod host;
pub mod input;
pub mod paste;
pub mod preview;
pub mod shortcuts;
pub mod toolbar;

pub use buffer::StoryBuffer;
pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard};
pub use config::{ConfigError, EditorConfig};
pub use host::{Attachment, KeyOutcome, Pane, SplitViewHost};
pub use preview::{Preview, StoryCategory};
pub use shortcuts::{Dispatch, ShortcutAction, ShortcutTable};
pub use toolbar::{ToolbarCommand, ToolbarError};
