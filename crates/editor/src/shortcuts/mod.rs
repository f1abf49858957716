//! Keyboard shortcut table.
//!
//! Shortcuts are declared as text combinations (`"ctrl-b"`, `"ctrl-alt-1"`)
//! in [`SHORTCUT_DEFS`] and parsed once into a lookup table. Each combination
//! maps to exactly one [`ShortcutAction`].

mod dispatch;

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use talewright_keymap_parser::{Node, ParseError};
use talewright_primitives::Key;
use thiserror::Error;

pub use dispatch::{Dispatch, dispatch};


/// What a shortcut does to the buffer or its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
	/// Wrap the selection in a tag pair.
	Wrap { open: &'static str, close: &'static str },
	/// Insert literal text at the caret.
	///
	/// With a selection, the text goes in at the selection start and the
	/// selected text is kept, unlike typing or paste which replace it.
	Insert(&'static str),
	/// Insert the configured number of spaces instead of moving focus.
	/// Like [`ShortcutAction::Insert`], a selection is kept.
	IndentTab,
	Copy,
	Cut,
	Paste,
	/// Strip tags inside the selection.
	ClearTags,
	/// Empty the buffer.
	ClearAll,
	/// Ask the host to show help.
	Help,
	/// Ask the host to save.
	Save,
}

/// A shortcut declaration.
#[derive(Debug, Clone, Copy)]
pub struct ShortcutDef {
	/// Key combination in keymap syntax.
	pub keys: &'static str,
	pub action: ShortcutAction,
	/// Short label for help listings.
	pub description: &'static str,
}

const fn wrap(keys: &'static str, open: &'static str, close: &'static str, description: &'static str) -> ShortcutDef {
	ShortcutDef {
		keys,
		action: ShortcutAction::Wrap { open, close },
		description,
	}
}

const fn bind(keys: &'static str, action: ShortcutAction, description: &'static str) -> ShortcutDef {
	ShortcutDef {
		keys,
		action,
		description,
	}
}

/// Built-in shortcuts. `ctrl` also matches Cmd.
pub static SHORTCUT_DEFS: &[ShortcutDef] = &[
	wrap("ctrl-b", "<strong>", "</strong>", "Bold"),
	wrap("ctrl-i", "<em>", "</em>", "Italic"),
	wrap("ctrl-u", "<u>", "</u>", "Underline"),
	bind("ctrl-c", ShortcutAction::Copy, "Copy selection"),
	bind("ctrl-x", ShortcutAction::Cut, "Cut selection"),
	bind("ctrl-v", ShortcutAction::Paste, "Paste"),
	wrap("ctrl-alt-1", "<h1>", "</h1>", "Heading 1"),
	wrap("ctrl-alt-2", "<h2>", "</h2>", "Heading 2"),
	wrap("ctrl-alt-3", "<h3>", "</h3>", "Heading 3"),
	wrap("ctrl-shift-7", "<ol>\n  <li>", "</li>\n</ol>", "Numbered list"),
	wrap("ctrl-shift-8", "<ul>\n  <li>", "</li>\n</ul>", "Bulleted list"),
	wrap("ctrl-shift-e", "<div style=\"text-align: center;\">", "</div>", "Center"),
	bind("ctrl-alt-m", ShortcutAction::Insert("—"), "Em dash"),
	bind("ctrl-alt-n", ShortcutAction::Insert("–"), "En dash"),
	bind("ctrl-shift-x", ShortcutAction::ClearTags, "Clear tags in selection"),
	bind("ctrl-shift-backspace", ShortcutAction::ClearAll, "Clear everything"),
	bind("ctrl-/", ShortcutAction::Help, "Show shortcuts"),
	bind("ctrl-s", ShortcutAction::Save, "Save"),
	bind("tab", ShortcutAction::IndentTab, "Insert spaces"),
];

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShortcutError {
	#[error("invalid shortcut `{keys}`: {source}")]
	Parse {
		keys: &'static str,
		#[source]
		source: ParseError,
	},
	#[error("shortcut `{keys}` is bound more than once")]
	Duplicate { keys: &'static str },
}

/// Parsed shortcut lookup table.
#[derive(Debug, Clone)]
pub struct ShortcutTable {
	by_node: HashMap<Node, &'static ShortcutDef>,
	ordered: Vec<(Node, &'static ShortcutDef)>,
}

static BUILTIN: LazyLock<ShortcutTable> =
	LazyLock::new(|| ShortcutTable::try_from_defs(SHORTCUT_DEFS).expect("built-in shortcuts are valid"));

impl ShortcutTable {
	/// Builds a table, rejecting unparsable or duplicate combinations.
	pub fn try_from_defs(defs: &'static [ShortcutDef]) -> Result<Self, ShortcutError> {
		let mut by_node = HashMap::with_capacity(defs.len());
		let mut ordered = Vec::with_capacity(defs.len());

		for def in defs {
			let node: Node = def.keys.parse().map_err(|source| ShortcutError::Parse {
				keys: def.keys,
				source,
			})?;
			if by_node.insert(node, def).is_some() {
				return Err(ShortcutError::Duplicate { keys: def.keys });
			}
			ordered.push((node, def));
		}

		Ok(Self { by_node, ordered })
	}

	/// The built-in table.
	pub fn builtin() -> &'static ShortcutTable {
		&BUILTIN
	}

	/// Finds the shortcut bound to `key`, after normalization.
	pub fn lookup(&self, key: Key) -> Option<&'static ShortcutDef> {
		self.by_node.get(&key.to_node()).copied()
	}

	pub fn len(&self) -> usize {
		self.ordered.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ordered.is_empty()
	}

	/// Entries in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (Node, &'static ShortcutDef)> + '_ {
		self.ordered.iter().copied()
	}

	/// Help listing: one `(combination, description)` pair per shortcut.
	pub fn help_entries(&self) -> Vec<(String, &'static str)> {
		self.iter().map(|(node, def)| (node.to_string(), def.description)).collect()
	}
}

impl fmt::Display for ShortcutTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let entries = self.help_entries();
		let width = entries.iter().map(|(keys, _)| keys.len()).max().unwrap_or(0);
		for (keys, description) in entries {
			writeln!(f, "{keys:<width$}  {description}")?;
		}
		Ok(())
	}
}
