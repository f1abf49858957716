//! Split-pane host: the editor and its live preview side by side.
//!
//! The host owns the editing session. Its owner supplies the content and an
//! `on_change` callback, and may supply save/help callbacks, a placeholder,
//! a category and a preview override. Keyboard handling only runs while an
//! [`Attachment`] guard is alive.

mod attachment;

use talewright_primitives::Key;
use tracing::{debug, trace};

pub use attachment::Attachment;

use crate::buffer::StoryBuffer;
use crate::clipboard::{Clipboard, MemoryClipboard};
use crate::config::{EditorConfig, SPLIT_PERCENT_RANGE};
use crate::input::{TextInput, apply_text_key};
use crate::preview::{Preview, StoryCategory, render, substitute_icon_tokens};
use crate::shortcuts::{Dispatch, ShortcutTable};
use crate::toolbar::{ToolbarCommand, ToolbarError};

#[cfg(test)]
mod tests;

type ChangeFn = Box<dyn FnMut(&str)>;
type HelpFn = Box<dyn FnMut()>;

/// One of the two panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pane {
	Editor,
	Preview,
}

impl Pane {
	fn index(self) -> usize {
		match self {
			Pane::Editor => 0,
			Pane::Preview => 1,
		}
	}

	/// The other pane.
	pub fn other(self) -> Self {
		match self {
			Pane::Editor => Pane::Preview,
			Pane::Preview => Pane::Editor,
		}
	}
}

/// What the host did with a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
	/// A shortcut consumed the key.
	Shortcut(Dispatch),
	/// Plain text-area handling consumed the key.
	Text(TextInput),
	/// Nothing handled the key, or the host is detached.
	Ignored,
}

impl KeyOutcome {
	pub fn is_handled(self) -> bool {
		!matches!(self, KeyOutcome::Ignored)
	}
}

pub struct SplitViewHost {
	buffer: StoryBuffer,
	config: EditorConfig,
	clipboard: Box<dyn Clipboard>,
	shortcuts: &'static ShortcutTable,
	on_change: ChangeFn,
	on_save: Option<ChangeFn>,
	on_help: Option<HelpFn>,
	placeholder: Option<String>,
	category: Option<StoryCategory>,
	preview_content: Option<String>,
	split_percent: u16,
	scroll: [usize; 2],
	attached: bool,
}

impl SplitViewHost {
	/// Creates a detached host over `content`.
	pub fn new(content: &str, on_change: impl FnMut(&str) + 'static) -> Self {
		let config = EditorConfig::default();
		Self {
			buffer: StoryBuffer::from_content(content),
			split_percent: config.split_percent,
			config,
			clipboard: Box::new(MemoryClipboard::new()),
			shortcuts: ShortcutTable::builtin(),
			on_change: Box::new(on_change),
			on_save: None,
			on_help: None,
			placeholder: None,
			category: None,
			preview_content: None,
			scroll: [0; 2],
			attached: false,
		}
	}

	pub fn with_config(mut self, config: EditorConfig) -> Self {
		self.set_split_percent(config.split_percent);
		self.config = config;
		self
	}

	pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
		self.clipboard = Box::new(clipboard);
		self
	}

	/// Called with the content when the save shortcut is pressed.
	pub fn with_on_save(mut self, on_save: impl FnMut(&str) + 'static) -> Self {
		self.on_save = Some(Box::new(on_save));
		self
	}

	/// Called when the help shortcut is pressed.
	pub fn with_on_help(mut self, on_help: impl FnMut() + 'static) -> Self {
		self.on_help = Some(Box::new(on_help));
		self
	}

	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	pub fn with_category(mut self, category: StoryCategory) -> Self {
		self.category = Some(category);
		self
	}

	/// Starts keyboard handling. Handling stops when the guard is dropped.
	pub fn attach(&mut self) -> Attachment<'_> {
		Attachment::new(self)
	}

	pub fn is_attached(&self) -> bool {
		self.attached
	}

	pub fn buffer(&self) -> &StoryBuffer {
		&self.buffer
	}

	pub fn config(&self) -> &EditorConfig {
		&self.config
	}

	pub fn content(&self) -> String {
		self.buffer.content()
	}

	/// Replaces the content from the owner's side.
	///
	/// This is a prop update, so `on_change` is not called.
	pub fn set_content(&mut self, content: &str) {
		if self.buffer.set_content(content) {
			trace!("content replaced by owner");
		}
	}

	pub fn placeholder(&self) -> Option<&str> {
		self.placeholder.as_deref()
	}

	/// Category used for the preview: the explicit one, else the configured default.
	pub fn category(&self) -> StoryCategory {
		self.category.unwrap_or(self.config.default_category)
	}

	pub fn set_category(&mut self, category: Option<StoryCategory>) {
		self.category = category;
	}

	/// Sets HTML shown by the preview pane in place of the content.
	pub fn set_preview_content(&mut self, preview: Option<String>) {
		self.preview_content = preview;
	}

	pub fn preview_content(&self) -> Option<&str> {
		self.preview_content.as_deref()
	}

	/// Renders the preview pane: the override if set, else the content.
	///
	/// Icon tokens are replaced with the configured glyphs first.
	pub fn preview(&self) -> Preview {
		let content;
		let source = match &self.preview_content {
			Some(preview) => preview.as_str(),
			None => {
				content = self.buffer.content();
				content.as_str()
			}
		};
		render(&substitute_icon_tokens(source, &self.config.icons), self.category())
	}

	/// Places the caret or selection, clamped to the text.
	pub fn select(&mut self, from: usize, to: usize) {
		self.buffer.select(from, to);
	}

	/// Offers a key to the shortcut table, then to plain text input.
	pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
		if !self.attached {
			trace!(%key, "key ignored while detached");
			return KeyOutcome::Ignored;
		}

		let dispatch = self
			.shortcuts
			.dispatch(key, &mut self.buffer, self.clipboard.as_mut(), self.config.tab_spaces);
		match dispatch {
			Dispatch::Ignored => {}
			Dispatch::Applied { changed } => {
				if changed {
					self.notify_change();
				}
				return KeyOutcome::Shortcut(dispatch);
			}
			Dispatch::Save => {
				match &mut self.on_save {
					Some(on_save) => on_save(&self.buffer.content()),
					None => debug!("save requested without a save handler"),
				}
				return KeyOutcome::Shortcut(dispatch);
			}
			Dispatch::Help => {
				if let Some(on_help) = &mut self.on_help {
					on_help();
				}
				return KeyOutcome::Shortcut(dispatch);
			}
		}

		match apply_text_key(&mut self.buffer, key) {
			TextInput::Ignored => KeyOutcome::Ignored,
			input => {
				if input == TextInput::Edited {
					self.notify_change();
				}
				KeyOutcome::Text(input)
			}
		}
	}

	/// Runs a toolbar command. Returns whether the content changed.
	pub fn apply(&mut self, command: &ToolbarCommand) -> Result<bool, ToolbarError> {
		if !self.attached {
			trace!(command = command.label(), "toolbar ignored while detached");
			return Ok(false);
		}
		let changed = command.apply(&mut self.buffer, &self.config)?;
		if changed {
			self.notify_change();
		}
		Ok(changed)
	}

	fn notify_change(&mut self) {
		let content = self.buffer.content();
		(self.on_change)(&content);
	}

	/// Width of the editor pane in percent.
	pub fn split_percent(&self) -> u16 {
		self.split_percent
	}

	pub fn set_split_percent(&mut self, percent: u16) {
		self.split_percent = percent.clamp(*SPLIT_PERCENT_RANGE.start(), *SPLIT_PERCENT_RANGE.end());
	}

	/// Moves the divider by `delta` percent.
	pub fn resize_split(&mut self, delta: i16) {
		let target = self.split_percent.saturating_add_signed(delta);
		self.set_split_percent(target);
	}

	/// First visible line of `pane`.
	pub fn scroll(&self, pane: Pane) -> usize {
		self.scroll[pane.index()]
	}

	pub fn set_scroll(&mut self, pane: Pane, line: usize) {
		self.scroll[pane.index()] = line;
	}

	pub fn scroll_by(&mut self, pane: Pane, delta: isize) {
		let slot = &mut self.scroll[pane.index()];
		*slot = slot.saturating_add_signed(delta);
	}

	pub fn scroll_to_top(&mut self, pane: Pane) {
		self.scroll[pane.index()] = 0;
	}

	/// Scrolls the editor pane so the caret line is within `height` lines.
	pub fn ensure_caret_visible(&mut self, height: usize) {
		if height == 0 {
			return;
		}
		let (line, _) = self.buffer.caret_line_col();
		let top = &mut self.scroll[Pane::Editor.index()];
		if line < *top {
			*top = line;
		} else if line >= *top + height {
			*top = line + 1 - height;
		}
	}
}
