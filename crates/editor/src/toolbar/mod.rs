//! Toolbar command surface.
//!
//! Each command funnels into one tag-insertion operation with a fixed tag
//! pair or literal. Commands never look at the formatting around the caret.

mod command_line;
mod dialogs;

use thiserror::Error;
use tracing::debug;

pub use command_line::{COMMANDS, CommandLineError, CommandUsage, completions, parse_command_line};
pub use dialogs::{LinkDialog, ListDialog, ListKind};

use crate::buffer::StoryBuffer;
use crate::config::EditorConfig;

#[cfg(test)]
mod tests;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolbarError {
	#[error("link URL is empty")]
	EmptyUrl,
	#[error("invalid icon name `{0}`")]
	InvalidIconName(String),
}

/// Named text sizes offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontSize {
	H1,
	H2,
	H3,
	Large,
	Normal,
	Small,
}

/// `(size, px, font-weight)` for every [`FontSize`].
static FONT_SIZES: [(FontSize, u16, u16); 6] = [
	(FontSize::H1, 32, 700),
	(FontSize::H2, 26, 700),
	(FontSize::H3, 22, 600),
	(FontSize::Large, 18, 400),
	(FontSize::Normal, 16, 400),
	(FontSize::Small, 13, 400),
];

impl FontSize {
	pub const ALL: [FontSize; 6] = [
		FontSize::H1,
		FontSize::H2,
		FontSize::H3,
		FontSize::Large,
		FontSize::Normal,
		FontSize::Small,
	];

	pub fn label(self) -> &'static str {
		match self {
			FontSize::H1 => "H1",
			FontSize::H2 => "H2",
			FontSize::H3 => "H3",
			FontSize::Large => "Large",
			FontSize::Normal => "Normal",
			FontSize::Small => "Small",
		}
	}

	fn metrics(self) -> (u16, u16) {
		FONT_SIZES
			.iter()
			.find(|(size, ..)| *size == self)
			.map_or((16, 400), |&(_, px, weight)| (px, weight))
	}

	pub fn px(self) -> u16 {
		self.metrics().0
	}

	pub fn weight(self) -> u16 {
		self.metrics().1
	}

	/// Opening span carrying the size and weight.
	pub fn open_tag(self) -> String {
		let (px, weight) = self.metrics();
		format!(r#"<span style="font-size: {px}px; font-weight: {weight};">"#)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
	Left,
	Center,
	Right,
	Justify,
}

impl Alignment {
	pub const ALL: [Alignment; 4] = [Alignment::Left, Alignment::Center, Alignment::Right, Alignment::Justify];

	/// CSS `text-align` value.
	pub fn css(self) -> &'static str {
		match self {
			Alignment::Left => "left",
			Alignment::Center => "center",
			Alignment::Right => "right",
			Alignment::Justify => "justify",
		}
	}
}

/// A toolbar button or confirmed dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarCommand {
	Bold,
	Italic,
	Underline,
	Align(Alignment),
	FontSize(FontSize),
	FontFamily(String),
	List(ListDialog),
	Link(LinkDialog),
	HorizontalRule,
	PageBreak,
	/// Wraps the selection so print layout keeps it on one page.
	KeepTogether,
	/// Inserts an `{{icon:name}}` token.
	Icon(String),
	/// Inserts the configured signature snippet.
	Signature,
}

fn is_icon_name(name: &str) -> bool {
	!name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl ToolbarCommand {
	/// Applies the command to `buffer`. Returns whether the text changed.
	pub fn apply(&self, buffer: &mut StoryBuffer, config: &EditorConfig) -> Result<bool, ToolbarError> {
		debug!(command = self.label(), "toolbar");
		let changed = match self {
			ToolbarCommand::Bold => buffer.wrap_selection("<strong>", "</strong>"),
			ToolbarCommand::Italic => buffer.wrap_selection("<em>", "</em>"),
			ToolbarCommand::Underline => buffer.wrap_selection("<u>", "</u>"),
			ToolbarCommand::Align(alignment) => {
				let open = format!(r#"<div style="text-align: {};">"#, alignment.css());
				buffer.wrap_selection(&open, "</div>")
			}
			ToolbarCommand::FontSize(size) => buffer.wrap_selection(&size.open_tag(), "</span>"),
			ToolbarCommand::FontFamily(family) => buffer.wrap_font_family(family),
			ToolbarCommand::List(dialog) => buffer.insert_at_caret(&dialog.to_html()),
			ToolbarCommand::Link(dialog) => {
				let open = dialog.open_tag().ok_or(ToolbarError::EmptyUrl)?;
				if dialog.text.trim().is_empty() && !buffer.selection().is_empty() {
					buffer.wrap_selection(&open, "</a>")
				} else {
					buffer.insert_at_caret(&format!("{open}{}</a>", dialog.label()))
				}
			}
			ToolbarCommand::HorizontalRule => buffer.insert_at_caret("<hr>"),
			ToolbarCommand::PageBreak => buffer.insert_at_caret(r#"<div class="page-break"></div>"#),
			ToolbarCommand::KeepTogether => buffer.wrap_selection(r#"<div class="keep-together">"#, "</div>"),
			ToolbarCommand::Icon(name) => {
				if !is_icon_name(name) {
					return Err(ToolbarError::InvalidIconName(name.clone()));
				}
				buffer.insert_at_caret(&format!("{{{{icon:{name}}}}}"))
			}
			ToolbarCommand::Signature => buffer.insert_at_caret(&config.signature),
		};
		Ok(changed)
	}

	/// Button label.
	pub fn label(&self) -> &'static str {
		match self {
			ToolbarCommand::Bold => "Bold",
			ToolbarCommand::Italic => "Italic",
			ToolbarCommand::Underline => "Underline",
			ToolbarCommand::Align(Alignment::Left) => "Align left",
			ToolbarCommand::Align(Alignment::Center) => "Align center",
			ToolbarCommand::Align(Alignment::Right) => "Align right",
			ToolbarCommand::Align(Alignment::Justify) => "Justify",
			ToolbarCommand::FontSize(size) => size.label(),
			ToolbarCommand::FontFamily(_) => "Font family",
			ToolbarCommand::List(_) => "List",
			ToolbarCommand::Link(_) => "Link",
			ToolbarCommand::HorizontalRule => "Horizontal rule",
			ToolbarCommand::PageBreak => "Page break",
			ToolbarCommand::KeepTogether => "Keep together",
			ToolbarCommand::Icon(_) => "Icon",
			ToolbarCommand::Signature => "Signature",
		}
	}
}
