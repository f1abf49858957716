//! Text form of toolbar commands, for frontends without buttons.
//!
//! A command line is a command name followed by its argument, e.g.
//! `size h2`, `font 2`, `link https://example.com | our site` or
//! `list numbered wake up | brush teeth`.

use thiserror::Error;

use super::dialogs::{LinkDialog, ListDialog, ListKind};
use super::{Alignment, FontSize, ToolbarCommand};
use crate::config::EditorConfig;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandLineError {
	#[error("no command given")]
	Empty,
	#[error("unknown command `{0}`")]
	Unknown(String),
	#[error("`{command}` needs {expected}")]
	MissingArgument {
		command: &'static str,
		expected: &'static str,
	},
	#[error("unknown {what} `{value}`")]
	InvalidArgument { what: &'static str, value: String },
}

/// One entry of the command listing.
#[derive(Debug, Clone, Copy)]
pub struct CommandUsage {
	pub name: &'static str,
	pub usage: &'static str,
	pub description: &'static str,
}

const fn usage(name: &'static str, usage: &'static str, description: &'static str) -> CommandUsage {
	CommandUsage {
		name,
		usage,
		description,
	}
}

pub static COMMANDS: &[CommandUsage] = &[
	usage("bold", "bold", "Bold"),
	usage("italic", "italic", "Italic"),
	usage("underline", "underline", "Underline"),
	usage("align", "align left|center|right|justify", "Align the selection"),
	usage("size", "size h1|h2|h3|large|normal|small", "Text size"),
	usage("font", "font <number|name>", "Font family from the configured list"),
	usage("list", "list [numbered] <item> | <item> ...", "Insert a list"),
	usage("link", "link <url> [| <text>]", "Insert a link or link the selection"),
	usage("rule", "rule", "Horizontal rule"),
	usage("pagebreak", "pagebreak", "Page break"),
	usage("keep", "keep", "Keep the selection on one page"),
	usage("icon", "icon <name>", "Insert an icon token"),
	usage("signature", "signature", "Insert the signature"),
];

/// Commands whose name starts with the first word of `line`.
pub fn completions(line: &str) -> impl Iterator<Item = &'static CommandUsage> {
	let word = line.trim_start().split_whitespace().next().unwrap_or("").to_ascii_lowercase();
	COMMANDS.iter().filter(move |command| command.name.starts_with(&word))
}

fn required<'a>(command: &'static str, expected: &'static str, arg: &'a str) -> Result<&'a str, CommandLineError> {
	if arg.is_empty() {
		Err(CommandLineError::MissingArgument { command, expected })
	} else {
		Ok(arg)
	}
}

/// Resolves `font` arguments: a 1-based index into the configured
/// families, or a family name from that list.
fn font_family(arg: &str, config: &EditorConfig) -> Result<String, CommandLineError> {
	let families = &config.font_families;
	let by_index = arg.parse::<usize>().ok().and_then(|n| n.checked_sub(1)).and_then(|i| families.get(i));
	by_index
		.or_else(|| families.iter().find(|family| family.eq_ignore_ascii_case(arg)))
		.cloned()
		.ok_or_else(|| CommandLineError::InvalidArgument {
			what: "font",
			value: arg.to_string(),
		})
}

fn list(arg: &str) -> ListDialog {
	let (kind, items) = match arg.split_once(char::is_whitespace) {
		Some((first, rest)) if first.eq_ignore_ascii_case("numbered") => (ListKind::Numbered, rest),
		_ if arg.eq_ignore_ascii_case("numbered") => (ListKind::Numbered, ""),
		_ => (ListKind::Bulleted, arg),
	};
	ListDialog::new(kind, items.split('|'))
}

/// Parses one command line into a toolbar command.
pub fn parse_command_line(line: &str, config: &EditorConfig) -> Result<ToolbarCommand, CommandLineError> {
	let line = line.trim();
	let (name, arg) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
	let arg = arg.trim();

	let command = match name.to_ascii_lowercase().as_str() {
		"" => return Err(CommandLineError::Empty),
		"bold" => ToolbarCommand::Bold,
		"italic" => ToolbarCommand::Italic,
		"underline" => ToolbarCommand::Underline,
		"align" => {
			let arg = required("align", "a direction", arg)?;
			let alignment = Alignment::ALL
				.into_iter()
				.find(|alignment| alignment.css().eq_ignore_ascii_case(arg))
				.ok_or_else(|| CommandLineError::InvalidArgument {
					what: "alignment",
					value: arg.to_string(),
				})?;
			ToolbarCommand::Align(alignment)
		}
		"size" => {
			let arg = required("size", "a size", arg)?;
			let size = FontSize::ALL
				.into_iter()
				.find(|size| size.label().eq_ignore_ascii_case(arg))
				.ok_or_else(|| CommandLineError::InvalidArgument {
					what: "size",
					value: arg.to_string(),
				})?;
			ToolbarCommand::FontSize(size)
		}
		"font" => ToolbarCommand::FontFamily(font_family(required("font", "a font number or name", arg)?, config)?),
		"list" => ToolbarCommand::List(list(arg)),
		"link" => {
			let (url, text) = arg.split_once('|').unwrap_or((arg, ""));
			let url = required("link", "a URL", url.trim())?;
			ToolbarCommand::Link(LinkDialog::new(url, text.trim()))
		}
		"rule" => ToolbarCommand::HorizontalRule,
		"pagebreak" => ToolbarCommand::PageBreak,
		"keep" => ToolbarCommand::KeepTogether,
		"icon" => ToolbarCommand::Icon(required("icon", "an icon name", arg)?.to_string()),
		"signature" => ToolbarCommand::Signature,
		_ => return Err(CommandLineError::Unknown(name.to_string())),
	};
	Ok(command)
}
