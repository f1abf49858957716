//! Flattens cleaned story HTML into styled lines for text-mode display.

use super::clean::{RawTag, attributes, is_void, match_tag};
use crate::html::decode_entities;

/// Inline formatting of a run of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RunStyle {
	pub bold: bool,
	pub italic: bool,
	pub underline: bool,
	pub strike: bool,
	/// Heading level 1..=6 when inside `<h1>`..`<h6>`.
	pub heading: Option<u8>,
	pub link: bool,
}

/// Text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
	pub text: String,
	pub style: RunStyle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineKind {
	#[default]
	Text,
	/// `<hr>`.
	Rule,
	/// `<div class="page-break">`.
	PageBreak,
}

/// One display line of the preview.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewLine {
	pub runs: Vec<Run>,
	pub kind: LineKind,
	pub centered: bool,
}

impl PreviewLine {
	/// Plain text of the line.
	pub fn text(&self) -> String {
		self.runs.iter().map(|run| run.text.as_str()).collect()
	}
}

const BLOCK_TAGS: &[&str] = &[
	"blockquote", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li", "ol", "p", "ul",
];

fn is_block(tag: &str) -> bool {
	BLOCK_TAGS.contains(&tag)
}

fn heading_level(tag: &str) -> Option<u8> {
	tag.strip_prefix('h')?.parse().ok().filter(|level| (1..=6).contains(level))
}

struct Frame {
	name: String,
	style: RunStyle,
	centered: bool,
}

struct ListState {
	ordered: bool,
	next: usize,
}

#[derive(Default)]
struct LineBuilder {
	lines: Vec<PreviewLine>,
	current: PreviewLine,
	stack: Vec<Frame>,
	lists: Vec<ListState>,
	pending_space: bool,
}

impl LineBuilder {
	fn style(&self) -> RunStyle {
		self.stack.last().map(|f| f.style).unwrap_or_default()
	}

	fn centered(&self) -> bool {
		self.stack.last().is_some_and(|f| f.centered)
	}

	/// Ends the current line if it has any content.
	fn soft_break(&mut self) {
		if !self.current.runs.is_empty() {
			self.lines.push(std::mem::take(&mut self.current));
		}
		self.pending_space = false;
	}

	/// Ends the current line unconditionally, as `<br>` does.
	fn hard_break(&mut self) {
		self.lines.push(std::mem::take(&mut self.current));
		self.pending_space = false;
	}

	fn push_special(&mut self, kind: LineKind) {
		self.soft_break();
		self.lines.push(PreviewLine {
			kind,
			..PreviewLine::default()
		});
	}

	fn append(&mut self, text: &str, style: RunStyle) {
		if text.is_empty() {
			return;
		}
		if self.current.runs.is_empty() {
			self.current.centered = self.centered();
		}
		match self.current.runs.last_mut() {
			Some(last) if last.style == style => last.text.push_str(text),
			_ => self.current.runs.push(Run {
				text: text.to_string(),
				style,
			}),
		}
	}

	fn ends_with_space(&self) -> bool {
		self.current.runs.last().is_some_and(|run| run.text.ends_with(' '))
	}

	/// Appends text with HTML whitespace collapsing.
	fn text(&mut self, raw: &str) {
		if raw.is_empty() {
			return;
		}
		let decoded = decode_entities(raw);
		let mut chunk = String::with_capacity(decoded.len());
		for ch in decoded.chars() {
			if ch.is_ascii_whitespace() {
				self.pending_space = true;
				continue;
			}
			if self.pending_space {
				let needs_space = match chunk.chars().last() {
					Some(last) => last != ' ',
					None => !self.current.runs.is_empty() && !self.ends_with_space(),
				};
				if needs_space {
					chunk.push(' ');
				}
				self.pending_space = false;
			}
			chunk.push(ch);
		}
		self.append(&chunk, self.style());
	}

	fn list_marker(&mut self) -> String {
		let indent = "  ".repeat(self.lists.len().saturating_sub(1));
		match self.lists.last_mut() {
			Some(list) if list.ordered => {
				let n = list.next;
				list.next += 1;
				format!("{indent}{n}. ")
			}
			_ => format!("{indent}• "),
		}
	}

	fn open(&mut self, tag: &RawTag<'_>) {
		let name = tag.name.as_str();
		let attrs: Vec<(String, String)> = attributes(tag.attrs).collect();
		let attr = |key: &str| attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str());

		match name {
			"br" => {
				self.hard_break();
				return;
			}
			"hr" => {
				self.push_special(LineKind::Rule);
				return;
			}
			"img" => {
				if let Some(alt) = attr("alt").filter(|alt| !alt.is_empty()) {
					self.append(&format!("[{alt}]"), self.style());
				}
				return;
			}
			_ => {}
		}

		if is_block(name) {
			self.soft_break();
		}
		if name == "div" && attr("class").is_some_and(|c| c.split_ascii_whitespace().any(|c| c == "page-break")) {
			self.push_special(LineKind::PageBreak);
		}
		if matches!(name, "ul" | "ol") {
			self.lists.push(ListState {
				ordered: name == "ol",
				next: 1,
			});
		}

		let mut style = self.style();
		let mut centered = self.centered();
		match name {
			"strong" | "b" => style.bold = true,
			"em" | "i" => style.italic = true,
			"u" => style.underline = true,
			"s" => style.strike = true,
			"a" => style.link = true,
			_ => {
				if let Some(level) = heading_level(name) {
					style.heading = Some(level);
					style.bold = true;
				}
			}
		}
		if let Some(css) = attr("style") {
			for decl in css.split(';') {
				let Some((prop, value)) = decl.split_once(':') else {
					continue;
				};
				let value = value.trim().to_ascii_lowercase();
				match prop.trim().to_ascii_lowercase().as_str() {
					"text-align" if is_block(name) => centered = value == "center",
					"font-weight" => style.bold = value == "bold" || value.parse::<u16>().is_ok_and(|w| w >= 600),
					"font-style" => style.italic = value == "italic",
					_ => {}
				}
			}
		}

		if !is_void(name) && !tag.self_closing {
			self.stack.push(Frame {
				name: name.to_string(),
				style,
				centered,
			});
		}

		if name == "li" {
			let marker = self.list_marker();
			self.append(&marker, RunStyle::default());
		}
	}

	fn close(&mut self, name: &str) {
		let Some(pos) = self.stack.iter().rposition(|frame| frame.name == name) else {
			return;
		};
		self.stack.truncate(pos);
		if matches!(name, "ul" | "ol") {
			self.lists.pop();
		}
		if is_block(name) {
			self.soft_break();
		}
	}

	fn finish(mut self) -> Vec<PreviewLine> {
		self.soft_break();
		self.lines
	}
}

/// Lays out cleaned HTML as styled lines.
///
/// Block elements start new lines, `<br>` always ends one, list items get a
/// bullet or number and whitespace collapses as in a browser. Unclosed tags
/// style everything up to the end of input.
pub fn layout(html: &str) -> Vec<PreviewLine> {
	let mut builder = LineBuilder::default();
	let mut rest = html;

	while let Some(lt) = rest.find('<') {
		builder.text(&rest[..lt]);
		let tail = &rest[lt..];

		if tail.starts_with("<!--") {
			let end = tail.find("-->").map_or(tail.len(), |e| e + 3);
			rest = &tail[end..];
			continue;
		}

		match match_tag(tail) {
			Some(tag) => {
				rest = &tail[tag.len..];
				if tag.closing {
					builder.close(&tag.name);
				} else {
					builder.open(&tag);
				}
			}
			None => {
				builder.text("<");
				rest = &tail[1..];
			}
		}
	}
	builder.text(rest);
	builder.finish()
}
