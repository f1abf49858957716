//! Values collected by the list and link dialogs.

use crate::html::{escape_attr, escape_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListKind {
	#[default]
	Bulleted,
	Numbered,
}

impl ListKind {
	pub fn tag(self) -> &'static str {
		match self {
			ListKind::Bulleted => "ul",
			ListKind::Numbered => "ol",
		}
	}
}

/// Contents of the list dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListDialog {
	pub kind: ListKind,
	/// One entry per item. Items are HTML source and are inserted as written.
	pub items: Vec<String>,
}

impl ListDialog {
	pub fn new(kind: ListKind, items: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self {
			kind,
			items: items.into_iter().map(Into::into).collect(),
		}
	}

	/// List markup with one `<li>` per non-blank item.
	///
	/// With no non-blank items a single empty item is produced.
	pub fn to_html(&self) -> String {
		let tag = self.kind.tag();
		let mut items: Vec<&str> = self.items.iter().map(|item| item.trim()).filter(|item| !item.is_empty()).collect();
		if items.is_empty() {
			items.push("");
		}

		let mut html = format!("<{tag}>\n");
		for item in items {
			html.push_str("  <li>");
			html.push_str(item);
			html.push_str("</li>\n");
		}
		html.push_str(&format!("</{tag}>"));
		html
	}
}

/// Contents of the link dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkDialog {
	pub url: String,
	/// Visible text. When empty, the selection (or the URL) is used.
	pub text: String,
}

impl LinkDialog {
	pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			text: text.into(),
		}
	}

	/// Opening anchor tag for `url`, or `None` when the URL is blank.
	pub(crate) fn open_tag(&self) -> Option<String> {
		let url = self.url.trim();
		if url.is_empty() {
			return None;
		}
		Some(format!(
			r#"<a href="{}" target="_blank" rel="noopener noreferrer">"#,
			escape_attr(url)
		))
	}

	/// Escaped link text, falling back to the URL.
	pub(crate) fn label(&self) -> String {
		let text = self.text.trim();
		let label = if text.is_empty() { self.url.trim() } else { text };
		escape_text(label).into_owned()
	}
}
