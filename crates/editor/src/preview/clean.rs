//! Allow-list HTML cleaning for the live preview.
//!
//! Allowed tags are re-emitted with only allowed attributes. Script-like
//! elements are removed together with their content. Anything else that
//! looks like a tag is escaped so it shows up as text.

use std::sync::LazyLock;

use regex::Regex;

use crate::html::{decode_entities, escape_attr, escape_text};

static TAG: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r#"^<(/?)([A-Za-z][A-Za-z0-9]*)((?:\s+[^\s"'>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'>]+))?)*)\s*(/?)>"#,
	)
	.expect("valid tag pattern")
});

static ATTR: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#).expect("valid attribute pattern")
});

const ALLOWED_TAGS: &[&str] = &[
	"a", "b", "blockquote", "br", "div", "em", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "i", "img", "li", "ol",
	"p", "s", "small", "span", "strong", "sub", "sup", "u", "ul",
];

const VOID_TAGS: &[&str] = &["br", "hr", "img"];

/// Elements dropped together with everything up to their closing tag.
const DROPPED_WITH_CONTENT: &[&str] = &["script", "style", "iframe", "object", "embed", "noscript"];

const ALLOWED_ATTRS: &[&str] = &["style", "class", "href", "target", "rel", "title", "src", "alt"];

const UNSAFE_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

pub(crate) fn is_void(tag: &str) -> bool {
	VOID_TAGS.contains(&tag)
}

/// A tag recognized at the start of some input.
pub(crate) struct RawTag<'a> {
	pub closing: bool,
	pub name: String,
	pub attrs: &'a str,
	pub self_closing: bool,
	/// Length in bytes of the whole tag text.
	pub len: usize,
}

/// Matches a tag at the very start of `input`.
pub(crate) fn match_tag(input: &str) -> Option<RawTag<'_>> {
	let caps = TAG.captures(input)?;
	let whole = caps.get(0)?;
	Some(RawTag {
		closing: caps.get(1).is_some_and(|m| !m.as_str().is_empty()),
		name: caps.get(2)?.as_str().to_ascii_lowercase(),
		attrs: caps.get(3).map_or("", |m| m.as_str()),
		self_closing: caps.get(4).is_some_and(|m| !m.as_str().is_empty()),
		len: whole.end(),
	})
}

/// Iterates `(name, value)` pairs of an attribute string. Names are lowercased.
pub(crate) fn attributes(attrs: &str) -> impl Iterator<Item = (String, String)> + '_ {
	ATTR.captures_iter(attrs).filter_map(|caps| {
		let name = caps.get(1)?.as_str().to_ascii_lowercase();
		let value = caps
			.get(2)
			.or_else(|| caps.get(3))
			.or_else(|| caps.get(4))
			.map_or(String::new(), |m| decode_entities(m.as_str()).into_owned());
		Some((name, value))
	})
}

fn is_safe_url(value: &str) -> bool {
	let compact: String = value
		.chars()
		.filter(|c| !c.is_whitespace() && !c.is_control())
		.collect::<String>()
		.to_ascii_lowercase();
	!UNSAFE_SCHEMES.iter().any(|scheme| compact.starts_with(scheme))
}

fn is_safe_style(value: &str) -> bool {
	let lower = value.to_ascii_lowercase();
	!lower.contains("expression(") && !lower.contains("javascript:") && !lower.contains("url(")
}

fn keep_attr(name: &str, value: &str) -> bool {
	if !ALLOWED_ATTRS.contains(&name) {
		return false;
	}
	match name {
		"href" | "src" => is_safe_url(value),
		"style" => is_safe_style(value),
		"target" => matches!(value, "_blank" | "_self"),
		_ => true,
	}
}

fn rebuild(tag: &RawTag<'_>, out: &mut String) {
	if tag.closing {
		if !is_void(&tag.name) {
			out.push_str("</");
			out.push_str(&tag.name);
			out.push('>');
		}
		return;
	}

	out.push('<');
	out.push_str(&tag.name);
	for (name, value) in attributes(tag.attrs) {
		if keep_attr(&name, &value) {
			out.push(' ');
			out.push_str(&name);
			out.push_str("=\"");
			out.push_str(&escape_attr(&value));
			out.push('"');
		}
	}
	out.push('>');
}

fn push_text(text: &str, out: &mut String) {
	out.push_str(&text.replace('>', "&gt;"));
}

/// Cleans an HTML fragment for display.
///
/// Text and existing entity references pass through. Stray `<` and `>`
/// characters that do not form a tag are escaped.
pub fn clean(html: &str) -> String {
	let mut out = String::with_capacity(html.len());
	let mut rest = html;
	let mut dropping: Option<String> = None;

	while let Some(lt) = rest.find('<') {
		if dropping.is_none() {
			push_text(&rest[..lt], &mut out);
		}
		let tail = &rest[lt..];

		if tail.starts_with("<!--") {
			let end = tail.find("-->").map_or(tail.len(), |e| e + 3);
			rest = &tail[end..];
			continue;
		}

		let Some(tag) = match_tag(tail) else {
			if dropping.is_none() {
				out.push_str("&lt;");
			}
			rest = &tail[1..];
			continue;
		};
		rest = &tail[tag.len..];

		if let Some(element) = &dropping {
			if tag.closing && tag.name == *element {
				dropping = None;
			}
			continue;
		}

		if DROPPED_WITH_CONTENT.contains(&tag.name.as_str()) {
			if !tag.closing && !tag.self_closing {
				dropping = Some(tag.name);
			}
			continue;
		}

		if ALLOWED_TAGS.contains(&tag.name.as_str()) {
			rebuild(&tag, &mut out);
		} else {
			out.push_str(&escape_text(&tail[..tag.len]));
		}
	}

	if dropping.is_none() {
		push_text(rest, &mut out);
	}
	out
}
