//! Live preview rendering.
//!
//! The preview is the story HTML after allow-list cleaning, wrapped in a
//! container styled for the story category. [`layout`] turns that HTML into
//! styled lines for hosts that cannot render HTML themselves.

mod category;
mod clean;
mod layout;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

pub use category::{CategoryStyle, StoryCategory, UnknownCategory};
pub use clean::clean;
pub use layout::{LineKind, PreviewLine, Run, RunStyle, layout};

#[cfg(test)]
mod tests;

static ICON_TOKEN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\{\{icon:([A-Za-z0-9_-]+)\}\}").expect("valid icon token pattern"));

/// Rendered preview of a story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
	/// Cleaned HTML inside the category container.
	pub html: String,
	pub category: StoryCategory,
	body_start: usize,
	body_end: usize,
}

impl Preview {
	/// Cleaned story HTML without the category container.
	pub fn body(&self) -> &str {
		&self.html[self.body_start..self.body_end]
	}

	/// Styled lines of the cleaned body.
	pub fn lines(&self) -> Vec<PreviewLine> {
		layout(self.body())
	}
}

/// Cleans `content` and wraps it in the container for `category`.
pub fn render(content: &str, category: StoryCategory) -> Preview {
	let style = category.style();
	let open = format!(
		r#"<div class="story-preview story-preview--{}" style="font-family: {}; font-size: {}px; line-height: {};">"#,
		category.slug(),
		style.font_family,
		style.font_size_px,
		style.line_height,
	);
	let body = clean(content);

	let mut html = String::with_capacity(open.len() + body.len() + 6);
	html.push_str(&open);
	let body_start = html.len();
	html.push_str(&body);
	let body_end = html.len();
	html.push_str("</div>");

	Preview {
		html,
		category,
		body_start,
		body_end,
	}
}

/// Replaces `{{icon:name}}` tokens with the configured glyph.
///
/// Tokens naming an icon missing from `icons` are left as written.
pub fn substitute_icon_tokens(content: &str, icons: &BTreeMap<String, String>) -> String {
	ICON_TOKEN
		.replace_all(content, |caps: &Captures<'_>| match icons.get(&caps[1]) {
			Some(glyph) => glyph.clone(),
			None => caps[0].to_string(),
		})
		.into_owned()
}
