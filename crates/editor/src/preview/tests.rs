use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

#[rstest]
#[case::script_removed("<p>Hi</p><script>alert(1)</script>", "<p>Hi</p>")]
#[case::unclosed_script("a<script>b", "a")]
#[case::event_handler(r#"<p onclick="steal()">x</p>"#, "<p>x</p>")]
#[case::javascript_href(r#"<a href="javascript:alert(1)" onclick="x()">go</a>"#, "<a>go</a>")]
#[case::spaced_scheme(r#"<a href=" JavaScript:alert(1)">go</a>"#, "<a>go</a>")]
#[case::safe_link(
	r#"<a href="https://example.org" target="_blank" rel="noopener noreferrer">go</a>"#,
	r#"<a href="https://example.org" target="_blank" rel="noopener noreferrer">go</a>"#
)]
#[case::unknown_tag("<blink>hey</blink>", "&lt;blink&gt;hey&lt;/blink&gt;")]
#[case::stray_brackets("a < b > c", "a &lt; b &gt; c")]
#[case::comment("x<!-- note -->y", "xy")]
#[case::unsafe_style(r#"<span style="background: url(evil)">t</span>"#, "<span>t</span>")]
#[case::void_close("a</br>b", "ab")]
#[case::uppercase("<STRONG>x</STRONG>", "<strong>x</strong>")]
#[case::iframe(r#"<iframe src="https://evil"></iframe>after"#, "after")]
#[case::entity_in_attr(r#"<a title="Tom &amp; Jerry">t</a>"#, r#"<a title="Tom &amp; Jerry">t</a>"#)]
fn clean_cases(#[case] input: &str, #[case] expected: &str) {
	assert_eq!(clean(input), expected);
}

#[test]
fn clean_keeps_story_markup() {
	let story = r#"<h1>Title</h1><div style="text-align: center;"><p>Once <em>upon</em> a time&mdash;</p></div><hr><div class="page-break"></div>"#;
	assert_eq!(clean(story), story);
}

#[test]
fn render_wraps_in_category_container() {
	let preview = render("<p>Hi</p>", StoryCategory::Bedtime);
	assert_eq!(
		preview.html,
		r#"<div class="story-preview story-preview--bedtime" style="font-family: Georgia, serif; font-size: 19px; line-height: 1.8;"><p>Hi</p></div>"#
	);
	assert_eq!(preview.body(), "<p>Hi</p>");
	assert_eq!(preview.category, StoryCategory::Bedtime);
}

#[test]
fn render_cleans_before_wrapping() {
	let preview = render("<p><script>x()</script>ok</p>", StoryCategory::General);
	assert_eq!(preview.body(), "<p>ok</p>");
	assert!(preview.html.starts_with(r#"<div class="story-preview story-preview--general""#));
	assert_eq!(preview.lines()[0].text(), "ok");
}

#[test]
fn icon_tokens_substituted_from_table() {
	let icons = BTreeMap::from([("star".to_string(), "⭐".to_string())]);
	assert_eq!(
		substitute_icon_tokens("A {{icon:star}} and {{icon:ghost}}", &icons),
		"A ⭐ and {{icon:ghost}}"
	);
	assert_eq!(substitute_icon_tokens("{{icon:}}", &icons), "{{icon:}}");
}

#[test]
fn category_parsing() {
	assert_eq!("Poem".parse::<StoryCategory>(), Ok(StoryCategory::Poem));
	assert_eq!(" fable ".parse::<StoryCategory>(), Ok(StoryCategory::Fable));
	assert_eq!(
		"horror".parse::<StoryCategory>(),
		Err(UnknownCategory("horror".to_string()))
	);
	for category in StoryCategory::ALL {
		assert_eq!(category.to_string().parse::<StoryCategory>(), Ok(category));
	}
}

fn texts(html: &str) -> Vec<String> {
	layout(html).iter().map(PreviewLine::text).collect()
}

#[test]
fn layout_styles_inline_runs() {
	let lines = layout("<p>Hello <strong>brave</strong> world</p>");
	assert_eq!(lines.len(), 1);
	assert_eq!(lines[0].text(), "Hello brave world");

	let runs = &lines[0].runs;
	assert_eq!(runs.len(), 3);
	assert_eq!(runs[1].text, " brave");
	assert!(runs[1].style.bold);
	assert!(!runs[0].style.bold && !runs[2].style.bold);
}

#[test]
fn layout_blocks_and_breaks() {
	assert_eq!(texts("<p>one</p><p>two</p>"), ["one", "two"]);
	assert_eq!(texts("a<br><br>b"), ["a", "", "b"]);
	assert_eq!(texts("<p>\n  a\n  b  </p>"), ["a b"]);
}

#[test]
fn layout_lists() {
	assert_eq!(
		texts("<ol><li>One</li><li>Two</li></ol><ul><li>Dot</li></ul>"),
		["1. One", "2. Two", "• Dot"]
	);
	assert_eq!(texts("<ul><li>a<ul><li>b</li></ul></li></ul>"), ["• a", "  • b"]);
}

#[test]
fn layout_special_lines() {
	let lines = layout(r#"a<hr>b<div class="page-break"></div>"#);
	let kinds: Vec<LineKind> = lines.iter().map(|l| l.kind).collect();
	assert_eq!(kinds, [LineKind::Text, LineKind::Rule, LineKind::Text, LineKind::PageBreak]);
}

#[test]
fn layout_alignment_headings_and_entities() {
	let lines = layout(r#"<div style="text-align: center;">Title</div><h1>Big</h1><p>Tom &amp; Jerry</p>"#);
	assert!(lines[0].centered);
	assert_eq!(lines[1].runs[0].style.heading, Some(1));
	assert!(lines[1].runs[0].style.bold);
	assert!(!lines[1].centered);
	assert_eq!(lines[2].text(), "Tom & Jerry");
}

#[test]
fn layout_font_size_span_is_bold() {
	let lines = layout(r#"<span style="font-size: 32px; font-weight: 700;">Title</span>"#);
	assert!(lines[0].runs[0].style.bold);
}
