use pretty_assertions::assert_eq;
use rstest::rstest;
use talewright_primitives::range::Range;

use super::*;

fn selected(content: &str, from: usize, to: usize) -> StoryBuffer {
	let mut buf = StoryBuffer::from_content(content);
	buf.select(from, to);
	buf
}

fn apply(command: ToolbarCommand, buf: &mut StoryBuffer) -> Result<bool, ToolbarError> {
	command.apply(buf, &EditorConfig::default())
}

#[rstest]
#[case::h1(FontSize::H1, r#"<span style="font-size: 32px; font-weight: 700;">Title</span>"#)]
#[case::h2(FontSize::H2, r#"<span style="font-size: 26px; font-weight: 700;">Title</span>"#)]
#[case::h3(FontSize::H3, r#"<span style="font-size: 22px; font-weight: 600;">Title</span>"#)]
#[case::large(FontSize::Large, r#"<span style="font-size: 18px; font-weight: 400;">Title</span>"#)]
#[case::normal(FontSize::Normal, r#"<span style="font-size: 16px; font-weight: 400;">Title</span>"#)]
#[case::small(FontSize::Small, r#"<span style="font-size: 13px; font-weight: 400;">Title</span>"#)]
fn font_size_wraps_with_static_table(#[case] size: FontSize, #[case] expected: &str) {
	let mut buf = selected("Title", 0, 5);
	assert_eq!(apply(ToolbarCommand::FontSize(size), &mut buf), Ok(true));
	assert_eq!(buf.content(), expected);
	assert_eq!(buf.selection(), Range::new(0, expected.chars().count()));
}

#[rstest]
#[case::bold(ToolbarCommand::Bold, "<strong>x</strong>")]
#[case::italic(ToolbarCommand::Italic, "<em>x</em>")]
#[case::underline(ToolbarCommand::Underline, "<u>x</u>")]
#[case::right(ToolbarCommand::Align(Alignment::Right), r#"<div style="text-align: right;">x</div>"#)]
#[case::justify(ToolbarCommand::Align(Alignment::Justify), r#"<div style="text-align: justify;">x</div>"#)]
#[case::keep_together(ToolbarCommand::KeepTogether, r#"<div class="keep-together">x</div>"#)]
fn wrapping_commands(#[case] command: ToolbarCommand, #[case] expected: &str) {
	let mut buf = selected("x", 0, 1);
	apply(command, &mut buf).unwrap();
	assert_eq!(buf.content(), expected);
}

#[rstest]
#[case::rule(ToolbarCommand::HorizontalRule, "a<hr>b")]
#[case::page_break(ToolbarCommand::PageBreak, r#"a<div class="page-break"></div>b"#)]
#[case::icon(ToolbarCommand::Icon("star".into()), "a{{icon:star}}b")]
#[case::signature(ToolbarCommand::Signature, r#"a<p class="signature">With love, The Storyteller</p>b"#)]
fn inserting_commands(#[case] command: ToolbarCommand, #[case] expected: &str) {
	let mut buf = StoryBuffer::from_content("ab");
	buf.set_caret(1);
	apply(command, &mut buf).unwrap();
	assert_eq!(buf.content(), expected);
	assert_eq!(buf.caret(), expected.chars().count() - 1);
}

#[test]
fn signature_comes_from_config() {
	let config = EditorConfig {
		signature: "<p>Bye</p>".to_string(),
		..EditorConfig::default()
	};
	let mut buf = StoryBuffer::new();
	ToolbarCommand::Signature.apply(&mut buf, &config).unwrap();
	assert_eq!(buf.content(), "<p>Bye</p>");
}

#[test]
fn invalid_icon_name_is_rejected() {
	let mut buf = StoryBuffer::new();
	assert_eq!(
		apply(ToolbarCommand::Icon("a b".into()), &mut buf),
		Err(ToolbarError::InvalidIconName("a b".into()))
	);
	assert!(buf.is_empty());
}

#[test]
fn font_family_replaces_instead_of_nesting() {
	let mut buf = selected("Once", 0, 4);
	apply(ToolbarCommand::FontFamily("Verdana".into()), &mut buf).unwrap();
	apply(ToolbarCommand::FontFamily("Times New Roman".into()), &mut buf).unwrap();
	assert_eq!(
		buf.content(),
		r#"<span style="font-family: 'Times New Roman';">Once</span>"#
	);
}

#[test]
fn list_drops_blank_items() {
	let mut buf = StoryBuffer::new();
	let dialog = ListDialog::new(ListKind::Numbered, ["first", "  ", "second "]);
	apply(ToolbarCommand::List(dialog), &mut buf).unwrap();
	assert_eq!(buf.content(), "<ol>\n  <li>first</li>\n  <li>second</li>\n</ol>");
}

#[test]
fn empty_list_gets_one_item() {
	let dialog = ListDialog::new(ListKind::Bulleted, Vec::<String>::new());
	assert_eq!(dialog.to_html(), "<ul>\n  <li></li>\n</ul>");
}

#[test]
fn list_is_inserted_once_at_selection_start() {
	let mut buf = selected("keep", 0, 4);
	let dialog = ListDialog::new(ListKind::Bulleted, ["a"]);
	apply(ToolbarCommand::List(dialog), &mut buf).unwrap();
	assert_eq!(buf.content(), "<ul>\n  <li>a</li>\n</ul>keep");
}

#[test]
fn link_with_empty_url_fails() {
	let mut buf = StoryBuffer::from_content("x");
	let result = apply(ToolbarCommand::Link(LinkDialog::new("  ", "text")), &mut buf);
	assert_eq!(result, Err(ToolbarError::EmptyUrl));
	assert_eq!(buf.content(), "x");
}

#[test]
fn link_wraps_selection_when_text_empty() {
	let mut buf = selected("the moon", 4, 8);
	apply(ToolbarCommand::Link(LinkDialog::new("https://moon.example", "")), &mut buf).unwrap();
	assert_eq!(
		buf.content(),
		r#"the <a href="https://moon.example" target="_blank" rel="noopener noreferrer">moon</a>"#
	);
}

#[test]
fn link_inserts_escaped_text() {
	let mut buf = StoryBuffer::new();
	let dialog = LinkDialog::new(r#"https://x.example/?a=1&b="2""#, "Tom & Jerry");
	apply(ToolbarCommand::Link(dialog), &mut buf).unwrap();
	assert_eq!(
		buf.content(),
		r#"<a href="https://x.example/?a=1&amp;b=&quot;2&quot;" target="_blank" rel="noopener noreferrer">Tom &amp; Jerry</a>"#
	);
}

#[test]
fn link_without_text_or_selection_shows_url() {
	let mut buf = StoryBuffer::new();
	apply(ToolbarCommand::Link(LinkDialog::new("https://a.example", "")), &mut buf).unwrap();
	assert_eq!(
		buf.content(),
		r#"<a href="https://a.example" target="_blank" rel="noopener noreferrer">https://a.example</a>"#
	);
}

#[test]
fn every_size_has_a_table_entry() {
	for size in FontSize::ALL {
		assert!(FONT_SIZES.iter().any(|(s, ..)| *s == size), "{size:?}");
	}
}

fn parse(line: &str) -> Result<ToolbarCommand, CommandLineError> {
	parse_command_line(line, &EditorConfig::default())
}

#[rstest]
#[case::bold("bold", ToolbarCommand::Bold)]
#[case::mixed_case("Italic", ToolbarCommand::Italic)]
#[case::align(" align  center ", ToolbarCommand::Align(Alignment::Center))]
#[case::size("size h2", ToolbarCommand::FontSize(FontSize::H2))]
#[case::size_label("size Small", ToolbarCommand::FontSize(FontSize::Small))]
#[case::rule("rule", ToolbarCommand::HorizontalRule)]
#[case::page_break("pagebreak", ToolbarCommand::PageBreak)]
#[case::keep("keep", ToolbarCommand::KeepTogether)]
#[case::icon("icon star", ToolbarCommand::Icon("star".to_string()))]
#[case::signature("signature", ToolbarCommand::Signature)]
#[case::link("link https://a.example | our site", ToolbarCommand::Link(LinkDialog::new("https://a.example", "our site")))]
#[case::bare_link("link https://a.example", ToolbarCommand::Link(LinkDialog::new("https://a.example", "")))]
fn command_lines_parse(#[case] line: &str, #[case] expected: ToolbarCommand) {
	assert_eq!(parse(line), Ok(expected));
}

#[rstest]
#[case::by_number("font 2", "Comic Sans MS")]
#[case::by_name("font verdana", "Verdana")]
#[case::name_with_spaces("font Times New Roman", "Times New Roman")]
fn font_comes_from_configured_families(#[case] line: &str, #[case] family: &str) {
	assert_eq!(parse(line), Ok(ToolbarCommand::FontFamily(family.to_string())));
}

#[test]
fn font_outside_configured_families_is_rejected() {
	let invalid = |value: &str| {
		Err(CommandLineError::InvalidArgument {
			what: "font",
			value: value.to_string(),
		})
	};
	assert_eq!(parse("font Papyrus"), invalid("Papyrus"));
	assert_eq!(parse("font 0"), invalid("0"));
	assert_eq!(parse("font 5"), invalid("5"));

	let config = EditorConfig {
		font_families: vec!["Papyrus".to_string()],
		..EditorConfig::default()
	};
	assert_eq!(
		parse_command_line("font 1", &config),
		Ok(ToolbarCommand::FontFamily("Papyrus".to_string()))
	);
}

#[test]
fn list_lines_insert_items() {
	let mut buf = StoryBuffer::new();
	apply(parse("list numbered wake up | brush teeth |").unwrap(), &mut buf).unwrap();
	assert_eq!(buf.content(), "<ol>\n  <li>wake up</li>\n  <li>brush teeth</li>\n</ol>");

	let mut buf = StoryBuffer::new();
	apply(parse("list apples | pears").unwrap(), &mut buf).unwrap();
	assert_eq!(buf.content(), "<ul>\n  <li>apples</li>\n  <li>pears</li>\n</ul>");

	let mut buf = StoryBuffer::new();
	apply(parse("list").unwrap(), &mut buf).unwrap();
	assert_eq!(buf.content(), "<ul>\n  <li></li>\n</ul>");
}

#[rstest]
#[case::empty("   ", CommandLineError::Empty)]
#[case::unknown("sparkle", CommandLineError::Unknown("sparkle".to_string()))]
#[case::no_url("link  | text", CommandLineError::MissingArgument { command: "link", expected: "a URL" })]
#[case::no_size("size", CommandLineError::MissingArgument { command: "size", expected: "a size" })]
#[case::bad_size("size huge", CommandLineError::InvalidArgument { what: "size", value: "huge".to_string() })]
#[case::bad_alignment("align middle", CommandLineError::InvalidArgument { what: "alignment", value: "middle".to_string() })]
#[case::no_icon("icon", CommandLineError::MissingArgument { command: "icon", expected: "an icon name" })]
fn bad_command_lines_are_rejected(#[case] line: &str, #[case] expected: CommandLineError) {
	assert_eq!(parse(line), Err(expected));
}

#[test]
fn completions_filter_by_prefix() {
	let names: Vec<&str> = completions("sig").map(|command| command.name).collect();
	assert_eq!(names, ["signature"]);
	let names: Vec<&str> = completions("  l").map(|command| command.name).collect();
	assert_eq!(names, ["list", "link"]);
	assert_eq!(completions("").count(), COMMANDS.len());
	assert_eq!(completions("zzz").count(), 0);
}
