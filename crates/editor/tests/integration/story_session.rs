use pretty_assertions::assert_eq;
use talewright_editor::preview::{self, LineKind};
use talewright_editor::toolbar::{FontSize, LinkDialog};
use talewright_editor::{KeyOutcome, StoryCategory, ToolbarCommand};
use talewright_primitives::{Key, KeyCode, Modifiers};

use crate::common::{host_with_log, type_text};

#[test]
fn write_format_and_preview_a_story() {
	let (mut host, log) = host_with_log("");
	let mut session = host.attach();

	type_text(&mut session, "Moon");
	session.select(0, 4);
	session.apply(&ToolbarCommand::FontSize(FontSize::H1)).unwrap();
	session.handle_key(Key::new(KeyCode::End));
	session.handle_key(Key::new(KeyCode::Enter));
	type_text(&mut session, "Goodnight");
	session.handle_key(Key::char('m').with_modifiers(Modifiers::CTRL.alt()));
	session.apply(&ToolbarCommand::HorizontalRule).unwrap();
	drop(session);

	let expected = "<span style=\"font-size: 32px; font-weight: 700;\">Moon</span>\nGoodnight—<hr>";
	assert_eq!(host.content(), expected);
	assert_eq!(log.borrow().last().map(String::as_str), Some(expected));

	let lines = host.preview().lines();
	assert_eq!(lines[0].text(), "Moon Goodnight—");
	assert!(lines[0].runs[0].style.bold);
	assert_eq!(lines[1].kind, LineKind::Rule);
}

#[test]
fn every_change_reaches_the_owner_in_order() {
	let (mut host, log) = host_with_log("ab");
	host.select(1, 1);
	let mut session = host.attach();
	session.handle_key(Key::new(KeyCode::Tab));
	session.handle_key(Key::ctrl('b'));
	session.handle_key(Key::new(KeyCode::Backspace));
	drop(session);

	assert_eq!(*log.borrow(), ["a  b", "a  <strong></strong>b", "a  <strong</strong>b"]);
}

#[test]
fn link_then_sanitized_preview() {
	let (mut host, _) = host_with_log("visit the moon");
	host.select(10, 14);
	host.attach()
		.apply(&ToolbarCommand::Link(LinkDialog::new("https://moon.example", "")))
		.unwrap();

	let preview = host.with_category(StoryCategory::Adventure).preview();
	assert!(preview.html.starts_with(r#"<div class="story-preview story-preview--adventure""#));
	assert_eq!(
		preview.body(),
		r#"visit the <a href="https://moon.example" target="_blank" rel="noopener noreferrer">moon</a>"#
	);
	assert!(preview.lines()[0].runs[1].style.link);
}

#[test]
fn hostile_markup_never_reaches_preview() {
	let (mut host, _) = host_with_log("");
	host.set_content(r#"<p onmouseover="x()">hi</p><script>steal()</script><a href="javascript:x()">y</a>"#);
	let body = preview::render(&host.content(), StoryCategory::General).body().to_string();
	assert_eq!(body, "<p>hi</p><a>y</a>");
	assert_eq!(host.preview().body(), body);
}

#[test]
fn unbound_control_keys_fall_through() {
	let (mut host, log) = host_with_log("x");
	let outcome = host.attach().handle_key(Key::ctrl('q'));
	assert_eq!(outcome, KeyOutcome::Ignored);
	assert!(log.borrow().is_empty());
}
