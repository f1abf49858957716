use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use talewright_primitives::{Key, KeyCode, Modifiers};

use super::*;
use crate::preview::LineKind;

fn recording_host(content: &str) -> (SplitViewHost, Rc<RefCell<Vec<String>>>) {
	let changes = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&changes);
	let host = SplitViewHost::new(content, move |html: &str| sink.borrow_mut().push(html.to_string()));
	(host, changes)
}

#[test]
fn shortcut_notifies_owner() {
	let (mut host, changes) = recording_host("Hello world");
	host.select(0, 5);
	let mut session = host.attach();
	let outcome = session.handle_key(Key::ctrl('b'));
	assert_eq!(outcome, KeyOutcome::Shortcut(Dispatch::Applied { changed: true }));
	drop(session);
	assert_eq!(*changes.borrow(), ["<strong>Hello</strong> world"]);
}

#[test]
fn typing_notifies_on_every_edit() {
	let (mut host, changes) = recording_host("");
	let mut session = host.attach();
	session.handle_key(Key::char('h'));
	session.handle_key(Key::char('i'));
	session.handle_key(Key::new(KeyCode::Left));
	drop(session);
	assert_eq!(*changes.borrow(), ["h", "hi"]);
}

#[test]
fn detached_host_ignores_input() {
	let (mut host, changes) = recording_host("abc");
	assert!(!host.is_attached());
	assert_eq!(host.handle_key(Key::char('x')), KeyOutcome::Ignored);
	assert_eq!(host.apply(&ToolbarCommand::HorizontalRule), Ok(false));
	assert_eq!(host.content(), "abc");
	assert!(changes.borrow().is_empty());
}

#[test]
fn dropping_attachment_detaches() {
	let (mut host, _) = recording_host("");
	{
		let session = host.attach();
		assert!(session.is_attached());
	}
	assert!(!host.is_attached());
	assert_eq!(host.handle_key(Key::char('x')), KeyOutcome::Ignored);
}

#[test]
fn set_content_does_not_notify() {
	let (mut host, changes) = recording_host("old");
	host.set_content("<p>new</p>");
	assert_eq!(host.content(), "<p>new</p>");
	assert!(changes.borrow().is_empty());
}

#[test]
fn save_and_help_callbacks() {
	let saved = Rc::new(RefCell::new(None));
	let helped = Rc::new(RefCell::new(0));
	let (saved_sink, helped_sink) = (Rc::clone(&saved), Rc::clone(&helped));

	let mut host = SplitViewHost::new("<p>story</p>", |_: &str| {})
		.with_on_save(move |html: &str| *saved_sink.borrow_mut() = Some(html.to_string()))
		.with_on_help(move || *helped_sink.borrow_mut() += 1);
	let mut session = host.attach();

	assert_eq!(session.handle_key(Key::ctrl('s')), KeyOutcome::Shortcut(Dispatch::Save));
	assert_eq!(session.handle_key(Key::ctrl('/')), KeyOutcome::Shortcut(Dispatch::Help));
	drop(session);

	assert_eq!(saved.borrow().as_deref(), Some("<p>story</p>"));
	assert_eq!(*helped.borrow(), 1);
}

#[test]
fn save_without_handler_is_still_consumed() {
	let (mut host, changes) = recording_host("x");
	let outcome = host.attach().handle_key(Key::ctrl('s'));
	assert!(outcome.is_handled());
	assert!(changes.borrow().is_empty());
}

#[test]
fn toolbar_command_notifies() {
	let (mut host, changes) = recording_host("Title");
	host.select(0, 5);
	let changed = host.attach().apply(&ToolbarCommand::Bold);
	assert_eq!(changed, Ok(true));
	assert_eq!(*changes.borrow(), ["<strong>Title</strong>"]);
}

#[test]
fn preview_override_replaces_preview_only() {
	let (mut host, _) = recording_host("<p>draft</p>");
	host.set_preview_content(Some("<p>published</p>".to_string()));
	assert_eq!(host.preview().body(), "<p>published</p>");
	assert_eq!(host.content(), "<p>draft</p>");

	host.set_preview_content(None);
	assert_eq!(host.preview().body(), "<p>draft</p>");
}

#[test]
fn preview_uses_category_and_icons() {
	let (host, _) = recording_host("Night {{icon:moon}} {{icon:owl}}");
	let host = host.with_category(StoryCategory::Poem);
	let preview = host.preview();
	assert_eq!(preview.category, StoryCategory::Poem);
	assert_eq!(preview.body(), "Night 🌙 {{icon:owl}}");
}

#[test]
fn category_falls_back_to_config() {
	let (host, _) = recording_host("");
	assert_eq!(host.category(), StoryCategory::Bedtime);
}

#[test]
fn split_is_clamped() {
	let (mut host, _) = recording_host("");
	assert_eq!(host.split_percent(), 50);
	host.set_split_percent(5);
	assert_eq!(host.split_percent(), 20);
	host.resize_split(100);
	assert_eq!(host.split_percent(), 80);
	host.resize_split(-10);
	assert_eq!(host.split_percent(), 70);
}

#[test]
fn configured_split_is_clamped() {
	let config = EditorConfig {
		split_percent: 150,
		..EditorConfig::default()
	};
	let host = SplitViewHost::new("", |_: &str| {}).with_config(config);
	assert_eq!(host.split_percent(), 80);

	let config = EditorConfig {
		split_percent: 0,
		..EditorConfig::default()
	};
	let host = SplitViewHost::new("", |_: &str| {}).with_config(config);
	assert_eq!(host.split_percent(), 20);
}

#[test]
fn panes_scroll_independently() {
	let (mut host, _) = recording_host("");
	host.scroll_by(Pane::Editor, 5);
	host.scroll_by(Pane::Preview, 2);
	host.scroll_by(Pane::Preview, -10);
	assert_eq!(host.scroll(Pane::Editor), 5);
	assert_eq!(host.scroll(Pane::Preview), 0);

	host.set_scroll(Pane::Preview, 7);
	host.scroll_to_top(Pane::Editor);
	assert_eq!(host.scroll(Pane::Editor), 0);
	assert_eq!(host.scroll(Pane::Preview), 7);
}

#[test]
fn caret_is_kept_visible() {
	let (mut host, _) = recording_host("1\n2\n3\n4\n5\n6");
	host.select(10, 10);
	host.ensure_caret_visible(3);
	assert_eq!(host.scroll(Pane::Editor), 3);
	host.select(0, 0);
	host.ensure_caret_visible(3);
	assert_eq!(host.scroll(Pane::Editor), 0);
}

#[test]
fn ctrl_shift_letter_reaches_shortcut() {
	let (mut host, _) = recording_host("<b>x</b>");
	host.select(0, 8);
	let key = Key::char('X').with_modifiers(Modifiers::CTRL.shift());
	host.attach().handle_key(key);
	assert_eq!(host.content(), "x");
}

#[test]
fn preview_layout_reflects_content() {
	let (host, _) = recording_host("<p>a</p><hr>");
	let lines = host.preview().lines();
	assert_eq!(lines[0].text(), "a");
	assert_eq!(lines[1].kind, LineKind::Rule);
}
