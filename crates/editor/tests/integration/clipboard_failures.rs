use pretty_assertions::assert_eq;
use talewright_editor::{Dispatch, KeyOutcome, MemoryClipboard};
use talewright_primitives::Key;

use crate::common::{DeniedClipboard, host_with_log};

#[test]
fn denied_clipboard_is_swallowed() {
	let (host, log) = host_with_log("Hello world");
	let mut host = host.with_clipboard(DeniedClipboard);
	host.select(0, 5);

	let mut session = host.attach();
	for key in [Key::ctrl('c'), Key::ctrl('x'), Key::ctrl('v')] {
		let outcome = session.handle_key(key);
		assert_eq!(outcome, KeyOutcome::Shortcut(Dispatch::Applied { changed: false }));
	}
	drop(session);

	assert_eq!(host.content(), "Hello world");
	assert!(log.borrow().is_empty());
}

#[test]
fn cut_and_paste_round_trip_through_clipboard() {
	let (host, log) = host_with_log("Hello world");
	let mut host = host.with_clipboard(MemoryClipboard::new());
	host.select(0, 6);

	let mut session = host.attach();
	session.handle_key(Key::ctrl('x'));
	session.select(5, 5);
	session.handle_key(Key::ctrl('v'));
	drop(session);

	assert_eq!(host.content(), "worldHello ");
	assert_eq!(*log.borrow(), ["world", "worldHello "]);
}
