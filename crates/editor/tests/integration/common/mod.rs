use std::cell::RefCell;
use std::rc::Rc;

use talewright_editor::{Clipboard, ClipboardError, SplitViewHost};
use talewright_primitives::Key;

/// Shared log of every `on_change` payload.
pub type ChangeLog = Rc<RefCell<Vec<String>>>;

pub fn host_with_log(content: &str) -> (SplitViewHost, ChangeLog) {
	let log: ChangeLog = Rc::default();
	let sink = Rc::clone(&log);
	let host = SplitViewHost::new(content, move |html: &str| sink.borrow_mut().push(html.to_string()));
	(host, log)
}

/// Feeds each character of `text` as a plain key press.
pub fn type_text(host: &mut SplitViewHost, text: &str) {
	for c in text.chars() {
		host.handle_key(Key::char(c));
	}
}

/// A clipboard the platform refuses to touch.
pub struct DeniedClipboard;

impl Clipboard for DeniedClipboard {
	fn read_text(&mut self) -> Result<String, ClipboardError> {
		Err(ClipboardError::Denied)
	}

	fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
		Err(ClipboardError::Denied)
	}
}
