//! Split-pane terminal editor.

mod input;
mod palette;
mod render;
mod terminal;

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::Context;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyCode as TermKey, KeyEvent, KeyEventKind, KeyModifiers};
use talewright_editor::{EditorConfig, Pane, SplitViewHost, StoryCategory};
use tracing::{info, warn};

use self::palette::CommandLine;
use self::terminal::TerminalSession;
use crate::clipboard::SystemClipboard;


const SPLIT_STEP: i16 = 5;
const PAGE_LINES: isize = 10;

/// State shared between the host callbacks and the UI.
#[derive(Default)]
pub struct Shared {
	dirty: Cell<bool>,
	show_help: Cell<bool>,
	status: RefCell<String>,
}

impl Shared {
	fn set_status(&self, status: impl Into<String>) {
		*self.status.borrow_mut() = status.into();
	}
}

/// UI-only state.
pub struct Ui {
	pub path: PathBuf,
	pub focus: Pane,
	pub shared: Rc<Shared>,
	/// First visible column of the editor pane.
	pub hscroll: usize,
	/// Set after Ctrl+Q with unsaved changes; a second Ctrl+Q quits.
	pub quit_armed: bool,
	pub quit: bool,
	/// Open toolbar command line, if any.
	pub command_line: Option<CommandLine>,
	/// Whether the terminal reports modified keys distinctly.
	pub enhanced_keys: bool,
}

impl Ui {
	pub fn new(path: PathBuf, shared: Rc<Shared>, enhanced_keys: bool) -> Self {
		Self {
			path,
			focus: Pane::Editor,
			shared,
			hscroll: 0,
			quit_armed: false,
			quit: false,
			command_line: None,
			enhanced_keys,
		}
	}
}

/// Builds the host for `path`, wiring save and help to the UI state.
fn build_host(
	path: &Path,
	content: &str,
	category: StoryCategory,
	config: EditorConfig,
	shared: &Rc<Shared>,
) -> SplitViewHost {
	let on_change = {
		let shared = Rc::clone(shared);
		move |_: &str| shared.dirty.set(true)
	};
	let on_save = {
		let shared = Rc::clone(shared);
		let path = path.to_path_buf();
		move |html: &str| match std::fs::write(&path, html) {
			Ok(()) => {
				info!(path = %path.display(), "saved");
				shared.dirty.set(false);
				shared.set_status(format!("Saved {}", path.display()));
			}
			Err(error) => {
				warn!(path = %path.display(), %error, "save failed");
				shared.set_status(format!("Save failed: {error}"));
			}
		}
	};
	let on_help = {
		let shared = Rc::clone(shared);
		move || shared.show_help.set(!shared.show_help.get())
	};

	SplitViewHost::new(content, on_change)
		.with_config(config)
		.with_clipboard(SystemClipboard::new())
		.with_category(category)
		.with_placeholder("Once upon a time…")
		.with_on_save(on_save)
		.with_on_help(on_help)
}

/// Keys handled by the frontend itself, before the host sees them.
fn handle_app_key(host: &mut SplitViewHost, ui: &mut Ui, event: &KeyEvent) -> bool {
	let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
	let alt = event.modifiers.contains(KeyModifiers::ALT);

	if ui.shared.show_help.get() && matches!(event.code, TermKey::Esc | TermKey::F(1)) {
		ui.shared.show_help.set(false);
		return true;
	}

	if let TermKey::Char('q') = event.code
		&& ctrl
	{
		if ui.shared.dirty.get() && !ui.quit_armed {
			ui.quit_armed = true;
			ui.shared.set_status("Unsaved changes. Press Ctrl+Q again to quit.");
		} else {
			ui.quit = true;
		}
		return true;
	}
	ui.quit_armed = false;

	match event.code {
		TermKey::F(1) => ui.shared.show_help.set(true),
		TermKey::F(2) => host.resize_split(-SPLIT_STEP),
		TermKey::F(3) => host.resize_split(SPLIT_STEP),
		TermKey::F(4) => ui.command_line = Some(CommandLine::default()),
		TermKey::F(6) => ui.focus = ui.focus.other(),
		TermKey::Home if alt => host.scroll_to_top(ui.focus),
		TermKey::PageUp if ui.focus == Pane::Preview => host.scroll_by(Pane::Preview, -PAGE_LINES),
		TermKey::PageDown if ui.focus == Pane::Preview => host.scroll_by(Pane::Preview, PAGE_LINES),
		TermKey::Up if ui.focus == Pane::Preview => host.scroll_by(Pane::Preview, -1),
		TermKey::Down if ui.focus == Pane::Preview => host.scroll_by(Pane::Preview, 1),
		_ => return false,
	}
	true
}

/// Keys typed while the command line is open.
fn handle_command_line_key(host: &mut SplitViewHost, ui: &mut Ui, event: &KeyEvent) {
	let Some(line) = ui.command_line.as_mut() else {
		return;
	};
	let plain = !event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

	match event.code {
		TermKey::Esc => ui.command_line = None,
		TermKey::Enter => {
			let input = line.input().to_string();
			ui.command_line = None;
			let status = palette::run(host, &input);
			ui.shared.set_status(status);
		}
		TermKey::Backspace => line.pop(),
		TermKey::Tab => line.complete(),
		TermKey::Char(c) if plain => line.push(c),
		_ => {}
	}
}

/// Routes one key event. Editor keys only reach the host while the editor
/// pane has focus.
fn handle_key_event(host: &mut SplitViewHost, ui: &mut Ui, event: &KeyEvent) {
	if ui.command_line.is_some() {
		handle_command_line_key(host, ui, event);
		return;
	}
	if handle_app_key(host, ui, event) || ui.focus != Pane::Editor {
		return;
	}
	if let Some(key) = input::to_key(event, ui.enhanced_keys) {
		let key = input::fallback_target(key).unwrap_or(key);
		ui.shared.set_status(String::new());
		host.handle_key(key);
	}
}

fn event_loop(terminal: &mut DefaultTerminal, host: &mut SplitViewHost, ui: &mut Ui) -> anyhow::Result<()> {
	let mut session = host.attach();
	while !ui.quit {
		terminal.draw(|frame| render::draw(frame, &mut session, ui))?;

		match event::read().context("reading terminal event")? {
			Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(&mut session, ui, &key),
			_ => {}
		}
	}
	Ok(())
}

/// Runs the editor until the user quits.
pub fn run(path: PathBuf, content: String, category: StoryCategory, config: EditorConfig) -> anyhow::Result<()> {
	let shared = Rc::new(Shared::default());
	let mut host = build_host(&path, &content, category, config, &shared);

	let mut tty = TerminalSession::start();
	let mut ui = Ui::new(path, shared, tty.enhanced_keys);
	event_loop(&mut tty.terminal, &mut host, &mut ui)
}
