use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use talewright_editor::preview::{LineKind, PreviewLine, RunStyle};
use talewright_editor::shortcuts::ShortcutTable;
use talewright_editor::{EditorConfig, Pane, SplitViewHost};
use unicode_width::UnicodeWidthChar;

use super::Ui;
use super::input::FALLBACKS;
use super::palette::CommandLine;

/// Frontend keys listed under the shortcut table in the help popup.
const APP_KEYS: &[(&str, &str)] = &[
	("f1", "Toggle this help"),
	("f2 / f3", "Shrink / grow the editor pane"),
	("f4", "Toolbar command line (tab completes)"),
	("f6", "Switch focused pane"),
	("alt-home", "Scroll focused pane to top"),
	("pageup / pagedown", "Scroll preview"),
	("ctrl-q", "Quit"),
];

pub fn draw(frame: &mut Frame, host: &mut SplitViewHost, ui: &mut Ui) {
	let [main, status] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
	let split = host.split_percent();
	let [editor, preview] =
		Layout::horizontal([Constraint::Percentage(split), Constraint::Percentage(100 - split)]).areas(main);

	draw_editor(frame, editor, host, ui);
	draw_preview(frame, preview, host, ui);
	match &ui.command_line {
		Some(line) => draw_command_line(frame, main, status, line, host.config()),
		None => draw_status(frame, status, host, ui),
	}

	if ui.shared.show_help.get() {
		draw_help(frame, ui.enhanced_keys);
	}
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
	let block = Block::bordered().title(title);
	if focused {
		block.border_style(Style::new().fg(Color::Cyan))
	} else {
		block.border_style(Style::new().fg(Color::DarkGray))
	}
}

fn display_char(c: char) -> char {
	if c == '\t' { ' ' } else { c }
}

fn draw_editor(frame: &mut Frame, area: Rect, host: &mut SplitViewHost, ui: &mut Ui) {
	let focused = ui.focus == Pane::Editor;
	let block = pane_block(" Editor ".to_string(), focused);
	let inner = block.inner(area);
	frame.render_widget(block, area);
	let (width, height) = (inner.width as usize, inner.height as usize);
	if width == 0 || height == 0 {
		return;
	}

	host.ensure_caret_visible(height);
	let top = host.scroll(Pane::Editor);
	let buffer = host.buffer();
	let (caret_line, caret_col) = buffer.caret_line_col();
	if caret_col < ui.hscroll {
		ui.hscroll = caret_col;
	} else if caret_col >= ui.hscroll + width {
		ui.hscroll = caret_col + 1 - width;
	}

	if buffer.is_empty() {
		if let Some(placeholder) = host.placeholder() {
			frame.render_widget(Paragraph::new(placeholder).dark_gray().italic(), inner);
		}
		if focused {
			frame.set_cursor_position((inner.x, inner.y));
		}
		return;
	}

	let text = buffer.text();
	let selection = buffer.selection();
	let selected_style = Style::new().add_modifier(Modifier::REVERSED);
	let mut lines = Vec::with_capacity(height);
	let mut caret_x = 0u16;

	for line_idx in top..(top + height).min(text.len_lines()) {
		let line_start = text.line_to_char(line_idx);
		let chars: Vec<char> = text.line(line_idx).chars().take_while(|c| !matches!(c, '\n' | '\r')).collect();

		let mut spans: Vec<Span> = Vec::new();
		let mut run = String::new();
		let mut run_selected = false;
		for (col, &c) in chars.iter().enumerate().skip(ui.hscroll) {
			let pos = line_start + col;
			let selected = pos >= selection.from() && pos < selection.to();
			if selected != run_selected && !run.is_empty() {
				let style = if run_selected { selected_style } else { Style::new() };
				spans.push(Span::styled(std::mem::take(&mut run), style));
			}
			run_selected = selected;
			run.push(display_char(c));
		}
		if !run.is_empty() {
			let style = if run_selected { selected_style } else { Style::new() };
			spans.push(Span::styled(run, style));
		}
		lines.push(Line::from(spans));

		if line_idx == caret_line {
			let visible = chars.get(ui.hscroll..caret_col.min(chars.len())).unwrap_or_default();
			let cells: usize = visible.iter().map(|&c| display_char(c).width().unwrap_or(0)).sum();
			caret_x = cells.min(width.saturating_sub(1)) as u16;
		}
	}

	frame.render_widget(Paragraph::new(lines), inner);
	if focused && caret_line >= top && caret_line < top + height {
		frame.set_cursor_position((inner.x + caret_x, inner.y + (caret_line - top) as u16));
	}
}

fn run_style(style: RunStyle) -> Style {
	let mut out = Style::new();
	if style.bold {
		out = out.add_modifier(Modifier::BOLD);
	}
	if style.italic {
		out = out.add_modifier(Modifier::ITALIC);
	}
	if style.underline {
		out = out.add_modifier(Modifier::UNDERLINED);
	}
	if style.strike {
		out = out.add_modifier(Modifier::CROSSED_OUT);
	}
	if let Some(level) = style.heading {
		out = out.fg(if level == 1 { Color::Yellow } else { Color::LightYellow });
	}
	if style.link {
		out = out.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED);
	}
	out
}

fn preview_line(line: &PreviewLine, width: u16) -> Line<'static> {
	match line.kind {
		LineKind::Rule => Line::from("─".repeat(width as usize)).dark_gray(),
		LineKind::PageBreak => Line::from("┄┄ page break ┄┄").dark_gray().italic().centered(),
		LineKind::Text => {
			let spans: Vec<Span<'static>> =
				line.runs.iter().map(|run| Span::styled(run.text.clone(), run_style(run.style))).collect();
			let out = Line::from(spans);
			if line.centered { out.centered() } else { out }
		}
	}
}

fn draw_preview(frame: &mut Frame, area: Rect, host: &mut SplitViewHost, ui: &Ui) {
	let preview = host.preview();
	let block = pane_block(format!(" Preview · {} ", preview.category), ui.focus == Pane::Preview);
	let inner = block.inner(area);

	let lines: Vec<Line> = preview.lines().iter().map(|line| preview_line(line, inner.width)).collect();
	let last = lines.len().saturating_sub(1);
	if host.scroll(Pane::Preview) > last {
		host.set_scroll(Pane::Preview, last);
	}
	let scroll = u16::try_from(host.scroll(Pane::Preview)).unwrap_or(u16::MAX);

	let paragraph = Paragraph::new(lines)
		.block(block)
		.wrap(Wrap { trim: false })
		.scroll((scroll, 0));
	frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, area: Rect, host: &SplitViewHost, ui: &Ui) {
	let (line, col) = host.buffer().caret_line_col();
	let dirty = if ui.shared.dirty.get() { " [+]" } else { "" };
	let status = ui.shared.status.borrow();
	let left = format!(
		" {}{dirty} │ {} │ Ln {}, Col {} │ {status}",
		ui.path.display(),
		host.category(),
		line + 1,
		col + 1
	);
	let right = " F1 help · F4 toolbar · Ctrl+S save · Ctrl+Q quit ";

	let [left_area, right_area] =
		Layout::horizontal([Constraint::Min(0), Constraint::Length(right.chars().count() as u16)]).areas(area);
	frame.render_widget(Paragraph::new(left).reversed(), left_area);
	frame.render_widget(Paragraph::new(right).reversed(), right_area);
}

fn draw_command_line(frame: &mut Frame, above: Rect, area: Rect, line: &CommandLine, config: &EditorConfig) {
	let prompt = format!("› {}", line.input());
	let cursor_x = area.x + (prompt.chars().count() as u16).min(area.width.saturating_sub(1));
	frame.render_widget(Paragraph::new(prompt), area);
	frame.set_cursor_position((cursor_x, area.y));

	let mut lines: Vec<Line> = match line.command_name() {
		Some(name) if name.eq_ignore_ascii_case("font") => config
			.font_families
			.iter()
			.enumerate()
			.map(|(i, family)| Line::from(format!(" {}  {family}", i + 1)))
			.collect(),
		_ => line
			.completions()
			.into_iter()
			.map(|command| {
				Line::from(vec![
					Span::styled(format!(" {}", command.usage), Style::new().fg(Color::Cyan)),
					Span::raw(format!("  {}", command.description)).dark_gray(),
				])
			})
			.collect(),
	};
	if lines.is_empty() {
		lines.push(Line::from(" no matching command").dark_gray().italic());
	}

	let height = (lines.len() as u16 + 2).min(above.height);
	let popup = Rect {
		x: above.x,
		y: above.bottom().saturating_sub(height),
		width: above.width.min(72),
		height,
	};
	frame.render_widget(Clear, popup);
	frame.render_widget(Paragraph::new(lines).block(Block::bordered().title(" Toolbar ")), popup);
}

fn centered(width: u16, height: u16, area: Rect) -> Rect {
	let width = width.min(area.width);
	let height = height.min(area.height);
	Rect {
		x: area.x + (area.width - width) / 2,
		y: area.y + (area.height - height) / 2,
		width,
		height,
	}
}

fn draw_help(frame: &mut Frame, enhanced_keys: bool) {
	let table = ShortcutTable::builtin();
	let entries = table.help_entries();
	let alternative = |description: &str| {
		FALLBACKS
			.iter()
			.find(|fallback| table.lookup(fallback.target).is_some_and(|def| def.description == description))
			.map_or("", |fallback| fallback.keys)
	};
	let key_width = entries
		.iter()
		.map(|(keys, _)| keys.len())
		.chain(APP_KEYS.iter().map(|(keys, _)| keys.len()))
		.max()
		.unwrap_or(0);
	let alt_width = FALLBACKS.iter().map(|fallback| fallback.keys.len()).max().unwrap_or(0);

	let row = |keys: &str, alt: &str, description: &str| {
		Line::from(vec![
			Span::styled(format!("{keys:<key_width$}  "), Style::new().fg(Color::Cyan)),
			Span::styled(format!("{alt:<alt_width$}  "), Style::new().fg(Color::DarkGray)),
			Span::raw(description.to_string()),
		])
	};

	let mut lines = vec![row("Editing", "alt key", "").bold()];
	lines.extend(entries.iter().map(|(keys, description)| row(keys, alternative(description), description)));
	lines.push(Line::default());
	lines.push(Line::from("Editor window").bold());
	lines.extend(APP_KEYS.iter().map(|(keys, description)| row(keys, "", description)));
	if !enhanced_keys {
		lines.push(Line::default());
		lines.push(Line::from("This terminal reports Ctrl+I as Tab and Ctrl+Shift+X").yellow());
		lines.push(Line::from("as Ctrl+X (cut). Use the alt keys instead.").yellow());
	}

	let height = lines.len() as u16 + 2;
	let area = centered((key_width + alt_width) as u16 + 42, height, frame.area());
	frame.render_widget(Clear, area);
	frame.render_widget(Paragraph::new(lines).block(Block::bordered().title(" Shortcuts ")), area);
}
