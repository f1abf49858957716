//! Toolbar command line (F4).

use talewright_editor::SplitViewHost;
use talewright_editor::toolbar::{self, CommandUsage};

/// Text typed after opening the command line.
#[derive(Debug, Default)]
pub struct CommandLine {
	input: String,
}

impl CommandLine {
	pub fn input(&self) -> &str {
		&self.input
	}

	pub fn push(&mut self, c: char) {
		self.input.push(c);
	}

	pub fn pop(&mut self) {
		self.input.pop();
	}

	/// Commands matching the typed command name.
	pub fn completions(&self) -> Vec<&'static CommandUsage> {
		toolbar::completions(&self.input).collect()
	}

	/// The typed command name, once an argument has been started.
	pub fn command_name(&self) -> Option<&str> {
		let (name, _) = self.input.trim_start().split_once(char::is_whitespace)?;
		Some(name)
	}

	/// Completes the command name when exactly one command matches it.
	pub fn complete(&mut self) {
		if self.command_name().is_some() {
			return;
		}
		if let [only] = self.completions().as_slice() {
			self.input = format!("{} ", only.name);
		}
	}
}

/// Runs one command line against `host` and returns the status message.
pub fn run(host: &mut SplitViewHost, line: &str) -> String {
	let command = match toolbar::parse_command_line(line, host.config()) {
		Ok(command) => command,
		Err(error) => return error.to_string(),
	};
	match host.apply(&command) {
		Ok(true) => format!("{} applied", command.label()),
		Ok(false) => format!("{}: nothing changed", command.label()),
		Err(error) => error.to_string(),
	}
}
