//! CLI schema for the talewright binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use talewright_editor::StoryCategory;

#[cfg(test)]
mod tests;

#[derive(Parser, Debug)]
#[command(name = "talewright")]
#[command(about = "Story HTML editor with live preview")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Config file (defaults to <config dir>/talewright/config.toml).
	#[arg(long, global = true, value_name = "PATH")]
	pub config: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
	/// Edit a story in the split-pane editor.
	Edit {
		/// Story HTML file. Created on first save if missing.
		file: PathBuf,
		/// Story category used for the preview.
		#[arg(long, short = 'c', value_parser = parse_category)]
		category: Option<StoryCategory>,
	},
	/// Print the sanitized preview HTML of a story.
	Preview {
		file: PathBuf,
		#[arg(long, short = 'c', value_parser = parse_category)]
		category: Option<StoryCategory>,
	},
	/// List the keyboard shortcuts.
	Keys,
}

fn parse_category(s: &str) -> Result<StoryCategory, String> {
	s.parse().map_err(|err| {
		let names: Vec<&str> = StoryCategory::ALL.iter().map(|c| c.slug()).collect();
		format!("{err} (expected one of: {})", names.join(", "))
	})
}
