mod app;
mod cli;
mod clipboard;
mod logging;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use logging::LogTarget;
use talewright_editor::preview;
use talewright_editor::shortcuts::ShortcutTable;
use talewright_editor::{EditorConfig, StoryCategory};

fn load_config(path: Option<&Path>) -> anyhow::Result<EditorConfig> {
	match path {
		Some(path) => EditorConfig::load(path).with_context(|| format!("loading {}", path.display())),
		None => EditorConfig::load_default().context("loading default config"),
	}
}

/// Reads a story file; a missing file is an empty story.
fn read_story(path: &Path) -> anyhow::Result<String> {
	match std::fs::read_to_string(path) {
		Ok(content) => Ok(content),
		Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
		Err(err) => Err(err).with_context(|| format!("reading {}", path.display())),
	}
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Command::Edit { file, category } => {
			logging::init(LogTarget::File);
			let config = load_config(cli.config.as_deref())?;
			let content = read_story(&file)?;
			let category = category.unwrap_or(config.default_category);
			app::run(file, content, category, config)
		}
		Command::Preview { file, category } => {
			logging::init(LogTarget::Stderr);
			let config = load_config(cli.config.as_deref())?;
			let content = std::fs::read_to_string(&file).with_context(|| format!("reading {}", file.display()))?;
			let category: StoryCategory = category.unwrap_or(config.default_category);
			let source = preview::substitute_icon_tokens(&content, &config.icons);
			println!("{}", preview::render(&source, category).html);
			Ok(())
		}
		Command::Keys => {
			print!("{}", ShortcutTable::builtin());
			Ok(())
		}
	}
}
