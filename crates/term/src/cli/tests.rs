use clap::Parser;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn edit_with_category() {
	let cli = Cli::try_parse_from(["talewright", "edit", "story.html", "--category", "poem"]).unwrap();
	assert_eq!(
		cli.command,
		Command::Edit {
			file: PathBuf::from("story.html"),
			category: Some(StoryCategory::Poem),
		}
	);
	assert_eq!(cli.config, None);
}

#[test]
fn global_config_flag() {
	let cli = Cli::try_parse_from(["talewright", "keys", "--config", "/tmp/c.toml"]).unwrap();
	assert_eq!(cli.command, Command::Keys);
	assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
}

#[test]
fn preview_category_is_case_insensitive() {
	let cli = Cli::try_parse_from(["talewright", "preview", "s.html", "-c", "Bedtime"]).unwrap();
	assert_eq!(
		cli.command,
		Command::Preview {
			file: PathBuf::from("s.html"),
			category: Some(StoryCategory::Bedtime),
		}
	);
}

#[test]
fn unknown_category_is_rejected() {
	let err = Cli::try_parse_from(["talewright", "edit", "s.html", "-c", "horror"]).unwrap_err();
	assert!(err.to_string().contains("expected one of"));
}

#[test]
fn subcommand_is_required() {
	assert!(Cli::try_parse_from(["talewright"]).is_err());
}
