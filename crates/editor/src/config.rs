//! Editor configuration loaded from TOML.
//!
//! Every key is optional; missing keys take their defaults. Unknown keys are
//! rejected so typos surface as errors instead of being silently ignored.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::preview::StoryCategory;

/// Application directory name under the platform config dir.
const APP_DIR: &str = "talewright";
const CONFIG_FILE: &str = "config.toml";

/// Bounds for the editor pane width in percent.
pub const SPLIT_PERCENT_RANGE: std::ops::RangeInclusive<u16> = 20..=80;

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to read config {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("invalid config: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("invalid config: {0}")]
	Invalid(String),
}

/// User-tunable editor settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
	/// Spaces inserted by the Tab key.
	pub tab_spaces: usize,
	/// HTML snippet inserted by the signature command.
	pub signature: String,
	/// Category used when none is given.
	pub default_category: StoryCategory,
	/// Initial width of the editor pane, in percent.
	pub split_percent: u16,
	/// Families offered by the font-family picker.
	pub font_families: Vec<String>,
	/// Glyphs substituted for `{{icon:name}}` tokens in the preview.
	pub icons: BTreeMap<String, String>,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			tab_spaces: 2,
			signature: r#"<p class="signature">With love, The Storyteller</p>"#.to_string(),
			default_category: StoryCategory::Bedtime,
			split_percent: 50,
			font_families: ["Georgia", "Comic Sans MS", "Verdana", "Times New Roman"]
				.map(String::from)
				.to_vec(),
			icons: BTreeMap::from([
				("star".to_string(), "⭐".to_string()),
				("moon".to_string(), "🌙".to_string()),
			]),
		}
	}
}

impl EditorConfig {
	/// Parses and validates a TOML document.
	pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	/// Loads the config file at `path`.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		debug!(path = %path.display(), "loading config");
		Self::from_toml(&source)
	}

	/// Default config location: `<config dir>/talewright/config.toml`.
	pub fn default_path() -> Option<PathBuf> {
		dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
	}

	/// Loads the default config file, or defaults when it does not exist.
	pub fn load_default() -> Result<Self, ConfigError> {
		match Self::default_path() {
			Some(path) if path.exists() => Self::load(&path),
			_ => Ok(Self::default()),
		}
	}

	fn validate(&self) -> Result<(), ConfigError> {
		if self.tab_spaces > 16 {
			return Err(ConfigError::Invalid(format!("tab_spaces must be at most 16, got {}", self.tab_spaces)));
		}
		if !SPLIT_PERCENT_RANGE.contains(&self.split_percent) {
			return Err(ConfigError::Invalid(format!(
				"split_percent must be between {} and {}, got {}",
				SPLIT_PERCENT_RANGE.start(),
				SPLIT_PERCENT_RANGE.end(),
				self.split_percent
			)));
		}
		if let Some(name) = self
			.icons
			.keys()
			.find(|name| name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'))
		{
			return Err(ConfigError::Invalid(format!("invalid icon name `{name}`")));
		}
		Ok(())
	}
}
