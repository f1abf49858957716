use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Story category. Only changes how the preview is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryCategory {
	#[default]
	General,
	Bedtime,
	Adventure,
	Fable,
	Poem,
	Educational,
}

/// Font settings applied to the preview container of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
	pub font_family: &'static str,
	pub font_size_px: u16,
	pub line_height: &'static str,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown story category `{0}`")]
pub struct UnknownCategory(pub String);

impl StoryCategory {
	pub const ALL: [StoryCategory; 6] = [
		StoryCategory::General,
		StoryCategory::Bedtime,
		StoryCategory::Adventure,
		StoryCategory::Fable,
		StoryCategory::Poem,
		StoryCategory::Educational,
	];

	/// Lowercase identifier used in CSS class names and configuration.
	pub fn slug(self) -> &'static str {
		match self {
			StoryCategory::General => "general",
			StoryCategory::Bedtime => "bedtime",
			StoryCategory::Adventure => "adventure",
			StoryCategory::Fable => "fable",
			StoryCategory::Poem => "poem",
			StoryCategory::Educational => "educational",
		}
	}

	pub fn style(self) -> CategoryStyle {
		match self {
			StoryCategory::General => CategoryStyle {
				font_family: "Georgia, serif",
				font_size_px: 17,
				line_height: "1.6",
			},
			StoryCategory::Bedtime => CategoryStyle {
				font_family: "Georgia, serif",
				font_size_px: 19,
				line_height: "1.8",
			},
			StoryCategory::Adventure => CategoryStyle {
				font_family: "Verdana, sans-serif",
				font_size_px: 17,
				line_height: "1.6",
			},
			StoryCategory::Fable => CategoryStyle {
				font_family: "'Times New Roman', serif",
				font_size_px: 18,
				line_height: "1.7",
			},
			StoryCategory::Poem => CategoryStyle {
				font_family: "'Palatino Linotype', Palatino, serif",
				font_size_px: 18,
				line_height: "2",
			},
			StoryCategory::Educational => CategoryStyle {
				font_family: "Arial, sans-serif",
				font_size_px: 16,
				line_height: "1.5",
			},
		}
	}
}

impl FromStr for StoryCategory {
	type Err = UnknownCategory;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let wanted = s.trim().to_ascii_lowercase();
		Self::ALL
			.into_iter()
			.find(|c| c.slug() == wanted)
			.ok_or_else(|| UnknownCategory(s.to_string()))
	}
}

impl fmt::Display for StoryCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.slug())
	}
}
