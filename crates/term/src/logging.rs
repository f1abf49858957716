//! Tracing setup.
//!
//! The filter comes from `TALEWRIGHT_LOG` and defaults to `warn`. The TUI
//! logs to a file so output never lands on the screen it draws.

use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const LOG_ENV: &str = "TALEWRIGHT_LOG";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
	Stderr,
	/// `<data dir>/talewright/talewright.log`, falling back to no output.
	File,
}

fn filter() -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

pub fn log_path() -> Option<PathBuf> {
	dirs::data_dir().map(|dir| dir.join("talewright").join("talewright.log"))
}

pub fn init(target: LogTarget) {
	match target {
		LogTarget::Stderr => {
			tracing_subscriber::fmt()
				.with_env_filter(filter())
				.with_writer(std::io::stderr)
				.with_target(false)
				.init();
		}
		LogTarget::File => {
			let Some(path) = log_path() else {
				return;
			};
			if let Some(dir) = path.parent()
				&& std::fs::create_dir_all(dir).is_err()
			{
				return;
			}
			let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
				return;
			};

			let file_layer = tracing_subscriber::fmt::layer()
				.with_writer(file)
				.with_ansi(false)
				.with_target(true);
			tracing_subscriber::registry().with(filter()).with(file_layer).init();
			tracing::debug!(path = %path.display(), "tracing initialized");
		}
	}
}
