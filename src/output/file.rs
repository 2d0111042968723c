// ══════════════════════════════════════════════════════════════════════════════
// FILE OUTPUT
// ══════════════════════════════════════════════════════════════════════════════
//
// Plain log lines in a file: timestamp, uncolored label, message, newline.
// Progress is drawn at a fixed width and always on its own line.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use crate::constants::FILE_PROGRESS_WIDTH;
use crate::error::Result;
use crate::output::Output;
use crate::progress_bar;
use crate::severity::Severity;
use crate::time::timestamp;

#[derive(Debug)]
pub struct FileOutput {
	file: File,
}

impl FileOutput {
	/// Opens `path` for appending, creating it if missing.
	pub fn append(path: impl AsRef<Path>) -> Result<Self> {
		let file = OpenOptions::new().create(true).append(true).open(path)?;
		Ok(Self { file })
	}

	/// Creates `path`, discarding any previous contents.
	pub fn create(path: impl AsRef<Path>) -> Result<Self> {
		Ok(Self { file: File::create(path)? })
	}

	/// Takes over an already opened file.
	pub fn from_file(file: File) -> Self {
		Self { file }
	}
}

impl Output for FileOutput {
	fn write_line(&self, severity: Severity, line: &str) -> Result<()> {
		let mut text = String::with_capacity(line.len() + 20);
		if severity != Severity::None {
			text.push_str(&timestamp()?);
			text.push_str(severity.label());
			text.push(' ');
		}
		text.push_str(line);
		text.push('\n');

		let mut file = &self.file;
		file.write_all(text.as_bytes())?;
		file.flush()?;
		Ok(())
	}

	fn write_progress(&self, current: u64, total: u64, elapsed: Duration) -> Result<()> {
		let bar = progress_bar::render(current, total, elapsed, FILE_PROGRESS_WIDTH);
		self.write_line(Severity::Progress, &bar)
	}
}
