// ══════════════════════════════════════════════════════════════════════════════
// OUTPUT MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Destinations for rendered log lines. Each sink decides how a line looks on
// its medium (colors, in-place redraw, bar width) and writes it immediately.

pub mod console;
pub mod file;

use std::time::Duration;
use crate::error::Result;
use crate::severity::Severity;

pub use console::ConsoleOutput;
pub use file::FileOutput;

pub trait Output {
	/// Writes one message tagged with `severity`.
	fn write_line(&self, severity: Severity, line: &str) -> Result<()>;

	/// Renders a progress bar for `current` of `total` and writes it as a
	/// `Progress` line.
	fn write_progress(&self, current: u64, total: u64, elapsed: Duration) -> Result<()>;
}
