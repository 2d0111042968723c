// ══════════════════════════════════════════════════════════════════════════════
// CONSOLE OUTPUT
// ══════════════════════════════════════════════════════════════════════════════
//
// Colored, timestamped lines on stdout/stderr. When the terminal understands
// ANSI sequences, progress lines return the cursor to column 0 so the next
// update redraws them in place.

use std::cell::{Cell, RefCell};
use std::io::{self, Write};
use std::time::Duration;
use crossterm::{
	cursor::{Hide, MoveToColumn, Show},
	queue,
	style::ResetColor,
	terminal::{Clear, ClearType},
};
use crate::constants::LABEL_WIDTH;
use crate::error::Result;
use crate::layout::pad_from_right;
use crate::output::Output;
use crate::progress_bar;
use crate::severity::Severity;
use crate::terminal::{SystemTerminal, Terminal};
use crate::time::timestamp;

pub struct ConsoleOutput {
	terminal: Box<dyn Terminal>,
	ansi: bool,
	stdout: RefCell<Box<dyn Write>>,
	stderr: RefCell<Box<dyn Write>>,
	cursor_hidden: Cell<bool>,
}

impl ConsoleOutput {
	/// Console sink on the process's stdout and stderr.
	pub fn new() -> Self {
		Self::with_streams(SystemTerminal, io::stdout(), io::stderr())
	}

	/// Console sink over arbitrary streams. The ANSI probe runs once, here.
	pub fn with_streams(
		terminal: impl Terminal + 'static,
		stdout: impl Write + 'static,
		stderr: impl Write + 'static,
	) -> Self {
		let ansi = terminal.supports_ansi();
		let output = Self {
			terminal: Box::new(terminal),
			ansi,
			stdout: RefCell::new(Box::new(stdout)),
			stderr: RefCell::new(Box::new(stderr)),
			cursor_hidden: Cell::new(false),
		};
		if ansi {
			let mut out = output.stdout.borrow_mut();
			let _ = queue!(out, ResetColor).and_then(|_| out.flush());
		}
		output
	}

	pub fn supports_ansi(&self) -> bool {
		self.ansi
	}

	fn render(&self, severity: Severity, line: &str) -> Result<Vec<u8>> {
		let mut buf = Vec::with_capacity(line.len() + 32);

		if self.ansi && severity != Severity::Progress && self.cursor_hidden.replace(false) {
			queue!(buf, Show)?;
		}

		if severity != Severity::None {
			buf.extend_from_slice(timestamp()?.as_bytes());
			let label = pad_from_right(severity.label(), LABEL_WIDTH, ' ');
			match severity.color_sequence() {
				Some(color) if self.ansi => {
					buf.extend_from_slice(color.as_bytes());
					buf.extend_from_slice(label.as_bytes());
					queue!(buf, ResetColor)?;
				}
				_ => buf.extend_from_slice(label.as_bytes()),
			}
		}

		buf.extend_from_slice(line.as_bytes());

		if self.ansi {
			queue!(buf, Clear(ClearType::UntilNewLine), ResetColor)?;
		}

		if self.ansi && severity == Severity::Progress {
			if !self.cursor_hidden.replace(true) {
				queue!(buf, Hide)?;
			}
			queue!(buf, MoveToColumn(0))?;
		} else {
			buf.push(b'\n');
		}

		Ok(buf)
	}
}

impl Default for ConsoleOutput {
	fn default() -> Self {
		Self::new()
	}
}

impl Output for ConsoleOutput {
	fn write_line(&self, severity: Severity, line: &str) -> Result<()> {
		let text = self.render(severity, line)?;
		let stream = if severity.is_diagnostic() { &self.stderr } else { &self.stdout };
		let mut stream = stream.borrow_mut();
		stream.write_all(&text)?;
		stream.flush()?;
		Ok(())
	}

	fn write_progress(&self, current: u64, total: u64, elapsed: Duration) -> Result<()> {
		let bar = progress_bar::render(current, total, elapsed, self.terminal.width());
		self.write_line(Severity::Progress, &bar)
	}
}

impl Drop for ConsoleOutput {
	fn drop(&mut self) {
		if !self.ansi {
			return;
		}
		let out = self.stdout.get_mut();
		if self.cursor_hidden.get() {
			let _ = queue!(out, Show);
		}
		let _ = queue!(out, ResetColor).and_then(|_| out.flush());
	}
}
