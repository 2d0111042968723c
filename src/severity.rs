// ══════════════════════════════════════════════════════════════════════════════
// SEVERITY MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The tag carried by every message. It decides the label text, the console
// color, and whether the console sink writes to stdout or stderr.

use std::fmt;
use colored::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
	/// Untagged output. No timestamp, no label.
	None,
	Info,
	Debug,
	Warning,
	Error,
	Success,
	Progress,
}

impl Severity {
	/// Fixed label text for the severity. `None` has an empty label.
	pub fn label(self) -> &'static str {
		match self {
			Severity::None => "",
			Severity::Success => "SUCCESS",
			Severity::Info => "INFO",
			Severity::Warning => "WARNING",
			Severity::Debug => "DEBUG",
			Severity::Error => "ERROR",
			Severity::Progress => "PROGRESS",
		}
	}

	pub const ALL: [Severity; 7] = [
		Severity::None,
		Severity::Info,
		Severity::Debug,
		Severity::Warning,
		Severity::Error,
		Severity::Success,
		Severity::Progress,
	];

	/// Console color and boldness. `None` is left uncolored.
	pub fn color(self) -> Option<(Color, bool)> {
		match self {
			Severity::None => None,
			Severity::Success => Some((Color::Green, false)),
			Severity::Info => Some((Color::Cyan, false)),
			Severity::Warning => Some((Color::Yellow, true)),
			Severity::Debug => Some((Color::Cyan, true)),
			Severity::Error => Some((Color::Red, false)),
			Severity::Progress => Some((Color::Cyan, false)),
		}
	}

	/// SGR sequence that switches the terminal to this severity's color.
	/// Emitted unconditionally; callers decide whether the terminal gets it.
	pub fn color_sequence(self) -> Option<String> {
		self.color()
			.map(|(color, bold)| format!("\x1b[{};{}m", u8::from(bold), color.to_fg_str()))
	}

	/// Whether console output of this severity belongs on stderr.
	pub fn is_diagnostic(self) -> bool {
		matches!(self, Severity::Warning | Severity::Error)
	}
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}
