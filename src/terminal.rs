// ══════════════════════════════════════════════════════════════════════════════
// TERMINAL MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Answers the two questions the console sink has about its terminal: can it
// interpret ANSI control sequences, and how many columns wide is it. Without a
// terminal attached the answers are "no" and 80.

use std::io::{self, IsTerminal};
use crate::constants::FALLBACK_WIDTH;

pub trait Terminal {
	/// Whether escape sequences for color and cursor control are understood.
	fn supports_ansi(&self) -> bool;

	/// Current column count.
	fn width(&self) -> usize;
}

/// The terminal attached to this process's stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTerminal;

impl Terminal for SystemTerminal {
	fn supports_ansi(&self) -> bool {
		if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
			return false;
		}
		if !io::stdout().is_terminal() {
			return false;
		}
		enable_virtual_terminal()
	}

	fn width(&self) -> usize {
		if !io::stdout().is_terminal() {
			return FALLBACK_WIDTH;
		}
		match crossterm::terminal::size() {
			Ok((cols, _)) if cols > 0 => cols as usize,
			_ => FALLBACK_WIDTH,
		}
	}
}

// Windows consoles only honor escape sequences once virtual terminal
// processing has been switched on.
#[cfg(windows)]
fn enable_virtual_terminal() -> bool {
	crossterm::ansi_support::supports_ansi()
}

#[cfg(not(windows))]
fn enable_virtual_terminal() -> bool {
	true
}

/// A terminal with fixed answers, for headless runs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTerminal {
	pub ansi: bool,
	pub width: usize,
}

impl Default for FixedTerminal {
	fn default() -> Self {
		Self { ansi: false, width: FALLBACK_WIDTH }
	}
}

impl Terminal for FixedTerminal {
	fn supports_ansi(&self) -> bool {
		self.ansi
	}

	fn width(&self) -> usize {
		self.width
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fixed_terminal_defaults_to_plain_eighty_columns() {
		let term = FixedTerminal::default();
		assert!(!term.supports_ansi());
		assert_eq!(term.width(), 80);
	}

	#[test]
	fn system_width_is_never_zero() {
		assert!(SystemTerminal.width() > 0);
	}
}
