// ══════════════════════════════════════════════════════════════════════════════
// PROGRESS BAR MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Renders one fixed-width progress line from a completion count and the time
// spent so far. The finished line looks like:
//
//   [=================>                         ]  69% ( 123/1337)     3s/17m03s
//
// The label fields are left-padded so that they keep their columns while the
// numbers grow between redraws.

use std::time::Duration;
use crate::constants::PREFIX_WIDTH;
use crate::layout::pad_from_left;
use crate::time::duration_to_string;

/// Shown in place of the projected duration when it cannot be estimated.
const UNKNOWN_DURATION: &str = "?";

/// Builds the progress line for `current` of `total` items after `elapsed`,
/// sized for a line of `width` columns.
///
/// `current` is clamped to `total`. A zero `total` renders as complete.
/// With nothing done yet the projected duration is shown as `?`.
pub fn render(current: u64, total: u64, elapsed: Duration, width: usize) -> String {
	let current = current.min(total);
	let fraction = if total == 0 { 1.0 } else { current as f64 / total as f64 };

	let label = label(current, total, fraction, elapsed);

	// Brackets, the space before the label, and the stamp + severity prefix
	let usable = width.saturating_sub(2 + 1 + label.chars().count() + PREFIX_WIDTH);
	let filled = ((usable as f64 * fraction).round() as usize).min(usable);

	let mut bar = String::with_capacity(usable);
	bar.extend(std::iter::repeat_n('=', filled));
	if filled < usable {
		bar.push('>');
		bar.extend(std::iter::repeat_n(' ', usable - filled - 1));
	}

	format!("[{}] {}", bar, label)
}

fn label(current: u64, total: u64, fraction: f64, elapsed: Duration) -> String {
	//  69%
	let percentage = (fraction * 100.0).round() as u64;
	let percentage = pad_from_left(&format!("{}%", percentage), 4, ' ');

	// ( 123/1337)
	let total_str = total.to_string();
	let counts = pad_from_left(&format!("{}/{}", current, total_str), total_str.len() * 2 + 1, ' ');

	//     3s/17m03s
	let projected = projected_duration(elapsed, fraction)
		.map(duration_to_string)
		.unwrap_or_else(|| UNKNOWN_DURATION.to_string());
	let times = pad_from_left(
		&format!("{}/{}", duration_to_string(elapsed), projected),
		projected.len() * 2 + 1,
		' ',
	);

	format!("{} ({}) {}", percentage, counts, times)
}

fn projected_duration(elapsed: Duration, fraction: f64) -> Option<Duration> {
	if fraction <= 0.0 {
		return None;
	}
	Duration::try_from_secs_f64(elapsed.as_secs_f64() / fraction).ok()
}

#[cfg(test)]
mod tests {
	#![allow(clippy::unwrap_used, clippy::expect_used)]
	use super::*;

	fn bar_of(line: &str) -> &str {
		let end = line.find(']').expect("bar is closed");
		&line[1..end]
	}

	#[test]
	fn half_done_line() {
		let line = render(50, 100, Duration::from_secs(5), 80);
		assert_eq!(line, format!("[{}>{}]  50% ( 50/100)  5s/10s", "=".repeat(19), " ".repeat(17)));
		assert!(line.len() <= 80);
	}

	#[test]
	fn arrow_sits_at_the_filled_edge() {
		let line = render(50, 100, Duration::from_secs(5), 80);
		let bar = bar_of(&line);
		let usable = bar.len();
		let expected = (usable as f64 * 0.5).round() as usize;
		assert_eq!(bar.matches('>').count(), 1);
		assert_eq!(bar.find('>'), Some(expected));
		assert_eq!(bar.matches('=').count(), expected);
	}

	#[test]
	fn complete_bar_has_no_arrow() {
		let line = render(100, 100, Duration::from_secs(10), 80);
		let bar = bar_of(&line);
		assert!(!bar.contains('>'));
		assert!(!bar.is_empty());
		assert!(bar.chars().all(|c| c == '='));
		assert!(line.ends_with("100% (100/100) 10s/10s"));
	}

	#[test]
	fn percentage_stays_in_range() {
		for total in [1u64, 3, 7, 100, 1337] {
			for current in 0..=total {
				let line = render(current, total, Duration::from_secs(1), 120);
				let label = &line[line.find("] ").unwrap() + 2..];
				let pct: u64 = label[..label.find('%').unwrap()].trim().parse().unwrap();
				assert!(pct <= 100, "{} of {} gave {}%", current, total, pct);
			}
		}
	}

	#[test]
	fn never_wider_than_the_line() {
		for width in [0usize, 10, 40, 80, 200] {
			let line = render(7, 1337, Duration::from_secs(3), width);
			let label_len = line.len() - bar_of(&line).len() - 3;
			assert!(line.len() <= width.max(label_len + 3));
		}
	}

	#[test]
	fn narrow_terminal_drops_the_bar_body() {
		let line = render(1, 2, Duration::from_secs(1), 20);
		assert!(line.starts_with("[] "));
	}

	#[test]
	fn nothing_done_has_unknown_projection() {
		let line = render(0, 10, Duration::from_secs(4), 80);
		assert!(line.ends_with("  0% ( 0/10) 4s/?"));
		let bar = bar_of(&line);
		assert_eq!(bar.find('>'), Some(0));
		assert!(!bar.contains('='));
	}

	#[test]
	fn overshoot_is_clamped() {
		let line = render(15, 10, Duration::from_secs(2), 80);
		assert!(line.contains("100% (10/10)"));
		assert!(!bar_of(&line).contains('>'));
	}

	#[test]
	fn zero_total_renders_complete() {
		let line = render(0, 0, Duration::from_secs(2), 80);
		assert!(line.ends_with("100% (0/0) 2s/2s"));
	}

	#[test]
	fn fraction_keeps_its_column_as_digits_grow() {
		let early = render(5, 1337, Duration::from_secs(1), 80);
		let late = render(1200, 1337, Duration::from_secs(1), 80);
		let label = |line: &str| line[line.find("] ").unwrap()..].to_string();
		assert_eq!(label(&early).find('/'), label(&late).find('/'));
	}
}
