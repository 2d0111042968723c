// ══════════════════════════════════════════════════════════════════════════════
// TIME MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Clock prefix for log lines and compact rendering of elapsed durations
// ("45s", "2m05s", "1h02m05s", "1d01h00m00s").

use std::fmt::Write;
use std::time::Duration;
use chrono::Local;
use crate::constants::TIMESTAMP_FORMAT;
use crate::error::Result;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Renders the current local time as `HH:MM:SS `.
pub fn timestamp() -> Result<String> {
	let mut out = String::with_capacity(9);
	write!(out, "{}", Local::now().format(TIMESTAMP_FORMAT))?;
	Ok(out)
}

/// Formats a duration using its coarsest non-zero unit as the leading term.
/// Following terms are zero-padded to two digits; sub-second parts are dropped.
pub fn duration_to_string(duration: Duration) -> String {
	let secs = duration.as_secs();
	let (d, rest) = (secs / DAY, secs % DAY);
	let (h, rest) = (rest / HOUR, rest % HOUR);
	let (m, s) = (rest / MINUTE, rest % MINUTE);

	if d > 0 {
		format!("{}d{:02}h{:02}m{:02}s", d, h, m, s)
	} else if h > 0 {
		format!("{}h{:02}m{:02}s", h, m, s)
	} else if m > 0 {
		format!("{}m{:02}s", m, s)
	} else {
		format!("{}s", s)
	}
}
