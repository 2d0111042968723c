// ══════════════════════════════════════════════════════════════════════════════
// CONSTANTS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Layout constants shared by the sinks and the progress renderer.
// - LABEL_WIDTH: severity labels are padded to this many columns on the console
// - PREFIX_WIDTH: columns reserved for the "HH:MM:SS " stamp and the label
// - FILE_PROGRESS_WIDTH: a file has no terminal, so bars are drawn this wide
// - FALLBACK_WIDTH: width assumed when no terminal answers the size query

pub const LABEL_WIDTH: usize = 9;

pub const PREFIX_WIDTH: usize = 18;

pub const FILE_PROGRESS_WIDTH: usize = 80;

pub const FALLBACK_WIDTH: usize = 80;

/// Timestamp layout handed to chrono. Trailing space separates it from the label.
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S ";
