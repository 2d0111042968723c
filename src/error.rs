// ══════════════════════════════════════════════════════════════════════════════
// ERROR MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Failures that can surface from a log or progress call. Nothing here is
// retried: a failed timestamp or a failed write aborts the call that caused it.

use std::{fmt, io};

/// Error type for every fallible logging operation.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
	/// The local clock could not be rendered into the line prefix.
	#[error("could not render local time: {0}")]
	Timestamp(#[from] fmt::Error),

	/// A sink failed to open or to write its output.
	#[error("log output failed: {0}")]
	Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, LogError>;
