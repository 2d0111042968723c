// ══════════════════════════════════════════════════════════════════════════════
// PROGRESS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Tracks a running job of a known size. Each update measures the time since the
// handle was created and redraws the bar on every output. Completion is not
// detected: update with `current == total` to draw the final 100% line.

use std::time::{Duration, Instant};
use crate::error::Result;
use crate::logger::Logger;

pub struct Progress<'a> {
	logger: &'a Logger,
	total: u64,
	current: u64,
	start: Instant,
}

impl<'a> Progress<'a> {
	pub fn new(logger: &'a Logger, total: u64) -> Self {
		Self { logger, total, current: 0, start: Instant::now() }
	}

	/// Records `current` items done and redraws the bar.
	pub fn update(&mut self, current: u64) -> Result<()> {
		self.current = current;
		self.logger.log_progress(current, self.total, self.duration())
	}

	/// Time elapsed since the handle was created.
	pub fn duration(&self) -> Duration {
		self.start.elapsed()
	}

	pub fn current(&self) -> u64 {
		self.current
	}

	pub fn total(&self) -> u64 {
		self.total
	}
}

#[cfg(test)]
mod tests {
	#![allow(clippy::unwrap_used, clippy::expect_used)]
	use super::*;
	use std::rc::Rc;
	use crate::logger::tests::{Record, Recorder};

	#[test]
	fn update_forwards_counts_and_elapsed_time() {
		let recorder = Rc::new(Recorder::default());
		let mut logger = Logger::empty();
		logger.add_output(recorder.clone());

		let mut progress = logger.progress(10);
		std::thread::sleep(Duration::from_millis(5));
		progress.update(4).unwrap();
		progress.update(10).unwrap();

		let records = recorder.records.borrow();
		assert_eq!(records.len(), 2);
		match (&records[0], &records[1]) {
			(Record::Progress(4, 10, first), Record::Progress(10, 10, second)) => {
				assert!(*first >= Duration::from_millis(5));
				assert!(second >= first);
				assert!(progress.duration() >= *second);
			}
			other => panic!("unexpected records: {:?}", other),
		}
		assert_eq!(progress.current(), 10);
		assert_eq!(progress.total(), 10);
	}

	#[test]
	fn fresh_handle_starts_at_zero() {
		let logger = Logger::empty();
		let progress = logger.progress(3);
		assert_eq!(progress.current(), 0);
		assert!(progress.duration() < Duration::from_secs(60));
	}
}
