// ══════════════════════════════════════════════════════════════════════════════
// STREAM MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Message builder bound to a logger and a severity. Appended values are joined
// in order with no separators, and the finished text is handed to the logger
// exactly once: on `finish`, or when the stream is dropped.
//
//   logger.info().append("processed ").append(42).append(" files");

use std::fmt::{self, Display, Write};
use crate::error::Result;
use crate::logger::Logger;
use crate::severity::Severity;

pub struct LogStream<'a> {
	logger: &'a Logger,
	severity: Severity,
	text: Option<String>,
}

impl<'a> LogStream<'a> {
	pub(crate) fn new(logger: &'a Logger, severity: Severity) -> Self {
		Self { logger, severity, text: Some(String::new()) }
	}

	/// Appends `value` and hands the stream back for chaining.
	pub fn append(mut self, value: impl Display) -> Self {
		self.push(value);
		self
	}

	/// Appends `value` in place.
	pub fn push(&mut self, value: impl Display) -> &mut Self {
		if let Some(text) = self.text.as_mut() {
			let _ = write!(text, "{}", value);
		}
		self
	}

	pub fn severity(&self) -> Severity {
		self.severity
	}

	/// Text accumulated so far.
	pub fn text(&self) -> &str {
		self.text.as_deref().unwrap_or_default()
	}

	/// Sends the message now and reports whether every output accepted it.
	pub fn finish(mut self) -> Result<()> {
		self.flush()
	}

	fn flush(&mut self) -> Result<()> {
		match self.text.take() {
			Some(text) => self.logger.log(self.severity, &text),
			None => Ok(()),
		}
	}
}

impl Write for LogStream<'_> {
	fn write_str(&mut self, s: &str) -> fmt::Result {
		self.push(s);
		Ok(())
	}
}

impl Drop for LogStream<'_> {
	fn drop(&mut self) {
		// Nowhere to report a failed write from here; use `finish` to see it.
		let _ = self.flush();
	}
}

#[cfg(test)]
mod tests {
	#![allow(clippy::unwrap_used, clippy::expect_used)]
	use super::*;
	use std::rc::Rc;
	use crate::logger::tests::Recorder;

	fn recorded() -> (Logger, Rc<Recorder>) {
		let recorder = Rc::new(Recorder::default());
		let mut logger = Logger::empty();
		logger.add_output(recorder.clone());
		logger.show_type(Severity::Debug);
		(logger, recorder)
	}

	#[test]
	fn mixed_values_join_in_order() {
		let (logger, recorder) = recorded();
		let _ = logger.info().append("answer is ").append(42).append('!');
		assert_eq!(recorder.lines(), vec![(Severity::Info, "answer is 42!".to_string())]);
	}

	#[test]
	fn streams_flush_independently() {
		let (logger, recorder) = recorded();
		{
			let mut warning = logger.warning();
			let mut error = logger.error();
			warning.push("This ").push("is ").push("a ").push("warning!");
			error.push(7).push(" failures");
			drop(error);
			assert_eq!(recorder.lines().len(), 1);
			warning.push(" (late)");
		}
		assert_eq!(
			recorder.lines(),
			vec![
				(Severity::Error, "7 failures".to_string()),
				(Severity::Warning, "This is a warning! (late)".to_string()),
			]
		);
	}

	#[test]
	fn nothing_is_sent_before_drop() {
		let (logger, recorder) = recorded();
		let stream = logger.success().append("pending");
		assert!(recorder.records.borrow().is_empty());
		assert_eq!(stream.text(), "pending");
		drop(stream);
		assert_eq!(recorder.lines().len(), 1);
	}

	#[test]
	fn moved_stream_sends_once() {
		let (logger, recorder) = recorded();
		let first = logger.debug().append("moved");
		let second = first;
		drop(second);
		assert_eq!(recorder.lines(), vec![(Severity::Debug, "moved".to_string())]);
	}

	#[test]
	fn finish_sends_immediately() {
		let (logger, recorder) = recorded();
		logger.none().append("banner").finish().unwrap();
		assert_eq!(recorder.lines(), vec![(Severity::None, "banner".to_string())]);
	}

	#[test]
	fn write_macro_formats_into_the_stream() {
		let (logger, recorder) = recorded();
		write!(logger.info(), "{} of {}", 3, 4).unwrap();
		assert_eq!(recorder.lines(), vec![(Severity::Info, "3 of 4".to_string())]);
	}

	#[test]
	fn empty_stream_still_sends_a_line() {
		let (logger, recorder) = recorded();
		drop(logger.info());
		assert_eq!(recorder.lines(), vec![(Severity::Info, String::new())]);
	}
}
