// ══════════════════════════════════════════════════════════════════════════════
// LOGGER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Owns the registered outputs and the set of hidden severities. Every message
// and progress update is handed to each output in registration order, unless
// its severity is hidden.

use std::collections::HashSet;
use std::rc::Rc;
use std::time::Duration;
use crate::error::Result;
use crate::output::{ConsoleOutput, Output};
use crate::progress::Progress;
use crate::severity::Severity;
use crate::stream::LogStream;

pub struct Logger {
	outputs: Vec<Rc<dyn Output>>,
	hidden: HashSet<Severity>,
}

impl Logger {
	/// Logger without outputs. Debug messages are hidden in release builds.
	pub fn empty() -> Self {
		let mut hidden = HashSet::new();
		if !cfg!(debug_assertions) {
			hidden.insert(Severity::Debug);
		}
		Self { outputs: Vec::new(), hidden }
	}

	/// Logger writing to the process console.
	pub fn console() -> Self {
		Self::with_outputs([Rc::new(ConsoleOutput::new()) as Rc<dyn Output>])
	}

	pub fn with_outputs(outputs: impl IntoIterator<Item = Rc<dyn Output>>) -> Self {
		let mut logger = Self::empty();
		for output in outputs {
			logger.add_output(output);
		}
		logger
	}

	/// Writes `text` to every output. A failing output does not stop the
	/// others; the first failure is returned once all have been tried.
	pub fn log(&self, severity: Severity, text: &str) -> Result<()> {
		if self.is_hidden(severity) {
			return Ok(());
		}
		first_error(self.outputs.iter().map(|o| o.write_line(severity, text)))
	}

	pub fn log_progress(&self, current: u64, total: u64, elapsed: Duration) -> Result<()> {
		if self.is_hidden(Severity::Progress) {
			return Ok(());
		}
		first_error(self.outputs.iter().map(|o| o.write_progress(current, total, elapsed)))
	}

	/// Registers `output`. Registering the same output twice has no effect.
	pub fn add_output(&mut self, output: Rc<dyn Output>) {
		if !self.outputs.iter().any(|o| same_output(o, &output)) {
			self.outputs.push(output);
		}
	}

	/// Unregisters `output` if it is registered.
	pub fn remove_output<O: Output + ?Sized>(&mut self, output: &Rc<O>) {
		self.outputs.retain(|o| !same_output(o, output));
	}

	pub fn outputs_len(&self) -> usize {
		self.outputs.len()
	}

	pub fn hide_type(&mut self, severity: Severity) {
		self.hidden.insert(severity);
	}

	pub fn show_type(&mut self, severity: Severity) {
		self.hidden.remove(&severity);
	}

	pub fn is_hidden(&self, severity: Severity) -> bool {
		self.hidden.contains(&severity)
	}

	/// Starts a message of the given severity. It is sent when the stream drops.
	pub fn log_stream(&self, severity: Severity) -> LogStream<'_> {
		LogStream::new(self, severity)
	}

	pub fn none(&self) -> LogStream<'_> {
		self.log_stream(Severity::None)
	}

	pub fn info(&self) -> LogStream<'_> {
		self.log_stream(Severity::Info)
	}

	pub fn debug(&self) -> LogStream<'_> {
		self.log_stream(Severity::Debug)
	}

	pub fn warning(&self) -> LogStream<'_> {
		self.log_stream(Severity::Warning)
	}

	pub fn error(&self) -> LogStream<'_> {
		self.log_stream(Severity::Error)
	}

	pub fn success(&self) -> LogStream<'_> {
		self.log_stream(Severity::Success)
	}

	/// Starts tracking progress over `total` items from now.
	pub fn progress(&self, total: u64) -> Progress<'_> {
		Progress::new(self, total)
	}
}

impl Default for Logger {
	fn default() -> Self {
		Self::empty()
	}
}

fn first_error(results: impl Iterator<Item = Result<()>>) -> Result<()> {
	let mut first = Ok(());
	for result in results {
		if first.is_ok() {
			first = result;
		}
	}
	first
}

fn same_output<A: ?Sized, B: ?Sized>(a: &Rc<A>, b: &Rc<B>) -> bool {
	std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
