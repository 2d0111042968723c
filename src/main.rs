// ══════════════════════════════════════════════════════════════════════════════
// TINYLOG DEMO
// ══════════════════════════════════════════════════════════════════════════════
//
// Shows every severity once, then runs a progress bar to completion.

use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;
use std::thread;
use std::time::Duration;
use clap::{Parser, ValueEnum};
use tinylog::{duration_to_string, FileOutput, Logger, Output, Severity};

/// Demonstrates severity-tagged logging and the live progress bar
#[derive(Parser)]
#[command(name = "tinylog-demo")]
#[command(version)]
#[command(about = "Log a message of every severity and draw a progress bar", long_about = None)]
struct Cli {
	/// Also append everything to this file
	#[arg(short, long)]
	log_file: Option<PathBuf>,

	/// Show debug messages even in release builds
	#[arg(long)]
	show_debug: bool,

	/// Severities to hide (repeatable)
	#[arg(long, value_enum)]
	hide: Vec<SeverityArg>,

	/// Number of items the progress bar counts to
	#[arg(short = 'n', long, default_value_t = 100)]
	items: u64,

	/// Pause between progress updates, in milliseconds
	#[arg(short, long, default_value_t = 10)]
	delay_ms: u64,
}

/// Severity names accepted on the command line
#[derive(Clone, Copy, ValueEnum)]
enum SeverityArg {
	None,
	Info,
	Debug,
	Warning,
	Error,
	Success,
	Progress,
}

impl From<SeverityArg> for Severity {
	fn from(arg: SeverityArg) -> Self {
		match arg {
			SeverityArg::None => Severity::None,
			SeverityArg::Info => Severity::Info,
			SeverityArg::Debug => Severity::Debug,
			SeverityArg::Warning => Severity::Warning,
			SeverityArg::Error => Severity::Error,
			SeverityArg::Success => Severity::Success,
			SeverityArg::Progress => Severity::Progress,
		}
	}
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	let mut logger = Logger::console();
	if let Some(path) = &cli.log_file {
		match FileOutput::append(path) {
			Ok(file) => logger.add_output(Rc::new(file) as Rc<dyn Output>),
			Err(e) => {
				let _ = logger.error().append(format!("Cannot open {}: {}", path.display(), e));
			}
		}
	}
	if cli.show_debug {
		logger.show_type(Severity::Debug);
	}
	for severity in &cli.hide {
		logger.hide_type((*severity).into());
	}

	let result = run(&logger, cli.items, Duration::from_millis(cli.delay_ms));
	shutdown(logger, result)
}

/// Tears the logger down first so the console gets its cursor and colors back.
fn shutdown(logger: Logger, result: tinylog::Result<()>) -> ExitCode {
	drop(logger);
	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("tinylog-demo: {}", e);
			ExitCode::FAILURE
		}
	}
}

fn run(logger: &Logger, items: u64, delay: Duration) -> tinylog::Result<()> {
	logger.none()
		.append("===========================================\n")
		.append("===== tinylog demo ========================\n")
		.append("===========================================")
		.finish()?;

	logger.info()
		.append("This is an info message meant to let you know ")
		.append(42)
		.append(" is the Answer to the Ultimate Question of Life, the Universe, and Everything")
		.finish()?;

	logger.debug()
		.append("You can only see this message if this demo has been built in debug mode.")
		.finish()?;

	logger.warning().append("This ").append("is ").append("a ").append("warning!").finish()?;

	logger.error()
		.append("This is an error message that is so long, it likely does not fit within a single line. ")
		.append("The purpose of this message is to make sure line breaks do not break anything (get it?). ")
		.append("This sentence only exists to make this message even longer.")
		.finish()?;

	logger.info().append("Demonstrating a progress bar...").finish()?;

	let mut progress = logger.progress(items);
	for i in 1..=items {
		thread::sleep(delay);
		progress.update(i)?;
	}

	logger.success()
		.append("The demo application terminated successfully after ")
		.append(duration_to_string(progress.duration()))
		.append(". Hooray!")
		.finish()
}
