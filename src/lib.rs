// ╔══════════════════════════════════════════════════════════════════════════════╗
// ║                                 TINYLOG                                      ║
// ║                 Severity-tagged console and file logging                     ║
// ╚══════════════════════════════════════════════════════════════════════════════╝
//
// A small logging facility for command line tools:
//
//   - Messages are built with a stream (`logger.info().append(..)`) and sent to
//     every registered output when the stream goes out of scope.
//   - Each severity has a label and a console color. Any severity can be
//     hidden at runtime; Debug is hidden in release builds.
//   - A progress handle redraws a bar with percentage, item counts, elapsed
//     and projected time, sized to the terminal:
//
//       [=================>                         ]  69% ( 123/1337)     3s/17m03s
//
// Outputs are `Rc<dyn Output>`: a console sink (colors and in-place redraw when
// the terminal allows it) and a file sink (plain lines). Everything here is
// single-threaded.
//
// ══════════════════════════════════════════════════════════════════════════════

mod constants;
pub mod error;
pub mod layout;
pub mod logger;
pub mod output;
pub mod progress;
pub mod progress_bar;
pub mod severity;
pub mod stream;
pub mod terminal;
pub mod time;

pub use constants::{FILE_PROGRESS_WIDTH, LABEL_WIDTH, PREFIX_WIDTH};
pub use error::{LogError, Result};
pub use layout::{pad_from_left, pad_from_right};
pub use logger::Logger;
pub use output::{ConsoleOutput, FileOutput, Output};
pub use progress::Progress;
pub use severity::Severity;
pub use stream::LogStream;
pub use terminal::{FixedTerminal, SystemTerminal, Terminal};
pub use time::{duration_to_string, timestamp};
