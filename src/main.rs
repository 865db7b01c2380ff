//! ChiLib CLI
//!
//! Interactive lookup of Chicago Public Library branches by ZIP code.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --file branches.csv
//! LIB_DATA_URL=https://example.org/rows.csv cargo run -- --history-limit 20
//! echo "60616" | cargo run -- --file branches.csv
//! ```
//!
//! When stdin is a terminal the prompt supports line editing; otherwise lines
//! are read from the pipe until it ends.
//!
//! # Exit Codes
//!
//! - 0: Session ended normally (exit, quit, Ctrl-C or end of input)
//! - 1: The dataset could not be loaded, or the terminal failed

use chilib::cli;
use chilib::io::display::write_banner;
use chilib::logging::FileLogger;
use chilib::session::{ReadlineSource, Session, SessionConfig, StdinSource};
use log::Log;
use std::io::{self, IsTerminal};
use std::process;

fn main() {
    let args = cli::parse_args();

    // Fall back to the no-op logger rather than refusing to start
    let file_logger = FileLogger::open(&args.log_file);
    let diagnostics: &dyn Log = match &file_logger {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!(
                "Warning: cannot open log file '{}': {}",
                args.log_file.display(),
                e
            );
            log::logger()
        }
    };

    let mut stdout = io::stdout();
    // Cosmetic only; a broken stdout surfaces as an Io error from the session
    let _ = write_banner(&mut stdout);

    let source = args.data_source();
    let config = SessionConfig::default().with_history_limit(args.history_limit);

    let mut session = match Session::initialize(source.as_ref(), diagnostics, stdout, config) {
        Ok(session) => session,
        Err(_) => {
            diagnostics.flush();
            process::exit(1);
        }
    };

    let result = if io::stdin().is_terminal() {
        ReadlineSource::new().and_then(|mut input| session.run(&mut input))
    } else {
        session.run(&mut StdinSource::new(io::stdin().lock()))
    };

    diagnostics.flush();
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
