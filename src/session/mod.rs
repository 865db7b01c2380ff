//! Interactive session
//!
//! The session moves through three states:
//!
//! ```text
//! Initializing --load ok--> Ready --exit / quit / Ctrl-C / EOF--> Terminated
//!      |                                                             ^
//!      +------------------------load failed--------------------------+
//! ```
//!
//! `Initializing` loads the dataset exactly once. When that fails the error is
//! reported and no session is returned, so the loop never starts. In `Ready`
//! every line is dispatched through [`Command::parse`]. `Terminated` is final.
//!
//! Output goes to an injected writer and diagnostics to an injected logger.

mod command;
mod input;

pub use command::{Command, HistoryView};
pub use input::{InputEvent, LineSource, ReadlineSource, StdinSource};

use crate::core::{query, Clock, SearchHistory, SystemClock, ZipCode, HISTORY_LIMIT};
use crate::io::display::{format_library, write_help, write_history_table, write_recent_history};
use crate::io::{load_libraries, DataSource};
use crate::types::{Dataset, FinderError};
use log::Log;
use std::io::Write;

/// Prompt shown before every read
pub const PROMPT: &str = "📮 Enter ZIP code (or 'help'): ";

/// State of a constructed session
///
/// `Initializing` is [`Session::initialize`] itself; a `Session` value only
/// exists once loading succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Ready,
    Terminated,
}

/// Settings that do not come from the data source
pub struct SessionConfig {
    history_limit: usize,
    clock: Box<dyn Clock>,
}

impl SessionConfig {
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            history_limit: HISTORY_LIMIT,
            clock: Box::new(SystemClock),
        }
    }
}

/// One user's run of the finder
pub struct Session<W: Write> {
    dataset: Dataset,
    history: SearchHistory,
    output: W,
    clock: Box<dyn Clock>,
    state: SessionState,
}

impl<W: Write> Session<W> {
    /// Load the dataset and enter `Ready`
    ///
    /// # Errors
    ///
    /// Returns the `FinderError::DataLoad` from the loader after printing it
    /// to `output` as a single line.
    pub fn initialize(
        source: &dyn DataSource,
        diagnostics: &dyn Log,
        mut output: W,
        config: SessionConfig,
    ) -> Result<Self, FinderError> {
        let dataset = match load_libraries(source, diagnostics) {
            Ok(dataset) => dataset,
            Err(error) => {
                // The load error is what the caller needs, not a secondary write failure
                let _ = writeln!(output, "🚨 {}", error);
                let _ = output.flush();
                return Err(error);
            }
        };

        Ok(Session {
            dataset,
            history: SearchHistory::new(config.history_limit),
            output,
            clock: config.clock,
            state: SessionState::Ready,
        })
    }

    /// Read and dispatch lines until the session terminates
    ///
    /// An interruption or end of input ends the session like `exit`, with its
    /// own message.
    ///
    /// # Errors
    ///
    /// `FinderError::Io` when input cannot be read or output cannot be written.
    pub fn run(&mut self, input: &mut dyn LineSource) -> Result<(), FinderError> {
        while self.state == SessionState::Ready {
            match input.read_line(PROMPT)? {
                InputEvent::Line(line) => {
                    self.handle_line(&line)?;
                }
                InputEvent::Interrupted | InputEvent::Eof => {
                    writeln!(self.output, "\n🚪 Exiting gracefully...")?;
                    self.state = SessionState::Terminated;
                }
            }
            self.output.flush()?;
        }
        Ok(())
    }

    /// Handle one line of input and return the resulting state
    ///
    /// Lines arriving after termination are ignored.
    pub fn handle_line(&mut self, line: &str) -> Result<SessionState, FinderError> {
        if self.state != SessionState::Ready {
            return Ok(self.state);
        }

        match Command::parse(line) {
            Command::Exit => {
                writeln!(self.output, "\n✨ Thank you for using Chicago Library Finder!\n")?;
                self.state = SessionState::Terminated;
            }
            Command::Help => write_help(&mut self.output)?,
            Command::History(_) if self.history.is_empty() => {
                writeln!(self.output, "⚠️  No search history available")?;
            }
            Command::History(HistoryView::Recent) => {
                write_recent_history(&self.history.recent_view(), &mut self.output)?;
            }
            Command::History(HistoryView::Detailed) => {
                write_history_table(&self.history.detailed_view(), &mut self.output)?;
            }
            Command::Search(zip) => self.search(&zip)?,
            Command::Invalid(error) => writeln!(self.output, "❌ {}", error)?,
        }

        Ok(self.state)
    }

    fn search(&mut self, zip: &ZipCode) -> Result<(), FinderError> {
        let matches = query::search(self.dataset.records(), zip.as_str());

        if matches.is_empty() {
            writeln!(self.output, "⚠️  No libraries found in ZIP {}", zip)?;
            return Ok(());
        }

        writeln!(self.output, "✅ Found {} libraries:", matches.len())?;
        for (idx, library) in matches.iter().enumerate() {
            writeln!(self.output, "{}", format_library(library, Some(idx + 1)))?;
        }

        let at = self.clock.now();
        self.history.record(matches.iter().copied(), at);
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
