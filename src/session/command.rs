//! Parsing one line of user input into a command

use crate::core::ZipCode;
use crate::types::FinderError;

/// Which rendering of the history to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryView {
    /// One record block per entry
    Recent,
    /// Table with timestamps
    Detailed,
}

/// A dispatched line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    History(HistoryView),
    Search(ZipCode),
    /// Not a command and not a valid postal code
    Invalid(FinderError),
}

impl Command {
    /// Interpret `line` after trimming and lower-casing it
    ///
    /// Anything starting with `history` or `full` is a history request; it is
    /// the detailed view whenever `full` appears in it, so `history full`
    /// shows the table too.
    pub fn parse(line: &str) -> Command {
        let input = line.trim().to_lowercase();

        match input.as_str() {
            "exit" | "quit" => Command::Exit,
            "help" => Command::Help,
            s if s.starts_with("history") || s.starts_with("full") => {
                if s.contains("full") {
                    Command::History(HistoryView::Detailed)
                } else {
                    Command::History(HistoryView::Recent)
                }
            }
            s => match ZipCode::parse(s) {
                Ok(zip) => Command::Search(zip),
                Err(error) => Command::Invalid(error),
            },
        }
    }
}
