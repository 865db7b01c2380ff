//! Line sources for the session loop
//!
//! An interactive terminal gets a rustyline editor, so Ctrl-C arrives as an
//! interruption instead of killing the process. Anything else (a pipe, a
//! redirected file) is read line by line.

use crate::types::FinderError;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{BufRead, ErrorKind};

/// Stands in for a line whose bytes were not valid UTF-8
///
/// It never parses as a command or postal code, so the session answers it
/// with the invalid format message and keeps going.
fn undecodable_line() -> InputEvent {
    InputEvent::Line(char::REPLACEMENT_CHARACTER.to_string())
}

/// What one read from the user produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A line of text without its terminator
    Line(String),
    /// The user pressed Ctrl-C
    Interrupted,
    /// No more input (Ctrl-D or end of a pipe)
    Eof,
}

/// Anything the session can read lines from
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<InputEvent, FinderError>;
}

/// Interactive prompt with line editing and recall
pub struct ReadlineSource {
    editor: DefaultEditor,
}

impl ReadlineSource {
    pub fn new() -> Result<Self, FinderError> {
        Ok(ReadlineSource {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for ReadlineSource {
    fn read_line(&mut self, prompt: &str) -> Result<InputEvent, FinderError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(InputEvent::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(InputEvent::Eof),
            Err(ReadlineError::Io(err)) if err.kind() == ErrorKind::InvalidData => {
                Ok(undecodable_line())
            }
            #[cfg(windows)]
            Err(ReadlineError::Decode(_)) => Ok(undecodable_line()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Non-interactive input read from any buffered reader
///
/// The prompt is not echoed. Invalid UTF-8 is replaced rather than rejected,
/// so one bad line only affects itself.
pub struct StdinSource<R> {
    reader: R,
}

impl<R: BufRead> StdinSource<R> {
    pub fn new(reader: R) -> Self {
        StdinSource { reader }
    }
}

impl<R: BufRead> LineSource for StdinSource<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<InputEvent, FinderError> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(InputEvent::Eof);
        }

        let line = String::from_utf8_lossy(&bytes);
        Ok(InputEvent::Line(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
