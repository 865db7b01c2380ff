//! Error types for the library finder
//!
//! This module defines all error types that can occur while loading the
//! dataset or running an interactive session.
//!
//! # Error Categories
//!
//! - **Load Errors**: Network failures, bad HTTP status, unusable CSV body (fatal)
//! - **Validation Errors**: Postal codes that do not match the accepted pattern
//! - **Record Errors**: A single dataset row that cannot be used (skipped)
//! - **I/O Errors**: Terminal or output failures

use thiserror::Error;

/// Main error type for the library finder
///
/// Only `DataLoad` is fatal before the session starts. Every other variant is
/// reported locally and the session carries on, except `Io`, which means the
/// terminal itself is gone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinderError {
    /// The dataset could not be fetched or parsed into header + rows
    ///
    /// This is a fatal error that prevents the session from starting.
    #[error("Failed to retrieve library data: {message}")]
    DataLoad {
        /// Description of the underlying failure
        message: String,
    },

    /// User input is not a five digit postal code
    ///
    /// Recoverable - the session prints a hint and reprompts.
    #[error("Invalid ZIP code format '{input}'. Must be 5 digits (e.g. 60606)")]
    InvalidZip {
        /// The rejected input, after trimming and lower-casing
        input: String,
    },

    /// A dataset row is missing a required value or is otherwise unreadable
    ///
    /// Recoverable - the row is skipped and the load continues.
    #[error("Malformed record{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    MalformedRecord {
        /// Line number where the row starts (if available)
        line: Option<u64>,
        /// Description of the problem
        message: String,
    },

    /// Reading input or writing output failed
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

impl FinderError {
    /// Create a DataLoad error
    pub fn data_load(message: impl Into<String>) -> Self {
        FinderError::DataLoad {
            message: message.into(),
        }
    }

    /// Create an InvalidZip error
    pub fn invalid_zip(input: &str) -> Self {
        FinderError::InvalidZip {
            input: input.to_string(),
        }
    }
}

impl From<std::io::Error> for FinderError {
    fn from(error: std::io::Error) -> Self {
        FinderError::Io {
            message: error.to_string(),
        }
    }
}

// Row-level CSV failures; header-level failures are mapped to DataLoad by the parser
impl From<csv::Error> for FinderError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        FinderError::MalformedRecord {
            line,
            message: error.to_string(),
        }
    }
}

impl From<ureq::Error> for FinderError {
    fn from(error: ureq::Error) -> Self {
        let message = match error {
            ureq::Error::Status(code, response) => {
                format!("{} returned HTTP status {}", response.get_url(), code)
            }
            ureq::Error::Transport(transport) => transport.to_string(),
        };
        FinderError::DataLoad { message }
    }
}

impl From<rustyline::error::ReadlineError> for FinderError {
    fn from(error: rustyline::error::ReadlineError) -> Self {
        FinderError::Io {
            message: error.to_string(),
        }
    }
}
