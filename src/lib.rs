//! ChiLib - Chicago Public Library Finder
//! # Overview
//!
//! This library loads the City of Chicago's public CSV export of library
//! branches and answers ZIP code lookups against it in an interactive session,
//! remembering recent results.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (LibraryRecord, Dataset, FinderError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Lookup logic:
//!   - [`core::query`] - Postal code validation and linear-scan search
//!   - [`core::history`] - Bounded, timestamped search history
//! - [`io`] - Dataset sources, CSV parsing, loading and text rendering
//! - [`session`] - The interactive read-dispatch loop
//! - [`logging`] - Append-only diagnostic log
//!
//! # Session Commands
//!
//! - **ZIP code**: five digits, first digit 1-9 (e.g. `60606`)
//! - **help**: Show the command menu
//! - **history**: Recent matches, newest first
//! - **full**: Recent matches as a table with timestamps
//! - **exit** / **quit**: Leave the session (Ctrl-C and Ctrl-D work too)
//!
//! # Example
//!
//! ```no_run
//! use chilib::io::HttpSource;
//! use chilib::session::{Session, SessionConfig, StdinSource};
//!
//! let source = HttpSource::default();
//! let mut session = Session::initialize(
//!     &source,
//!     log::logger(),
//!     std::io::stdout(),
//!     SessionConfig::default(),
//! )?;
//! session.run(&mut StdinSource::new(std::io::stdin().lock()))?;
//! # Ok::<(), chilib::types::FinderError>(())
//! ```

pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod session;
pub mod types;
