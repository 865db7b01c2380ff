//! Core lookup logic
//!
//! This module contains the components that do not touch the terminal or network:
//! - `query` - Postal code validation and linear-scan lookup
//! - `history` - Bounded, timestamped search history
//! - `traits` - Clock abstraction for timestamping searches

pub mod history;
pub mod query;
pub mod traits;

pub use history::{HistoryRow, SearchHistory, SearchHistoryEntry, HISTORY_LIMIT};
pub use query::{search, validate, ZipCode};
pub use traits::{Clock, SystemClock};
