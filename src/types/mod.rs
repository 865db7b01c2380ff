//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `library`: Library branch records and the loaded dataset
//! - `error`: Error types for the library finder

pub mod error;
pub mod library;

pub use error::FinderError;
pub use library::{Dataset, LibraryRecord, HOURS_FALLBACK, PHONE_FALLBACK, REQUIRED_COLUMNS};
