//! Dataset loading
//!
//! Fetches the body from a [`DataSource`], parses it and reports the outcome
//! to the diagnostic log: one INFO line on success, one ERROR line with the
//! cause on failure, and a WARN line for each row that had to be skipped.

use crate::io::csv_format::parse_dataset;
use crate::io::source::DataSource;
use crate::logging::emit;
use crate::types::{Dataset, FinderError};
use log::{Level, Log};

/// Load the dataset once for the session
///
/// # Errors
///
/// `FinderError::DataLoad` when the fetch fails or the body lacks the
/// expected header. Nothing is retried.
pub fn load_libraries(source: &dyn DataSource, diagnostics: &dyn Log) -> Result<Dataset, FinderError> {
    match source.fetch().and_then(|body| parse_dataset(&body)) {
        Ok(parsed) => {
            for problem in &parsed.skipped {
                emit(diagnostics, Level::Warn, format_args!("Skipped library row: {}", problem));
            }
            emit(
                diagnostics,
                Level::Info,
                format_args!(
                    "Successfully loaded library data: {} branches from {}",
                    parsed.dataset.len(),
                    source.describe()
                ),
            );
            Ok(parsed.dataset)
        }
        Err(error) => {
            emit(
                diagnostics,
                Level::Error,
                format_args!("Data load failed ({}): {}", source.describe(), error),
            );
            Err(error)
        }
    }
}
