//! CSV format handling for the library dataset
//!
//! The first line of the body is the header and names the columns; each
//! following line is mapped onto those names positionally. Standard CSV
//! quoting applies and values are never trimmed.
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{Dataset, FinderError, LibraryRecord, REQUIRED_COLUMNS};
use csv::ReaderBuilder;

/// Result of parsing a dataset body
///
/// Rows that could not be turned into a [`LibraryRecord`] are reported in
/// `skipped` instead of failing the whole load.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDataset {
    pub dataset: Dataset,
    pub skipped: Vec<FinderError>,
}

/// Parse a CSV body into a dataset
///
/// # Errors
///
/// Returns `FinderError::DataLoad` when the header cannot be read or does not
/// name every column in [`REQUIRED_COLUMNS`]; without those every row would be
/// unusable. Individual bad rows end up in [`ParsedDataset::skipped`].
pub fn parse_dataset(text: &str) -> Result<ParsedDataset, FinderError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| FinderError::data_load(format!("unreadable CSV header: {}", e)))?
        .clone();

    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(FinderError::data_load(format!(
            "CSV header is missing required column '{}'",
            missing
        )));
    }

    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for result in reader.deserialize::<LibraryRecord>() {
        match result {
            Ok(record) => records.push(record),
            Err(error) => skipped.push(FinderError::from(error)),
        }
    }

    Ok(ParsedDataset {
        dataset: Dataset::new(records),
        skipped,
    })
}
