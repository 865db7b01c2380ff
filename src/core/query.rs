//! Postal code validation and branch lookup
//!
//! The accepted pattern is `[1-9][0-9]{4}`: five ASCII digits without a
//! leading zero. Codes such as `00901` are rejected even though they are real
//! US postal codes; the Chicago dataset never contains them.

use crate::types::{FinderError, LibraryRecord};
use std::fmt;

/// Number of digits in an accepted postal code
pub const ZIP_LENGTH: usize = 5;

/// A postal code that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    /// Validate `input` against the postal code pattern
    ///
    /// The input is taken as-is: callers trim before parsing.
    pub fn parse(input: &str) -> Result<Self, FinderError> {
        let bytes = input.as_bytes();
        let well_formed = bytes.len() == ZIP_LENGTH
            && matches!(bytes[0], b'1'..=b'9')
            && bytes[1..].iter().all(u8::is_ascii_digit);

        if well_formed {
            Ok(ZipCode(input.to_string()))
        } else {
            Err(FinderError::invalid_zip(input))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// True iff `input` is exactly five ASCII digits with a non-zero first digit
pub fn validate(input: &str) -> bool {
    ZipCode::parse(input).is_ok()
}

/// Every record whose ZIP equals `zip` exactly, in dataset order
///
/// No trimming or numeric coercion is applied on either side, so `"60601 "`
/// in the source will not match `"60601"`. An empty result is not an error.
pub fn search<'a>(records: &'a [LibraryRecord], zip: &str) -> Vec<&'a LibraryRecord> {
    records.iter().filter(|record| record.zip() == zip).collect()
}
