//! Library branch records and the in-memory dataset
//!
//! Column names follow the upstream City of Chicago CSV export verbatim.

use serde::Deserialize;

/// Shown when a branch has no SERVICE HOURS value
pub const HOURS_FALLBACK: &str = "Not available";

/// Shown when a branch has no PHONE value
pub const PHONE_FALLBACK: &str = "N/A";

/// Columns every row must carry for the record to be usable
pub const REQUIRED_COLUMNS: [&str; 6] = ["BRANCH", "ADDRESS", "CITY", "STATE", "ZIP", "WEBSITE"];

/// One library branch as published upstream
///
/// Values are kept exactly as they appear in the source, with no trimming.
/// Optional columns are `None` when the column is absent or the cell is empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LibraryRecord {
    #[serde(rename = "BRANCH")]
    branch: String,
    #[serde(rename = "ADDRESS")]
    address: String,
    #[serde(rename = "CITY")]
    city: String,
    #[serde(rename = "STATE")]
    state: String,
    #[serde(rename = "ZIP")]
    zip: String,
    #[serde(rename = "WEBSITE")]
    website: String,
    #[serde(rename = "SERVICE HOURS")]
    service_hours: Option<String>,
    #[serde(rename = "PHONE")]
    phone: Option<String>,
}

impl LibraryRecord {
    /// Create a record with all required fields and no optional ones
    pub fn new(
        branch: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
        website: impl Into<String>,
    ) -> Self {
        LibraryRecord {
            branch: branch.into(),
            address: address.into(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
            website: website.into(),
            service_hours: None,
            phone: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_service_hours(mut self, hours: impl Into<String>) -> Self {
        self.service_hours = Some(hours.into());
        self
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    /// Opening hours, or [`HOURS_FALLBACK`] when the dataset has none
    pub fn service_hours(&self) -> &str {
        self.service_hours.as_deref().unwrap_or(HOURS_FALLBACK)
    }

    /// Phone number with surrounding whitespace removed, or [`PHONE_FALLBACK`]
    /// when there is nothing left after trimming
    pub fn phone(&self) -> &str {
        self.trimmed_phone().unwrap_or(PHONE_FALLBACK)
    }

    /// True when the upstream row carried a non-blank phone number
    pub fn has_phone(&self) -> bool {
        self.trimmed_phone().is_some()
    }

    fn trimmed_phone(&self) -> Option<&str> {
        self.phone
            .as_deref()
            .map(str::trim)
            .filter(|phone| !phone.is_empty())
    }
}

/// All branches loaded for the session, in source order
///
/// Built once by the loader and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<LibraryRecord>,
}

impl Dataset {
    pub fn new(records: Vec<LibraryRecord>) -> Self {
        Dataset { records }
    }

    pub fn records(&self) -> &[LibraryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<LibraryRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = LibraryRecord>>(iter: I) -> Self {
        Dataset::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn branch() -> LibraryRecord {
        LibraryRecord::new(
            "Harold Washington Library Center",
            "400 S. State St.",
            "Chicago",
            "IL",
            "60605",
            "https://www.chipublib.org/locations/34/",
        )
    }

    #[test]
    fn test_optional_fields_fall_back_when_absent() {
        let record = branch();
        assert_eq!(record.service_hours(), HOURS_FALLBACK);
        assert_eq!(record.phone(), PHONE_FALLBACK);
        assert!(!record.has_phone());
    }

    #[rstest]
    #[case::plain("(312) 747-4300", "(312) 747-4300")]
    #[case::padded("  (312) 747-4300 ", "(312) 747-4300")]
    fn test_phone_is_trimmed(#[case] raw: &str, #[case] expected: &str) {
        let record = branch().with_phone(raw);
        assert_eq!(record.phone(), expected);
        assert!(record.has_phone());
    }

    #[rstest]
    #[case::spaces("   ")]
    #[case::tab_and_newline("\t\n")]
    fn test_blank_phone_falls_back(#[case] raw: &str) {
        let record = branch().with_phone(raw);
        assert_eq!(record.phone(), PHONE_FALLBACK);
        assert!(!record.has_phone());
    }

    #[test]
    fn test_service_hours_present() {
        let record = branch().with_service_hours("Mon. & Wed., Noon-8");
        assert_eq!(record.service_hours(), "Mon. & Wed., Noon-8");
    }

    #[test]
    fn test_dataset_collects_in_order() {
        let dataset: Dataset = vec![branch(), branch().with_phone("1")].into_iter().collect();
        assert_eq!(dataset.len(), 2);
        assert!(!dataset.records()[0].has_phone());
        assert!(dataset.records()[1].has_phone());
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert_eq!(dataset.len(), 0);
    }
}
