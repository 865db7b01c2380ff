//! Where the dataset body comes from
//!
//! - `HttpSource` - one blocking GET against the open data portal
//! - `FileSource` - a local CSV export, for offline use

use crate::types::FinderError;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// City of Chicago open data export of library branch locations
pub const DEFAULT_DATA_URL: &str = "https://data.cityofchicago.org/api/views/x8fc-8rcq/rows.csv";

/// Environment variable overriding [`DEFAULT_DATA_URL`]
pub const DATA_URL_ENV: &str = "LIB_DATA_URL";

/// Default network timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Provider of the raw CSV text
pub trait DataSource {
    /// Fetch the whole body as UTF-8 text
    ///
    /// Every failure is reported as `FinderError::DataLoad`.
    fn fetch(&self) -> Result<String, FinderError>;

    /// Human-readable location, used in log lines
    fn describe(&self) -> String;
}

/// Dataset served over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        HttpSource {
            url: url.into(),
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        HttpSource::new(DEFAULT_DATA_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

impl DataSource for HttpSource {
    fn fetch(&self) -> Result<String, FinderError> {
        let agent = ureq::AgentBuilder::new().timeout(self.timeout).build();
        let response = agent.get(&self.url).call()?;

        // ureq follows redirects and errors on 4xx/5xx; anything else outside 2xx is unusable
        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(FinderError::data_load(format!(
                "{} returned HTTP status {}",
                self.url, status
            )));
        }

        response.into_string().map_err(|e| {
            FinderError::data_load(format!("failed to read response from {}: {}", self.url, e))
        })
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Dataset stored in a local CSV file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

impl DataSource for FileSource {
    fn fetch(&self) -> Result<String, FinderError> {
        fs::read_to_string(&self.path).map_err(|e| {
            FinderError::data_load(format!("failed to read '{}': {}", self.path.display(), e))
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
