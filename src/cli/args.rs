use crate::core::HISTORY_LIMIT;
use crate::io::source::{DATA_URL_ENV, DEFAULT_DATA_URL, DEFAULT_TIMEOUT_SECS};
use crate::io::{DataSource, FileSource, HttpSource};
use crate::logging::DEFAULT_LOG_FILE;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Find Chicago Public Library branches by ZIP code
#[derive(Parser, Debug)]
#[command(name = "chilib")]
#[command(about = "Find Chicago Public Library branches by ZIP code", long_about = None)]
pub struct CliArgs {
    /// URL of the library branch CSV export
    #[arg(
        long = "url",
        value_name = "URL",
        env = DATA_URL_ENV,
        default_value = DEFAULT_DATA_URL,
        help = "URL of the library branch CSV export"
    )]
    pub url: String,

    /// Local CSV file to load instead of fetching the URL
    #[arg(
        long = "file",
        value_name = "PATH",
        help = "Load branches from a local CSV file instead of the URL"
    )]
    pub file: Option<PathBuf>,

    /// Network timeout for the dataset fetch
    #[arg(
        long = "timeout",
        value_name = "SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        help = "Timeout in seconds for fetching the dataset (default: 10)"
    )]
    pub timeout_secs: u64,

    /// Number of search results remembered by the history commands
    #[arg(
        long = "history-limit",
        value_name = "COUNT",
        default_value_t = HISTORY_LIMIT,
        help = "Maximum number of history entries kept (default: 100)"
    )]
    pub history_limit: usize,

    /// Diagnostic log file
    #[arg(
        long = "log-file",
        value_name = "PATH",
        default_value = DEFAULT_LOG_FILE,
        help = "File that receives diagnostic log lines"
    )]
    pub log_file: PathBuf,
}

impl CliArgs {
    /// Build the data source selected on the command line
    ///
    /// `--file` takes precedence over the URL, including one coming from the
    /// environment.
    pub fn data_source(&self) -> Box<dyn DataSource> {
        match &self.file {
            Some(path) => Box::new(FileSource::new(path.clone())),
            None => Box::new(HttpSource::new(
                self.url.clone(),
                Duration::from_secs(self.timeout_secs),
            )),
        }
    }
}
