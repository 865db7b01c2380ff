//! I/O module
//!
//! Handles getting the dataset in and getting text out.
//!
//! # Components
//!
//! - `source` - Where the CSV body comes from (HTTP or a local file)
//! - `csv_format` - CSV parsing into library records
//! - `loader` - Fetch + parse with diagnostic logging
//! - `display` - Text rendering of records, history and menus

pub mod csv_format;
pub mod display;
pub mod loader;
pub mod source;

pub use csv_format::{parse_dataset, ParsedDataset};
pub use loader::load_libraries;
pub use source::{DataSource, FileSource, HttpSource, DATA_URL_ENV, DEFAULT_DATA_URL};
