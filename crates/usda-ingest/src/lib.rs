//! SR26 data ingestion.
//!
//! Locates the twelve ASCII table files of a release directory, decodes them
//! and maps each `^`-delimited row onto its record type from `usda-model`.
//!
//! # Example
//!
//! ```ignore
//! use usda_ingest::{DirectoryDataProvider, TextEncoding};
//!
//! let provider = DirectoryDataProvider::new("data/sr26", 26)?
//!     .with_encoding(TextEncoding::Windows1252);
//! let database = provider.load()?;
//! ```

mod discovery;
mod encoding;
mod error;
mod provider;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Table Discovery ===
pub use discovery::{SourceTable, TableFiles, discover_tables};

// === Reading ===
pub use encoding::TextEncoding;
pub use reader::{FIELD_DELIMITER, TEXT_QUOTE, parse_table, read_table};

// === Provider ===
pub use provider::{DirectoryDataProvider, SUPPORTED_RELEASE};
