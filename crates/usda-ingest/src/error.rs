//! Error types for SR26 data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the source tables.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required table file is missing from the directory.
    #[error("{table} table file not found: {path}")]
    FileNotFound { table: &'static str, path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// A row could not be mapped to its record type.
    #[error("failed to parse {path} at line {line}: {message}")]
    CsvParse {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// File bytes are not valid in the requested encoding.
    #[error("{path} is not valid {encoding} text")]
    InvalidEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === Release Errors ===
    /// Only release 26 of the database layout is understood.
    #[error("unsupported database release {release} (only release {supported} is supported)")]
    UnsupportedRelease { release: u32, supported: u32 },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
