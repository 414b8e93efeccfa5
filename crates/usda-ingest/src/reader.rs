//! Reading of headerless, caret-delimited SR26 table files.
//!
//! Every file uses `^` between fields and `~` around text fields. Rows may
//! stop early; trailing fields that are not present deserialize as `None`.
//! Field text is passed through untrimmed.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::encoding::TextEncoding;
use crate::error::{IngestError, Result};

/// Field separator of the SR26 ASCII files.
pub const FIELD_DELIMITER: u8 = b'^';

/// Text qualifier of the SR26 ASCII files.
pub const TEXT_QUOTE: u8 = b'~';

/// Loads every row of a table file, in file order.
pub fn read_table<T: DeserializeOwned>(path: &Path, encoding: TextEncoding) -> Result<Vec<T>> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let text = encoding
        .decode(&bytes)
        .ok_or_else(|| IngestError::InvalidEncoding {
            path: path.to_path_buf(),
            encoding: encoding.label(),
        })?;
    let rows = parse_table(&text, path)?;
    debug!(
        path = %path.display(),
        encoding = %encoding,
        rows = rows.len(),
        "table read"
    );
    Ok(rows)
}

/// Parses decoded table text; `path` is only used for error context.
pub fn parse_table<T: DeserializeOwned>(text: &str, path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .quote(TEXT_QUOTE)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (idx, record) in reader.deserialize::<T>().enumerate() {
        let row = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            // One record per physical line; `Position::line` drifts on CRLF input.
            line: e
                .position()
                .map_or(idx as u64 + 1, |pos| pos.record() + 1),
            message: e.to_string(),
        })?;
        rows.push(row);
    }
    Ok(rows)
}
