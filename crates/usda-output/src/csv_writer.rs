//! Flat CSV export.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info};

use usda_model::{DenormalizedItem, output_header};

use crate::error::{OutputError, Result};

/// Writes the header row and one row per item; returns the number of items.
///
/// Absent values are written as empty cells.
pub fn write_denormalized<W: Write>(writer: W, items: &[DenormalizedItem]) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(output_header())
        .map_err(|source| OutputError::Csv { row: 0, source })?;

    for (idx, item) in items.iter().enumerate() {
        let cells = item.cells();
        csv_writer
            .write_record(cells.iter().map(|cell| cell.as_deref().unwrap_or("")))
            .map_err(|source| OutputError::Csv {
                row: idx + 1,
                source,
            })?;
    }

    csv_writer
        .flush()
        .map_err(|source| OutputError::Csv {
            row: items.len(),
            source: source.into(),
        })?;
    Ok(items.len())
}

/// Writes the flat table to `path`.
///
/// Rows go to a sibling temporary file that replaces `path` only after a
/// complete write. On failure the temporary file is removed and any existing
/// file at `path` is left untouched.
pub fn write_denormalized_csv(path: &Path, items: &[DenormalizedItem]) -> Result<usize> {
    let start = Instant::now();
    let temp_path = temp_path_for(path);

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| OutputError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let result = write_temp_file(&temp_path, items);
    let rows = match result {
        Ok(rows) => rows,
        Err(err) => {
            discard(&temp_path);
            return Err(err);
        }
    };

    if let Err(e) = fs::rename(&temp_path, path) {
        discard(&temp_path);
        return Err(OutputError::AtomicWriteFailed {
            temp_path,
            target_path: path.to_path_buf(),
            source: e,
        });
    }

    info!(
        path = %path.display(),
        rows,
        duration_ms = start.elapsed().as_millis(),
        "CSV written"
    );
    Ok(rows)
}

fn write_temp_file(temp_path: &Path, items: &[DenormalizedItem]) -> Result<usize> {
    let file = File::create(temp_path).map_err(|e| OutputError::Io {
        operation: "create",
        path: temp_path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    let rows = write_denormalized(&mut writer, items)?;

    let file = writer.into_inner().map_err(|e| OutputError::Io {
        operation: "write",
        path: temp_path.to_path_buf(),
        source: e.into_error(),
    })?;
    file.sync_all().map_err(|e| OutputError::Io {
        operation: "sync",
        path: temp_path.to_path_buf(),
        source: e,
    })?;
    Ok(rows)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn discard(temp_path: &Path) {
    if let Err(e) = fs::remove_file(temp_path) {
        debug!(path = %temp_path.display(), error = %e, "temporary file not removed");
    }
}
