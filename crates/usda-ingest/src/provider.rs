//! Loads a complete SR26 release from a directory of ASCII table files.

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::de::DeserializeOwned;
use tracing::{info, info_span};

use usda_model::NutrientDatabase;

use crate::discovery::{SourceTable, TableFiles, discover_tables};
use crate::encoding::TextEncoding;
use crate::error::{IngestError, Result};
use crate::reader::read_table;

/// The only database release whose layout is understood.
pub const SUPPORTED_RELEASE: u32 = 26;

/// Reads the twelve tables of one release directory into memory.
#[derive(Debug, Clone)]
pub struct DirectoryDataProvider {
    dir: PathBuf,
    release: u32,
    encoding: TextEncoding,
}

impl DirectoryDataProvider {
    /// Creates a provider for `dir`.
    ///
    /// Fails when the release is not [`SUPPORTED_RELEASE`] or the directory
    /// does not exist. Nothing is read until [`load`](Self::load).
    pub fn new(dir: impl Into<PathBuf>, release: u32) -> Result<Self> {
        if release != SUPPORTED_RELEASE {
            return Err(IngestError::UnsupportedRelease {
                release,
                supported: SUPPORTED_RELEASE,
            });
        }
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(IngestError::DirectoryNotFound { path: dir });
        }
        Ok(Self {
            dir,
            release,
            encoding: TextEncoding::default(),
        })
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn release(&self) -> u32 {
        self.release
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Reads every table, preserving file row order.
    ///
    /// All twelve files must be present; the first missing one is reported
    /// before any file is parsed.
    pub fn load(&self) -> Result<NutrientDatabase> {
        let span = info_span!(
            "load_database",
            dir = %self.dir.display(),
            release = self.release
        );
        let _guard = span.enter();
        let start = Instant::now();

        let files = discover_tables(&self.dir)?;
        if let Some(table) = files.missing().first() {
            return Err(IngestError::FileNotFound {
                table: table.name(),
                path: self.dir.join(table.file_name()),
            });
        }

        let database = NutrientDatabase {
            food_items: self.read(&files, SourceTable::FoodDescription)?,
            nutrient_values: self.read(&files, SourceTable::NutrientData)?,
            weights: self.read(&files, SourceTable::Weight)?,
            footnotes: self.read(&files, SourceTable::Footnote)?,
            food_groups: self.read(&files, SourceTable::FoodGroup)?,
            langual_factors: self.read(&files, SourceTable::LangualFactor)?,
            langual_descriptions: self.read(&files, SourceTable::LangualDescription)?,
            nutrient_definitions: self.read(&files, SourceTable::NutrientDefinition)?,
            source_codes: self.read(&files, SourceTable::SourceCode)?,
            data_derivations: self.read(&files, SourceTable::DataDerivation)?,
            sources_of_data: self.read(&files, SourceTable::SourcesOfData)?,
            source_links: self.read(&files, SourceTable::SourcesOfDataLink)?,
        };

        info!(
            table_count = SourceTable::ALL.len(),
            row_count = database.counts().total(),
            duration_ms = start.elapsed().as_millis(),
            "database loaded"
        );
        Ok(database)
    }

    fn read<T: DeserializeOwned>(&self, files: &TableFiles, table: SourceTable) -> Result<Vec<T>> {
        let start = Instant::now();
        let rows = read_table(files.path(table)?, self.encoding)?;
        info!(
            table = %table,
            rows = rows.len(),
            duration_ms = start.elapsed().as_millis(),
            "table loaded"
        );
        Ok(rows)
    }
}
