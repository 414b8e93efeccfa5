//! Location of the twelve SR26 table files inside a release directory.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// One of the twelve files of the SR26 ASCII distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceTable {
    // Principal files
    FoodDescription,
    NutrientData,
    Weight,
    Footnote,
    // Support files
    FoodGroup,
    LangualFactor,
    LangualDescription,
    NutrientDefinition,
    SourceCode,
    DataDerivation,
    SourcesOfData,
    SourcesOfDataLink,
}

impl SourceTable {
    /// All tables, in load order.
    pub const ALL: [SourceTable; 12] = [
        Self::FoodDescription,
        Self::NutrientData,
        Self::Weight,
        Self::Footnote,
        Self::FoodGroup,
        Self::LangualFactor,
        Self::LangualDescription,
        Self::NutrientDefinition,
        Self::SourceCode,
        Self::DataDerivation,
        Self::SourcesOfData,
        Self::SourcesOfDataLink,
    ];

    /// Table name as used in the SR documentation.
    pub const fn name(self) -> &'static str {
        match self {
            Self::FoodDescription => "FOOD_DES",
            Self::NutrientData => "NUT_DATA",
            Self::Weight => "WEIGHT",
            Self::Footnote => "FOOTNOTE",
            Self::FoodGroup => "FD_GROUP",
            Self::LangualFactor => "LANGUAL",
            Self::LangualDescription => "LANGDESC",
            Self::NutrientDefinition => "NUTR_DEF",
            Self::SourceCode => "SRC_CD",
            Self::DataDerivation => "DERIV_CD",
            Self::SourcesOfData => "DATA_SRC",
            Self::SourcesOfDataLink => "DATSRCLN",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.txt", self.name())
    }
}

impl fmt::Display for SourceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Paths of the table files found in a directory.
#[derive(Debug, Clone)]
pub struct TableFiles {
    dir: PathBuf,
    paths: HashMap<SourceTable, PathBuf>,
}

impl TableFiles {
    /// Path of a table file; errors when the directory lacks it.
    pub fn path(&self, table: SourceTable) -> Result<&Path> {
        self.paths
            .get(&table)
            .map(PathBuf::as_path)
            .ok_or_else(|| IngestError::FileNotFound {
                table: table.name(),
                path: self.dir.join(table.file_name()),
            })
    }

    /// Tables with no matching file.
    pub fn missing(&self) -> Vec<SourceTable> {
        SourceTable::ALL
            .into_iter()
            .filter(|table| !self.paths.contains_key(table))
            .collect()
    }
}

/// Finds the table files in `dir`, matching file names case-insensitively.
///
/// Missing tables are not an error here; see [`TableFiles::missing`].
pub fn discover_tables(dir: &Path) -> Result<TableFiles> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut paths = HashMap::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(std::ffi::OsStr::to_str) else {
            continue;
        };
        let table = SourceTable::ALL
            .into_iter()
            .find(|table| file_name.eq_ignore_ascii_case(&table.file_name()));
        if let Some(table) = table {
            paths.insert(table, path);
        }
    }

    Ok(TableFiles {
        dir: dir.to_path_buf(),
        paths,
    })
}
