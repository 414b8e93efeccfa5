//! The export pipeline: load, denormalize, write.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use usda_ingest::{DirectoryDataProvider, SUPPORTED_RELEASE, TextEncoding};
use usda_model::{DenormalizeOptions, TableCounts};
use usda_output::write_denormalized_csv;
use usda_transform::{DenormalizeReport, denormalize};

/// Inputs of one export run.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub input_dir: PathBuf,
    pub output: PathBuf,
    pub release: u32,
    pub encoding: TextEncoding,
    pub options: DenormalizeOptions,
}

impl ExportRequest {
    pub fn new(input_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output: output.into(),
            release: SUPPORTED_RELEASE,
            encoding: TextEncoding::default(),
            options: DenormalizeOptions::default(),
        }
    }
}

/// Wall-clock time spent per stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct StageTimings {
    pub load: Duration,
    pub denormalize: Duration,
    pub write: Duration,
}

impl StageTimings {
    pub fn total(&self) -> Duration {
        self.load + self.denormalize + self.write
    }
}

/// What an export run produced.
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub input_dir: PathBuf,
    pub output: PathBuf,
    pub table_counts: TableCounts,
    pub report: DenormalizeReport,
    pub rows_written: usize,
    pub timings: StageTimings,
}

/// Runs a full export. Nothing is written unless every stage succeeds.
pub fn run_export(request: &ExportRequest) -> Result<ExportResult> {
    let span = info_span!(
        "export",
        input = %request.input_dir.display(),
        output = %request.output.display()
    );
    let _guard = span.enter();
    let mut timings = StageTimings::default();

    // =========================================================================
    // Stage 1: Load the source tables
    // =========================================================================
    let start = Instant::now();
    let provider = DirectoryDataProvider::new(&request.input_dir, request.release)
        .with_context(|| format!("open release directory {}", request.input_dir.display()))?
        .with_encoding(request.encoding);
    let database = provider.load().context("load SR26 tables")?;
    timings.load = start.elapsed();
    let table_counts = database.counts();

    // =========================================================================
    // Stage 2: Denormalize
    // =========================================================================
    let start = Instant::now();
    let flat = denormalize(&database, &request.options).context("denormalize food items")?;
    timings.denormalize = start.elapsed();

    // =========================================================================
    // Stage 3: Write the flat table
    // =========================================================================
    let start = Instant::now();
    let rows_written = write_denormalized_csv(&request.output, &flat.items)
        .with_context(|| format!("write {}", request.output.display()))?;
    timings.write = start.elapsed();

    info!(
        rows_written,
        duration_ms = timings.total().as_millis(),
        "export complete"
    );

    Ok(ExportResult {
        input_dir: request.input_dir.clone(),
        output: request.output.clone(),
        table_counts,
        report: flat.report,
        rows_written,
        timings,
    })
}
