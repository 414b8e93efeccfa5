//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use usda_ingest::{SUPPORTED_RELEASE, TextEncoding};

#[derive(Parser)]
#[command(
    name = "usda-denormalize",
    version,
    about = "Flatten the USDA SR26 nutrient database into one wide CSV",
    long_about = "Flatten the USDA National Nutrient Database for Standard Reference.\n\n\
                  Reads the twelve caret-delimited SR26 ASCII tables and writes one CSV row\n\
                  per food item with its food group and the curated nutrient columns."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Denormalize an SR26 directory into a CSV file.
    Export(ExportArgs),

    /// List the curated nutrient columns.
    Nutrients,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Directory containing the SR26 ASCII table files.
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Path of the CSV file to write.
    #[arg(value_name = "OUTPUT_CSV")]
    pub output: PathBuf,

    /// Database release of the input files.
    #[arg(long = "release", default_value_t = SUPPORTED_RELEASE)]
    pub release: u32,

    /// Text encoding of the input files.
    #[arg(long = "encoding", value_enum, default_value = "windows-1252")]
    pub encoding: EncodingArg,

    /// Fail when a food item references an unknown food group.
    ///
    /// By default the group name is left empty and a warning is logged.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Do not warn when a curated nutrient's unit differs from its column unit.
    #[arg(long = "no-unit-check")]
    pub no_unit_check: bool,
}

/// CLI text encoding choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum EncodingArg {
    #[value(name = "windows-1252")]
    Windows1252,
    #[value(name = "utf-8")]
    Utf8,
}

impl From<EncodingArg> for TextEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Windows1252 => TextEncoding::Windows1252,
            EncodingArg::Utf8 => TextEncoding::Utf8,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
