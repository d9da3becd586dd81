//! CLI argument definitions for the explorer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "findex",
    version,
    about = "Findex Explorer - digital payment adoption by country, year, and demographic",
    long_about = "Explore a Global Findex extract of digital-payment adoption.\n\n\
                  Filter by year, country, and demographic breakdowns, then view\n\
                  summary metrics, a ranked top list, map-ready values, and a\n\
                  multi-year trend."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Filter the dataset and render the selection's views.
    View(ViewArgs),

    /// List the values each filter dimension offers.
    Choices(ChoicesArgs),
}

#[derive(Parser)]
pub struct ViewArgs {
    /// Path to the Findex CSV extract.
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Observation year (default: the most recent in the data).
    #[arg(long = "year", value_name = "YEAR")]
    pub year: Option<i32>,

    /// Country or region; repeat the flag to compare several
    /// (default: United States, India, Brazil, narrowed to those present).
    #[arg(long = "country", value_name = "NAME")]
    pub countries: Vec<String>,

    /// Sex breakdown label (default: Total).
    #[arg(long = "sex", value_name = "LABEL")]
    pub sex: Option<String>,

    /// Age breakdown label (default: 15 years old and over).
    #[arg(long = "age", value_name = "LABEL")]
    pub age: Option<String>,

    /// Income breakdown label (default: Total).
    #[arg(long = "income", value_name = "LABEL")]
    pub income: Option<String>,

    /// Education breakdown label (default: Total).
    #[arg(long = "education", value_name = "LABEL")]
    pub education: Option<String>,

    /// Also print the filtered rows behind the views.
    #[arg(long = "raw")]
    pub raw: bool,

    /// Emit the view bundle as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ChoicesArgs {
    /// Path to the Findex CSV extract.
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Emit the choice lists as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
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
