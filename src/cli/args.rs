/// CLI argument definitions via clap derive.
use clap::{Parser, ValueEnum};

use crate::config::{Config, DescribeSelector};

/// csvinspect: inspect CSV files with dataframe summaries.
#[derive(Debug, Parser)]
#[command(
    name = "csvinspect",
    about = "Inspect CSV files: shape, head rows, column info and descriptive statistics",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// A (nice) csv file.
    pub csv_filename: String,

    /// Print dataframe head.
    #[arg(short = 't', long)]
    pub head: bool,

    /// Print dataframe info.
    #[arg(short = 'i', long)]
    pub info: bool,

    /// Print dataframe statistics. If COLUMN_NAME is provided,
    /// print statistics of the selected columns only.
    #[arg(short = 'd', long, value_name = "COLUMN_NAME", num_args = 0..)]
    pub describe: Option<Vec<String>>,

    /// Number of rows shown by --head.
    #[arg(short = 'n', long, value_name = "N", default_value = "5")]
    pub rows: usize,

    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Print load diagnostics and step timing to stderr.
    #[arg(long)]
    pub debug: bool,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable report sections with headings.
    #[default]
    Text,
    /// A single pretty-printed JSON document.
    Json,
    /// A single compact (one-line) JSON document.
    Compact,
}

impl Cli {
    /// The effective format, with `--json` taking precedence.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.output
        }
    }

    /// Build the run configuration from the parsed arguments.
    #[must_use]
    pub fn config(&self) -> Config {
        Config {
            file_path: self.csv_filename.clone(),
            show_head: self.head,
            show_info: self.info,
            describe: DescribeSelector::from(self.describe.clone()),
            head_rows: self.rows,
        }
    }
}
