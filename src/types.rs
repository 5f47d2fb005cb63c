/// Shared serializable output types for JSON mode.
///
/// These types are what gets written to stdout with `--output json`. They are
/// decoupled from the polars types and the internal summaries.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::table::{LoadError, TableError};
use crate::table::stats::{ColumnSummary, NumericSummary, TextSummary};

/// The whole report for one file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportOutput {
    /// The path as given on the command line.
    pub file: String,
    /// Row and column counts.
    pub shape: ShapeOutput,
    /// First rows, present with `--head`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<HeadOutput>,
    /// Column info, present with `--info`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<InfoOutput>,
    /// Statistics or a lookup error, present with `--describe`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub describe: Option<DescribeOutput>,
}

/// Table dimensions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShapeOutput {
    pub rows: usize,
    pub columns: usize,
}

/// Preview rows, one JSON value per cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadOutput {
    /// Column names in table order.
    pub columns: Vec<String>,
    /// Row-major cell values; nulls are JSON `null`.
    pub rows: Vec<Vec<Value>>,
}

/// Column summary for the info report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoOutput {
    /// Number of rows.
    pub entries: usize,
    pub columns: Vec<ColumnInfoOutput>,
    /// Estimated in-memory size in bytes.
    pub memory_bytes: usize,
}

/// One column in the info report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnInfoOutput {
    pub name: String,
    /// Non-null entries.
    pub non_null: usize,
    /// Dtype label, e.g. `int64`.
    pub dtype: String,
}

/// Describe result: statistics, or the lookup error that stopped it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DescribeOutput {
    Stats { columns: Vec<ColumnStatsOutput> },
    Error { error: ErrorDetail },
}

/// Statistics for one column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnStatsOutput {
    Numeric {
        name: String,
        count: usize,
        mean: Option<f64>,
        std: Option<f64>,
        min: Option<f64>,
        #[serde(rename = "25%")]
        q25: Option<f64>,
        #[serde(rename = "50%")]
        q50: Option<f64>,
        #[serde(rename = "75%")]
        q75: Option<f64>,
        max: Option<f64>,
    },
    Text {
        name: String,
        count: usize,
        unique: usize,
        top: Option<String>,
        freq: Option<usize>,
    },
}

impl From<&ColumnSummary> for ColumnStatsOutput {
    fn from(summary: &ColumnSummary) -> Self {
        match summary {
            ColumnSummary::Numeric(NumericSummary {
                name,
                count,
                mean,
                std,
                min,
                q25,
                q50,
                q75,
                max,
            }) => Self::Numeric {
                name: name.clone(),
                count: *count,
                mean: *mean,
                std: *std,
                min: *min,
                q25: *q25,
                q50: *q50,
                q75: *q75,
                max: *max,
            },
            ColumnSummary::Text(TextSummary {
                name,
                count,
                unique,
                top,
                freq,
            }) => Self::Text {
                name: name.clone(),
                count: *count,
                unique: *unique,
                top: top.clone(),
                freq: *freq,
            },
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional list of candidates (for mistyped column names).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<String>>,
}

impl ErrorOutput {
    /// Construct from a `LoadError`.
    #[must_use]
    pub fn from_load_error(err: &LoadError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
                candidates: None,
            },
        }
    }
}

impl From<&TableError> for ErrorDetail {
    fn from(err: &TableError) -> Self {
        match err {
            TableError::ColumnNotFound { candidates, .. } => Self {
                code: "column_not_found".to_owned(),
                message: err.to_string(),
                candidates: (!candidates.is_empty()).then(|| candidates.clone()),
            },
        }
    }
}
