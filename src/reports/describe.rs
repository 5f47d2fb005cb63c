/// Describe report: descriptive statistics for all or selected columns.
///
/// Selected columns are validated before anything is printed. The first
/// missing name prints `<name> not found` (plus close matches, if any) and
/// ends the step without a heading.
///
/// A single column is just a one-element selection. There is no separate
/// single-name path, so its miss message carries no `df.describe() failed.`
/// prefix and a hit prints the heading like any other selection.
use std::io::Write;

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_BORDERS_ONLY};
use polars::prelude::{Column, DataFrame};

use super::ReportError;
use crate::cli::write_heading;
use crate::config::DescribeSelector;
use crate::table::stats::{NumericSummary, TextSummary};
use crate::table::{ColumnSummary, TableError, lookup_columns, summarize};
use crate::types::{ColumnStatsOutput, DescribeOutput, ErrorDetail};

/// Columns picked by `selector`, in order.
fn select<'a>(
    selector: &DescribeSelector,
    df: &'a DataFrame,
) -> Option<Result<Vec<&'a Column>, TableError>> {
    match selector {
        DescribeSelector::Absent => None,
        DescribeSelector::All => Some(Ok(df.get_columns().iter().collect())),
        DescribeSelector::Columns(names) => Some(lookup_columns(df, names)),
    }
}

fn summarize_all(columns: &[&Column]) -> Result<Vec<ColumnSummary>, ReportError> {
    columns
        .iter()
        .map(|c| summarize(c).map_err(ReportError::from))
        .collect()
}

/// # Errors
///
/// Returns `ReportError` on write failures or failed column casts.
pub fn write(
    out: &mut impl Write,
    selector: &DescribeSelector,
    df: &DataFrame,
) -> Result<(), ReportError> {
    let columns = match select(selector, df) {
        None => return Ok(()),
        Some(Ok(columns)) => columns,
        Some(Err(err)) => {
            write_lookup_error(out, &err)?;
            return Ok(());
        }
    };

    let summaries = summarize_all(&columns)?;
    write_heading(out, "df.describe()")?;

    let numeric: Vec<&NumericSummary> = summaries
        .iter()
        .filter_map(|s| match s {
            ColumnSummary::Numeric(n) => Some(n),
            ColumnSummary::Text(_) => None,
        })
        .collect();
    let text: Vec<&TextSummary> = summaries
        .iter()
        .filter_map(|s| match s {
            ColumnSummary::Text(t) => Some(t),
            ColumnSummary::Numeric(_) => None,
        })
        .collect();

    if !numeric.is_empty() {
        writeln!(out, "{}", numeric_table(&numeric))?;
    }
    if !text.is_empty() {
        if !numeric.is_empty() {
            writeln!(out)?;
        }
        writeln!(out, "{}", text_table(&text))?;
    }
    Ok(())
}

/// Build the JSON form; `None` when describe was not requested.
///
/// # Errors
///
/// Returns `ReportError` if a column cannot be cast for summarizing.
pub fn build(
    selector: &DescribeSelector,
    df: &DataFrame,
) -> Result<Option<DescribeOutput>, ReportError> {
    match select(selector, df) {
        None => Ok(None),
        Some(Err(err)) => Ok(Some(DescribeOutput::Error {
            error: ErrorDetail::from(&err),
        })),
        Some(Ok(columns)) => {
            let summaries = summarize_all(&columns)?;
            Ok(Some(DescribeOutput::Stats {
                columns: summaries.iter().map(ColumnStatsOutput::from).collect(),
            }))
        }
    }
}

fn write_lookup_error(out: &mut impl Write, err: &TableError) -> std::io::Result<()> {
    writeln!(out, "{err}")?;
    match err {
        TableError::ColumnNotFound { candidates, .. } if !candidates.is_empty() => {
            writeln!(out, "  Did you mean: {}", candidates.join(", "))
        }
        TableError::ColumnNotFound { .. } => Ok(()),
    }
}

const NUMERIC_ROWS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];
const TEXT_ROWS: [&str; 4] = ["count", "unique", "top", "freq"];

#[allow(clippy::cast_precision_loss)]
fn numeric_values(c: &NumericSummary) -> [Option<f64>; 8] {
    [
        Some(c.count as f64),
        c.mean,
        c.std,
        c.min,
        c.q25,
        c.q50,
        c.q75,
        c.max,
    ]
}

fn text_values(c: &TextSummary) -> [String; 4] {
    [
        c.count.to_string(),
        c.unique.to_string(),
        c.top.clone().unwrap_or_else(|| "NaN".to_owned()),
        c.freq.map_or_else(|| "NaN".to_owned(), |n| n.to_string()),
    ]
}

fn numeric_table(columns: &[&NumericSummary]) -> Table {
    let mut table = stats_table(columns.iter().map(|c| c.name.as_str()));
    let values: Vec<[Option<f64>; 8]> = columns.iter().map(|c| numeric_values(c)).collect();
    for (i, label) in NUMERIC_ROWS.iter().enumerate() {
        let mut row = vec![Cell::new(label)];
        row.extend(values.iter().map(|v| number_cell(&format_stat(v[i]))));
        table.add_row(row);
    }
    table
}

fn text_table(columns: &[&TextSummary]) -> Table {
    let mut table = stats_table(columns.iter().map(|c| c.name.as_str()));
    let values: Vec<[String; 4]> = columns.iter().map(|c| text_values(c)).collect();
    for (i, label) in TEXT_ROWS.iter().enumerate() {
        let mut row = vec![Cell::new(label)];
        row.extend(values.iter().map(|v| number_cell(&v[i])));
        table.add_row(row);
    }
    table
}

fn stats_table<'a>(names: impl Iterator<Item = &'a str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    let mut header = vec![Cell::new("")];
    header.extend(names.map(Cell::new));
    table.set_header(header);
    table
}

fn number_cell(text: &str) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

fn format_stat(value: Option<f64>) -> String {
    value.map_or_else(|| "NaN".to_owned(), |v| format!("{v:.6}"))
}
