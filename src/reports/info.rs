/// Info report: entry count, per-column non-null counts and dtypes, memory usage.
use std::collections::BTreeMap;
use std::io::{self, Write};

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use polars::prelude::DataFrame;

use crate::cli::write_heading;
use crate::table::dtype::dtype_label;
use crate::types::{ColumnInfoOutput, InfoOutput};

#[must_use]
pub fn build(df: &DataFrame) -> InfoOutput {
    let entries = df.height();
    InfoOutput {
        entries,
        columns: df
            .get_columns()
            .iter()
            .map(|c| ColumnInfoOutput {
                name: c.name().to_string(),
                non_null: entries - c.null_count(),
                dtype: dtype_label(c.dtype()),
            })
            .collect(),
        memory_bytes: df.estimated_size(),
    }
}

/// # Errors
///
/// Propagates I/O errors from `out`.
pub fn write(out: &mut impl Write, df: &DataFrame) -> io::Result<()> {
    let info = build(df);
    write_heading(out, "df.info()")?;

    if info.entries == 0 {
        writeln!(out, "RangeIndex: 0 entries")?;
    } else {
        writeln!(
            out,
            "RangeIndex: {} entries, 0 to {}",
            info.entries,
            info.entries - 1
        )?;
    }
    writeln!(out, "Data columns (total {} columns):", info.columns.len())?;

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(["#", "Column", "Non-Null Count", "Dtype"]);
    for (i, col) in info.columns.iter().enumerate() {
        table.add_row([
            i.to_string(),
            col.name.clone(),
            format!("{} non-null", col.non_null),
            col.dtype.clone(),
        ]);
    }
    writeln!(out, "{table}")?;

    writeln!(out, "dtypes: {}", dtype_tally(&info.columns))?;
    writeln!(out, "memory usage: {}", format_size(info.memory_bytes))
}

/// `float64(1), int64(2)`: dtype labels in name order with their column counts.
fn dtype_tally(columns: &[ColumnInfoOutput]) -> String {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for col in columns {
        *counts.entry(col.dtype.as_str()).or_default() += 1;
    }
    counts
        .iter()
        .map(|(dtype, n)| format!("{dtype}({n})"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[allow(clippy::cast_precision_loss)]
fn format_size(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    if size < 1024.0 {
        return format!("{size:.1} bytes");
    }
    for unit in UNITS {
        size /= 1024.0;
        if size < 1024.0 {
            return format!("{size:.1} {unit}");
        }
    }
    format!("{size:.1} PB")
}
