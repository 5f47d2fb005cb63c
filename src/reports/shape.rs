/// Shape report: file name and `(rows, columns)`. Always runs.
use std::io::{self, Write};

use polars::prelude::DataFrame;

use crate::cli::write_heading;
use crate::types::ShapeOutput;

#[must_use]
pub fn build(df: &DataFrame) -> ShapeOutput {
    let (rows, columns) = df.shape();
    ShapeOutput { rows, columns }
}

/// # Errors
///
/// Propagates I/O errors from `out`.
pub fn write(out: &mut impl Write, file_path: &str, df: &DataFrame) -> io::Result<()> {
    let ShapeOutput { rows, columns } = build(df);
    write_heading(out, "df.shape")?;
    writeln!(out, "{file_path} loaded with shape ({rows}, {columns})")
}
