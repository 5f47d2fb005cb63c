/// Head report: a preview of the first rows.
use std::io::{self, Write};

use polars::prelude::{AnyValue, DataFrame};
use serde_json::Value;

use crate::cli::write_heading;
use crate::types::HeadOutput;

/// Print the first `rows` rows using polars' own table formatting.
///
/// # Errors
///
/// Propagates I/O errors from `out`.
pub fn write(out: &mut impl Write, df: &DataFrame, rows: usize) -> io::Result<()> {
    write_heading(out, "df.head()")?;
    writeln!(out, "{}", df.head(Some(rows)))
}

#[must_use]
pub fn build(df: &DataFrame, rows: usize) -> HeadOutput {
    let head = df.head(Some(rows));
    HeadOutput {
        columns: head
            .get_column_names()
            .into_iter()
            .map(ToString::to_string)
            .collect(),
        rows: (0..head.height())
            .filter_map(|i| head.get(i))
            .map(|row| row.iter().map(cell_to_json).collect())
            .collect(),
    }
}

fn cell_to_json(value: &AnyValue<'_>) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(b) => Value::Bool(*b),
        AnyValue::String(s) => Value::String((*s).to_owned()),
        AnyValue::StringOwned(s) => Value::String(s.to_string()),
        AnyValue::Int32(v) => Value::from(*v),
        AnyValue::Int64(v) => Value::from(*v),
        AnyValue::UInt32(v) => Value::from(*v),
        AnyValue::UInt64(v) => Value::from(*v),
        AnyValue::Float32(v) => Value::from(f64::from(*v)),
        AnyValue::Float64(v) => Value::from(*v),
        other => Value::String(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use polars::prelude::*;

    use super::*;

    fn sample() -> DataFrame {
        df!("col_a" => [10i64, 30], "col_b" => [20i64, 40]).unwrap()
    }

    #[test]
    fn test_head_prints_first_rows() {
        let mut buf = Vec::new();
        write(&mut buf, &sample(), 5).unwrap();
        let out = String::from_utf8(buf).unwrap();

        for expected in ["df.head", "10", "40", "col_a", "col_b"] {
            assert!(out.contains(expected), "missing {expected:?} in {out}");
        }
    }

    #[test]
    fn test_row_limit() {
        let df = df!("n" => [111i64, 222, 333]).unwrap();
        let mut buf = Vec::new();
        write(&mut buf, &df, 2).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("222"));
        assert!(!out.contains("333"));
    }

    #[test]
    fn test_build_json_rows() {
        let df = df!(
            "n" => [Some(1i64), None],
            "s" => ["x", "y"]
        )
        .unwrap();
        let head = build(&df, 5);
        assert_eq!(head.columns, ["n", "s"]);
        assert_eq!(head.rows.len(), 2);
        assert_eq!(head.rows[0][0], Value::from(1i64));
        assert_eq!(head.rows[1][0], Value::Null);
        assert_eq!(head.rows[1][1], Value::String("y".to_owned()));
    }
}
