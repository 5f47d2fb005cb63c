/// Per-column descriptive statistics, aggregated by polars.
///
/// Numeric columns are cast to `f64` and summarized as count, mean, sample
/// standard deviation, min, linear-interpolated quartiles and max. Any other
/// column is cast to text and summarized as count, distinct values, most
/// frequent value and its frequency.
use polars::prelude::*;

use super::dtype::is_numeric;

/// Summary of a numeric column. `None` marks an undefined statistic.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    pub name: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub q50: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// Summary of a text (or other non-numeric) column.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSummary {
    pub name: String,
    pub count: usize,
    pub unique: usize,
    pub top: Option<String>,
    pub freq: Option<usize>,
}

/// Either kind of column summary.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnSummary {
    Numeric(NumericSummary),
    Text(TextSummary),
}

/// Summarize one column according to its dtype.
///
/// # Errors
///
/// Returns a `PolarsError` if the column cannot be cast or aggregated.
pub fn summarize(column: &Column) -> PolarsResult<ColumnSummary> {
    let name = column.name().to_string();
    let series = column.as_materialized_series();

    if is_numeric(series.dtype()) {
        let cast = series.cast(&DataType::Float64)?;
        Ok(ColumnSummary::Numeric(numeric_summary(name, cast.f64()?)?))
    } else {
        let cast = series.cast(&DataType::String)?;
        Ok(ColumnSummary::Text(text_summary(name, &cast.drop_nulls())?))
    }
}

fn numeric_summary(name: String, ca: &Float64Chunked) -> PolarsResult<NumericSummary> {
    Ok(NumericSummary {
        name,
        count: ca.len() - ca.null_count(),
        mean: ca.mean(),
        std: ca.std(1),
        min: ca.min(),
        q25: ca.quantile(0.25, QuantileMethod::Linear)?,
        q50: ca.quantile(0.50, QuantileMethod::Linear)?,
        q75: ca.quantile(0.75, QuantileMethod::Linear)?,
        max: ca.max(),
    })
}

/// `values` must already be free of nulls.
fn text_summary(name: String, values: &Series) -> PolarsResult<TextSummary> {
    let count = values.len();
    if count == 0 {
        return Ok(TextSummary {
            name,
            count,
            unique: 0,
            top: None,
            freq: None,
        });
    }

    // Sorted by count, most frequent first.
    let counts = values.value_counts(true, false, "count".into(), false)?;
    let top = counts.get_columns()[0]
        .as_materialized_series()
        .str()?
        .get(0)
        .map(str::to_owned);
    let freq = counts.column("count")?.get(0)?.extract::<usize>();

    Ok(TextSummary {
        name,
        count,
        unique: values.n_unique()?,
        top,
        freq,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(df: &DataFrame, name: &str) -> NumericSummary {
        match summarize(df.column(name).unwrap()).unwrap() {
            ColumnSummary::Numeric(s) => s,
            ColumnSummary::Text(_) => panic!("expected numeric summary for {name}"),
        }
    }

    #[test]
    fn test_numeric_summary() {
        let df = df!("a" => [1i64, 2, 3, 4]).unwrap();
        let s = numeric(&df, "a");
        assert_eq!(s.count, 4);
        assert_eq!(s.mean, Some(2.5));
        assert_eq!(s.min, Some(1.0));
        assert_eq!(s.q25, Some(1.75));
        assert_eq!(s.q50, Some(2.5));
        assert_eq!(s.q75, Some(3.25));
        assert_eq!(s.max, Some(4.0));
        let std = s.std.unwrap();
        assert!((std - 1.290_994_448_735_805_6).abs() < 1e-12);
    }

    #[test]
    fn test_nulls_are_skipped() {
        let df = df!("a" => [Some(10.0f64), None, Some(30.0)]).unwrap();
        let s = numeric(&df, "a");
        assert_eq!(s.count, 2);
        assert_eq!(s.mean, Some(20.0));
    }

    #[test]
    fn test_all_null_text_column() {
        let df = df!("c" => [None::<&str>, None]).unwrap();
        let ColumnSummary::Text(s) = summarize(df.column("c").unwrap()).unwrap() else {
            panic!("expected text summary");
        };
        assert_eq!(s.count, 0);
        assert_eq!(s.unique, 0);
        assert_eq!(s.top, None);
        assert_eq!(s.freq, None);
    }

    #[test]
    fn test_single_value_has_no_std() {
        let df = df!("a" => [7i64]).unwrap();
        let s = numeric(&df, "a");
        assert_eq!(s.count, 1);
        assert!(s.std.is_none_or(f64::is_nan));
        assert_eq!(s.q75, Some(7.0));
    }

    #[test]
    fn test_text_summary() {
        let df = df!("fruit" => [Some("pear"), Some("apple"), None, Some("apple")]).unwrap();
        let ColumnSummary::Text(s) = summarize(df.column("fruit").unwrap()).unwrap() else {
            panic!("expected text summary");
        };
        assert_eq!(s.count, 3);
        assert_eq!(s.unique, 2);
        assert_eq!(s.top.as_deref(), Some("apple"));
        assert_eq!(s.freq, Some(2));
    }
}
