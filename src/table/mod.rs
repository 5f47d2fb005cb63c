/// Table layer: CSV loading, dtype labels, column lookup and statistics.
pub mod dtype;
pub mod errors;
pub mod loader;
pub mod stats;
pub mod suggest;

use polars::prelude::{Column, DataFrame};

pub use errors::{LoadError, TableError};
pub use loader::load_table;
pub use stats::{ColumnSummary, summarize};

/// Resolve column names in order, failing on the first one that is missing.
///
/// Duplicates resolve to the same column more than once.
///
/// # Errors
///
/// Returns `TableError::ColumnNotFound` (with fuzzy candidates) for the
/// first name that is not a column of `df`.
pub fn lookup_columns<'a>(
    df: &'a DataFrame,
    names: &[String],
) -> Result<Vec<&'a Column>, TableError> {
    names
        .iter()
        .map(|name| {
            df.column(name).map_err(|_| {
                let existing: Vec<&str> =
                    df.get_columns().iter().map(|c| c.name().as_str()).collect();
                TableError::ColumnNotFound {
                    name: name.clone(),
                    candidates: suggest::suggest_columns(&existing, name),
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use polars::prelude::*;

    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_lookup_in_order_with_duplicates() {
        let df = df!("x" => [1i64], "y" => [2i64]).unwrap();
        let cols = lookup_columns(&df, &names(&["y", "x", "y"])).unwrap();
        let found: Vec<&str> = cols.iter().map(|c| c.name().as_str()).collect();
        assert_eq!(found, ["y", "x", "y"]);
    }

    #[test]
    fn test_lookup_stops_at_first_missing() {
        let df = df!("x" => [1i64]).unwrap();
        let err = lookup_columns(&df, &names(&["x", "missing", "also_missing"])).unwrap_err();
        assert_eq!(err.to_string(), "missing not found");
    }
}
