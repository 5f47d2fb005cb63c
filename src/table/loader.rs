/// CSV loading through polars.
use std::fs::File;

use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use tracing::debug;

use super::errors::LoadError;

/// Read `path` as comma-separated text with a header row.
///
/// Types are inferred from the whole file: integer and float columns become
/// numeric, everything else stays text, and blank cells become nulls.
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be opened or is not valid CSV.
pub fn load_table(path: &str) -> Result<DataFrame, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::from_io(path, e))?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .into_reader_with_file_handle(file)
        .finish()
        .map_err(|e| LoadError::Parse {
            path: path.to_owned(),
            message: e.to_string(),
        })?;

    debug!(path, rows = df.height(), columns = df.width(), "loaded table");
    Ok(df)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn path_of(file: &NamedTempFile) -> String {
        file.path().to_string_lossy().into_owned()
    }

    #[test]
    fn test_load_infers_types() {
        let file = csv_file("id,price,name\n1,2.5,apple\n2,3.0,pear\n3,,plum\n");
        let df = load_table(&path_of(&file)).unwrap();

        assert_eq!(df.shape(), (3, 3));
        assert_eq!(df.column("id").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("price").unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column("name").unwrap().dtype(), &DataType::String);
        assert_eq!(df.column("price").unwrap().null_count(), 1);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let err = load_table(&path.to_string_lossy()).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn test_empty_file_is_a_parse_error() {
        let file = csv_file("");
        let err = load_table(&path_of(&file)).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }
}
