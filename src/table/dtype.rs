/// Human-readable dtype labels.
use polars::prelude::DataType;

/// Whether a column of this type gets numeric statistics.
#[must_use]
pub fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int32
            | DataType::Int64
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Label shown in the info report, e.g. `int64` or `str`.
#[must_use]
pub fn dtype_label(dtype: &DataType) -> String {
    match dtype {
        DataType::Int32 => "int32".to_owned(),
        DataType::Int64 => "int64".to_owned(),
        DataType::UInt32 => "uint32".to_owned(),
        DataType::UInt64 => "uint64".to_owned(),
        DataType::Float32 => "float32".to_owned(),
        DataType::Float64 => "float64".to_owned(),
        DataType::Boolean => "bool".to_owned(),
        DataType::String => "str".to_owned(),
        DataType::Null => "null".to_owned(),
        other => other.to_string(),
    }
}
