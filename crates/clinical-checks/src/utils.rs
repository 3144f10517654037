//! Shared helpers for reading columns out of a `DataFrame`.

use polars::prelude::*;
use std::collections::HashSet;

use crate::error::{CheckError, Result};
use crate::schema::TypeClass;

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Check if a DataType is a floating point type.
#[inline]
pub fn is_float_dtype(dtype: &DataType) -> bool {
    matches!(dtype, DataType::Float32 | DataType::Float64)
}

// =============================================================================
// Column Access
// =============================================================================

/// Names of all columns in the frame.
pub fn column_names(df: &DataFrame) -> HashSet<&str> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .collect()
}

/// Fetch a column, mapping absence to [`CheckError::MissingColumn`].
pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| CheckError::MissingColumn(name.to_string()))
}

/// Non-missing values of a numeric column as `f64`.
///
/// Nulls and NaNs are both treated as missing and skipped. Fails with
/// [`CheckError::MissingColumn`] if the column is absent and with
/// [`CheckError::TypeMismatch`] if it is not numeric.
pub fn numeric_values(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = require_column(df, name)?;
    let dtype = column.dtype();
    if !TypeClass::Numeric.satisfies(dtype) {
        return Err(CheckError::TypeMismatch {
            column: name.to_string(),
            expected: TypeClass::Numeric,
            actual: dtype.to_string(),
        });
    }

    let series = column.as_materialized_series().cast(&DataType::Float64)?;
    let values = series
        .f64()?
        .into_iter()
        .flatten()
        .filter(|v| !v.is_nan())
        .collect();
    Ok(values)
}

/// Smallest and largest value of a slice, ignoring NaN.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().copied().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric_dtype() {
        assert!(is_numeric_dtype(&DataType::Int64));
        assert!(is_numeric_dtype(&DataType::Float32));
        assert!(!is_numeric_dtype(&DataType::String));
        assert!(!is_numeric_dtype(&DataType::Boolean));
    }

    #[test]
    fn test_is_float_dtype() {
        assert!(is_float_dtype(&DataType::Float64));
        assert!(!is_float_dtype(&DataType::Int64));
    }

    #[test]
    fn test_column_names() {
        let df = df!["a" => [1i64], "b" => [2.0f64]].unwrap();
        let names = column_names(&df);
        assert!(names.contains("a"));
        assert!(names.contains("b"));
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_numeric_values_skips_missing() {
        let df = df!["x" => [Some(1.0f64), None, Some(f64::NAN), Some(3.0)]].unwrap();
        assert_eq!(numeric_values(&df, "x").unwrap(), vec![1.0, 3.0]);
    }

    #[test]
    fn test_numeric_values_casts_integers() {
        let df = df!["x" => [1i64, 2, 3]].unwrap();
        assert_eq!(numeric_values(&df, "x").unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_numeric_values_missing_column() {
        let df = df!["x" => [1i64]].unwrap();
        let err = numeric_values(&df, "y").unwrap_err();
        assert!(matches!(err, CheckError::MissingColumn(name) if name == "y"));
    }

    #[test]
    fn test_numeric_values_rejects_strings() {
        let df = df!["x" => ["a", "b"]].unwrap();
        let err = numeric_values(&df, "x").unwrap_err();
        assert!(matches!(
            err,
            CheckError::TypeMismatch {
                expected: TypeClass::Numeric,
                ..
            }
        ));
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(&[3.0, -1.0, 7.5]), Some((-1.0, 7.5)));
        assert_eq!(min_max(&[]), None);
    }
}
