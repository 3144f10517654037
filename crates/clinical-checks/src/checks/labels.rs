use polars::prelude::*;

use crate::error::{CheckError, Result};
use crate::schema::{LABEL_COLUMN, is_known_label};
use crate::utils::{is_numeric_dtype, require_column};

/// Check that the outcome column only holds known labels.
///
/// Numeric and boolean columns are compared by value, so `1.0` and `true`
/// both count as label `1`. A missing value is not a known label. Any
/// other dtype cannot hold the integer labels and fails on its first value.
pub fn check_label_domain(current: &DataFrame) -> Result<()> {
    let series = require_column(current, LABEL_COLUMN)?.as_materialized_series();
    let dtype = series.dtype();

    if is_numeric_dtype(dtype) || matches!(dtype, DataType::Boolean) {
        let values = series.cast(&DataType::Float64)?;
        for value in values.f64()?.into_iter() {
            match value {
                Some(v) if is_known_label(v) => {}
                Some(v) => return Err(unknown_label(v.to_string())),
                None => return Err(unknown_label("null".to_string())),
            }
        }
        return Ok(());
    }

    if series.is_empty() {
        return Ok(());
    }
    Err(unknown_label(series.get(0)?.to_string()))
}

fn unknown_label(value: String) -> CheckError {
    CheckError::UnknownLabel {
        column: LABEL_COLUMN.to_string(),
        value,
    }
}
