use polars::prelude::*;

use crate::error::{CheckError, Result};
use crate::schema::{COLUMN_RANGES, RangeSpec};
use crate::utils::{min_max, numeric_values};

/// Check every bounded column against its documented range.
///
/// Fails on the first column, in range-table order, holding a value
/// outside its bounds. Missing values are exempt.
pub fn check_numeric_ranges(current: &DataFrame) -> Result<()> {
    COLUMN_RANGES
        .iter()
        .try_for_each(|spec| check_range(current, spec))
}

/// Check a single column against `spec`.
pub fn check_range(current: &DataFrame, spec: &RangeSpec) -> Result<()> {
    let values = numeric_values(current, spec.column)?;
    let Some((observed_min, observed_max)) = min_max(&values) else {
        return Ok(());
    };

    if spec.contains(observed_min) && spec.contains(observed_max) {
        return Ok(());
    }

    Err(CheckError::RangeViolation {
        column: spec.column.to_string(),
        min: spec.min,
        max: spec.max,
        observed_min,
        observed_max,
    })
}
