use polars::prelude::*;
use tracing::debug;

use crate::config::validate_alpha;
use crate::error::{CheckError, Result};
use crate::schema::NUMERICAL_COLUMNS;
use crate::stats::{KsMethod, KsResult, ks_2samp, sidak_threshold};
use crate::utils::numeric_values;

/// Check that `current` looks like a sample from the same distribution as
/// `reference`, column by column.
///
/// Runs a two-sided two-sample KS test on every feature column and fails
/// with [`CheckError::DistributionMismatch`] on the first column whose
/// p-value is not above `1 - (1 - alpha)^(1/k)`.
///
/// This check is statistical: even for matching distributions it fails
/// roughly `alpha` of the time on freshly drawn samples.
pub fn check_distributional_similarity(
    reference: &DataFrame,
    current: &DataFrame,
    alpha: f64,
) -> Result<()> {
    check_distributional_similarity_with(reference, current, alpha, KsMethod::Auto)
}

/// [`check_distributional_similarity`] with an explicit p-value method.
pub fn check_distributional_similarity_with(
    reference: &DataFrame,
    current: &DataFrame,
    alpha: f64,
    method: KsMethod,
) -> Result<()> {
    validate_alpha(alpha)?;
    let threshold = sidak_threshold(alpha, NUMERICAL_COLUMNS.len());

    for column in NUMERICAL_COLUMNS {
        let result = column_ks(reference, current, column, method)?;
        debug!(
            "KS {}: D = {:.4}, p = {:.4e} ({:?}), threshold = {:.4e}",
            column, result.statistic, result.p_value, result.method, threshold
        );

        if result.p_value <= threshold {
            return Err(CheckError::DistributionMismatch {
                column: column.to_string(),
                statistic: result.statistic,
                p_value: result.p_value,
                threshold,
            });
        }
    }

    Ok(())
}

/// Two-sample KS test of one column of `reference` against `current`.
///
/// Missing values are dropped first.
pub fn column_ks(
    reference: &DataFrame,
    current: &DataFrame,
    column: &str,
    method: KsMethod,
) -> Result<KsResult> {
    let sample1 = numeric_values(reference, column)?;
    let sample2 = numeric_values(current, column)?;

    ks_2samp(&sample1, &sample2, method).ok_or_else(|| CheckError::EmptySample(column.to_string()))
}
