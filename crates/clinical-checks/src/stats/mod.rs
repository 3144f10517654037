//! Statistical tests used by the distributional check.

mod ks;

pub use ks::{EXACT_MAX_PRODUCT, KsMethod, KsResult, ks_2samp};

/// Per-test significance threshold for `k` simultaneous tests at overall
/// level `alpha`: `1 - (1 - alpha)^(1/k)`.
///
/// The correction is applied to the threshold, not to the p-values.
pub fn sidak_threshold(alpha: f64, k: usize) -> f64 {
    if k == 0 {
        return alpha;
    }
    1.0 - (1.0 - alpha).powf(1.0 / k as f64)
}
