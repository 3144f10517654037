//! Two-sample Kolmogorov-Smirnov test.

use serde::{Deserialize, Serialize};

/// Largest `n_a * n_b` for which [`KsMethod::Auto`] walks the exact null
/// distribution.
pub const EXACT_MAX_PRODUCT: u64 = 1_000_000;

/// How the p-value of the KS statistic is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum KsMethod {
    /// Exact for small samples, asymptotic otherwise.
    #[default]
    Auto,
    /// Exact two-sided null distribution of the statistic.
    Exact,
    /// Kolmogorov limiting distribution.
    Asymptotic,
}

impl KsMethod {
    fn resolve(self, n_a: usize, n_b: usize) -> KsMethod {
        match self {
            KsMethod::Auto if (n_a as u64) * (n_b as u64) <= EXACT_MAX_PRODUCT => KsMethod::Exact,
            KsMethod::Auto => KsMethod::Asymptotic,
            other => other,
        }
    }
}

/// Outcome of a two-sample KS test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KsResult {
    /// Largest gap between the two empirical CDFs.
    pub statistic: f64,
    /// Two-sided p-value.
    pub p_value: f64,
    /// Method actually used (never `Auto`).
    pub method: KsMethod,
}

/// Two-sided two-sample KS test of `a` against `b`.
///
/// Returns `None` when either sample is empty. NaNs must be removed by
/// the caller.
pub fn ks_2samp(a: &[f64], b: &[f64], method: KsMethod) -> Option<KsResult> {
    if a.is_empty() || b.is_empty() {
        return None;
    }

    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_by(f64::total_cmp);
    b.sort_by(f64::total_cmp);

    let (m, n) = (a.len() as u64, b.len() as u64);
    let d_num = statistic_numerator(&a, &b);
    let statistic = d_num as f64 / (m * n) as f64;

    let method = method.resolve(a.len(), b.len());
    let p_value = if d_num == 0 {
        1.0
    } else {
        match method {
            KsMethod::Exact => exact_p_value(a.len(), b.len(), d_num),
            _ => asymptotic_p_value(a.len(), b.len(), statistic),
        }
    };

    Some(KsResult {
        statistic,
        p_value: p_value.clamp(0.0, 1.0),
        method,
    })
}

/// `D * m * n` for sorted samples of sizes `m` and `n`.
///
/// Working with the integer numerator `|i*n - j*m|` keeps ties between
/// the statistic and lattice points exact.
fn statistic_numerator(a: &[f64], b: &[f64]) -> u64 {
    let (m, n) = (a.len() as u64, b.len() as u64);
    let (mut i, mut j) = (0usize, 0usize);
    let mut d_num = 0u64;

    while i < a.len() && j < b.len() {
        let v = if a[i] <= b[j] { a[i] } else { b[j] };
        while i < a.len() && a[i] == v {
            i += 1;
        }
        while j < b.len() && b[j] == v {
            j += 1;
        }
        let gap = (i as u64 * n).abs_diff(j as u64 * m);
        d_num = d_num.max(gap);
    }

    // Once one sample is exhausted the gap only shrinks towards zero, so
    // the remaining tail cannot raise the maximum.
    d_num
}

/// Probability that a uniformly random interleaving of `m` and `n` items
/// reaches `|i*n - j*m| >= d_num` somewhere along its lattice path.
///
/// Path probabilities are propagated instead of path counts so that the
/// walk stays in range for samples where `C(m+n, m)` overflows `f64`.
fn exact_p_value(m: usize, n: usize, d_num: u64) -> f64 {
    let inside =
        |i: usize, j: usize| (i as u64 * n as u64).abs_diff(j as u64 * m as u64) < d_num;

    // row[j] holds P(reach (i, j) without leaving the band) for the current i.
    let mut row = vec![0.0f64; n + 1];
    for i in 0..=m {
        for j in 0..=n {
            if i == 0 && j == 0 {
                row[0] = 1.0;
                continue;
            }
            if !inside(i, j) {
                row[j] = 0.0;
                continue;
            }
            let remaining = (m + n - i - j + 1) as f64;
            let from_a = if i > 0 {
                row[j] * (m - i + 1) as f64 / remaining
            } else {
                0.0
            };
            let from_b = if j > 0 {
                row[j - 1] * (n - j + 1) as f64 / remaining
            } else {
                0.0
            };
            row[j] = from_a + from_b;
        }
    }

    1.0 - row[n]
}

/// Kolmogorov limiting distribution with the Stephens small-sample
/// correction.
fn asymptotic_p_value(m: usize, n: usize, statistic: f64) -> f64 {
    let en = (m as f64 * n as f64) / (m + n) as f64;
    let sqrt_en = en.sqrt();
    kolmogorov_sf((sqrt_en + 0.12 + 0.11 / sqrt_en) * statistic)
}

/// Survival function of the Kolmogorov distribution,
/// `Q(lambda) = 2 * sum_{k>=1} (-1)^(k-1) exp(-2 k^2 lambda^2)`.
pub(crate) fn kolmogorov_sf(lambda: f64) -> f64 {
    const EPS_TERM: f64 = 1e-3;
    const EPS_SUM: f64 = 1e-10;

    if lambda <= 0.0 {
        return 1.0;
    }

    let a2 = -2.0 * lambda * lambda;
    let mut sign = 2.0;
    let mut sum = 0.0;
    let mut previous_term = 0.0f64;

    for k in 1..=100 {
        let k = k as f64;
        let term = sign * (a2 * k * k).exp();
        sum += term;
        if term.abs() <= EPS_TERM * previous_term || term.abs() <= EPS_SUM * sum {
            return sum.clamp(0.0, 1.0);
        }
        sign = -sign;
        previous_term = term.abs();
    }

    // Series did not converge: lambda is tiny and Q is indistinguishable from 1.
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(lo: i32, hi: i32) -> Vec<f64> {
        (lo..hi).map(f64::from).collect()
    }

    #[test]
    fn test_identical_samples() {
        let a = [1.0, 2.0, 2.0, 5.0, 9.0];
        let result = ks_2samp(&a, &a, KsMethod::Auto).unwrap();
        assert_eq!(result.statistic, 0.0);
        assert_eq!(result.p_value, 1.0);
    }

    #[test]
    fn test_empty_sample() {
        assert!(ks_2samp(&[], &[1.0], KsMethod::Auto).is_none());
        assert!(ks_2samp(&[1.0], &[], KsMethod::Exact).is_none());
    }

    #[test]
    fn test_statistic_disjoint_samples() {
        let result = ks_2samp(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], KsMethod::Exact).unwrap();
        assert_eq!(result.statistic, 1.0);
    }

    #[test]
    fn test_statistic_with_ties() {
        // ECDF gap peaks at x = 1 where F_a = 2/3 and F_b = 1/3.
        let result = ks_2samp(&[1.0, 1.0, 2.0], &[1.0, 2.0, 2.0], KsMethod::Exact).unwrap();
        assert!((result.statistic - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_statistic_unequal_sizes() {
        let result = ks_2samp(&[1.0, 2.0], &[1.5, 2.5, 3.5, 4.5], KsMethod::Exact).unwrap();
        // At x = 2: F_a = 1, F_b = 1/4.
        assert!((result.statistic - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_exact_p_value_disjoint_three() {
        // Only the two extreme interleavings out of C(6, 3) = 20 reach D = 1.
        let result = ks_2samp(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], KsMethod::Exact).unwrap();
        assert_eq!(result.method, KsMethod::Exact);
        assert!((result.p_value - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_exact_p_value_disjoint_two() {
        let result = ks_2samp(&[1.0, 2.0], &[3.0, 4.0], KsMethod::Exact).unwrap();
        assert!((result.p_value - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_exact_p_value_single_points() {
        // With one observation per side every interleaving reaches D = 1.
        let result = ks_2samp(&[0.0], &[1.0], KsMethod::Exact).unwrap();
        assert!((result.p_value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_exact_p_value_large_samples_stay_finite() {
        let a = range(0, 1000);
        let b = range(500, 1500);
        let result = ks_2samp(&a, &b, KsMethod::Exact).unwrap();
        assert!(result.p_value.is_finite());
        assert!(result.p_value < 1e-10);
    }

    #[test]
    fn test_auto_picks_exact_for_small_samples() {
        let result = ks_2samp(&range(0, 100), &range(5, 105), KsMethod::Auto).unwrap();
        assert_eq!(result.method, KsMethod::Exact);
    }

    #[test]
    fn test_auto_picks_asymptotic_for_large_samples() {
        let result = ks_2samp(&range(0, 2000), &range(0, 2000), KsMethod::Auto).unwrap();
        assert_eq!(result.method, KsMethod::Asymptotic);
        assert_eq!(result.p_value, 1.0);
    }

    #[test]
    fn test_exact_and_asymptotic_agree() {
        let a = range(0, 50);
        let b = range(10, 60);
        let exact = ks_2samp(&a, &b, KsMethod::Exact).unwrap();
        let asymp = ks_2samp(&a, &b, KsMethod::Asymptotic).unwrap();
        assert_eq!(exact.statistic, asymp.statistic);
        assert!(
            (exact.p_value - asymp.p_value).abs() < 0.1,
            "exact {} vs asymptotic {}",
            exact.p_value,
            asymp.p_value
        );
    }

    #[test]
    fn test_p_value_decreases_with_shift() {
        let a = range(0, 40);
        let small = ks_2samp(&a, &range(2, 42), KsMethod::Exact).unwrap();
        let large = ks_2samp(&a, &range(20, 60), KsMethod::Exact).unwrap();
        assert!(large.p_value < small.p_value);
    }

    #[test]
    fn test_kolmogorov_sf_limits() {
        assert_eq!(kolmogorov_sf(0.0), 1.0);
        assert!((kolmogorov_sf(1e-6) - 1.0).abs() < 1e-9);
        assert!(kolmogorov_sf(3.0) < 1e-6);
    }

    #[test]
    fn test_kolmogorov_sf_reference_value() {
        // Q(1.36) is the classic 5% critical point.
        assert!((kolmogorov_sf(1.36) - 0.0494).abs() < 1e-3);
    }
}
