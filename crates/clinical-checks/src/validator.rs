//! Validator facade over the individual checks.

use chrono::Local;
use polars::prelude::*;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::checks;
use crate::config::CheckConfig;
use crate::error::Result;
use crate::types::{CheckKind, CheckOutcome, ValidationReport};

/// Runs the dataset checks with a fixed [`CheckConfig`].
///
/// The validator holds no state besides its configuration, so one instance
/// can be shared across threads.
///
/// # Example
///
/// ```rust,ignore
/// use clinical_checks::{CheckConfig, Validator};
///
/// let validator = Validator::new(CheckConfig::builder().ks_alpha(0.01).build()?)?;
/// validator.schema(&current)?;
///
/// let report = validator.run_all(&reference, &current);
/// for failure in report.failures() {
///     eprintln!("{}: {}", failure.check, failure.message.as_deref().unwrap_or(""));
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: CheckConfig,
}

static_assertions::assert_impl_all!(Validator: Send, Sync);
static_assertions::assert_impl_all!(ValidationReport: Send, Sync);

impl Validator {
    /// Create a validator, rejecting an invalid configuration.
    pub fn new(config: CheckConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Distributional similarity of `current` to `reference`.
    pub fn distribution(&self, reference: &DataFrame, current: &DataFrame) -> Result<()> {
        checks::check_distributional_similarity_with(
            reference,
            current,
            self.config.ks_alpha,
            self.config.ks_method,
        )
    }

    /// Column presence and dtype of `current`.
    pub fn schema(&self, current: &DataFrame) -> Result<()> {
        checks::check_schema(current)
    }

    /// Outcome labels of `current`.
    pub fn labels(&self, current: &DataFrame) -> Result<()> {
        checks::check_label_domain(current)
    }

    /// Value ranges of `current`.
    pub fn ranges(&self, current: &DataFrame) -> Result<()> {
        checks::check_numeric_ranges(current)
    }

    /// Run a single check. Only the distributional check reads `reference`.
    pub fn run(&self, check: CheckKind, reference: &DataFrame, current: &DataFrame) -> Result<()> {
        match check {
            CheckKind::DistributionalSimilarity => self.distribution(reference, current),
            CheckKind::Schema => self.schema(current),
            CheckKind::LabelDomain => self.labels(current),
            CheckKind::NumericRanges => self.ranges(current),
        }
    }

    /// Run every check without stopping at the first failure.
    pub fn run_all(&self, reference: &DataFrame, current: &DataFrame) -> ValidationReport {
        let start_time = Instant::now();
        info!(
            "Running {} checks on {} reference rows and {} current rows",
            CheckKind::ALL.len(),
            reference.height(),
            current.height()
        );

        let outcomes: Vec<CheckOutcome> = CheckKind::ALL
            .iter()
            .map(|&check| {
                let result = self.run(check, reference, current);
                match &result {
                    Ok(()) => debug!("Check {} passed", check),
                    Err(e) => warn!("Check {} failed: {}", check, e),
                }
                CheckOutcome::from_result(check, &result)
            })
            .collect();

        let report = ValidationReport {
            generated_at: Local::now().to_rfc3339(),
            duration_ms: start_time.elapsed().as_millis() as u64,
            reference_rows: reference.height(),
            current_rows: current.height(),
            ks_alpha: self.config.ks_alpha,
            outcomes,
        };

        info!(
            "Validation completed: {}/{} checks passed",
            report.outcomes.len() - report.failures().count(),
            report.outcomes.len()
        );
        report
    }
}
