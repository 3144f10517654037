use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CheckError;

/// The four dataset checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    DistributionalSimilarity,
    Schema,
    LabelDomain,
    NumericRanges,
}

impl CheckKind {
    /// All checks, in the order [`crate::Validator::run_all`] runs them.
    pub const ALL: [CheckKind; 4] = [
        CheckKind::DistributionalSimilarity,
        CheckKind::Schema,
        CheckKind::LabelDomain,
        CheckKind::NumericRanges,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CheckKind::DistributionalSimilarity => "distributional_similarity",
            CheckKind::Schema => "schema",
            CheckKind::LabelDomain => "label_domain",
            CheckKind::NumericRanges => "numeric_ranges",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of running one check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub check: CheckKind,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckOutcome {
    pub fn from_result(check: CheckKind, result: &Result<(), CheckError>) -> Self {
        match result {
            Ok(()) => Self {
                check,
                passed: true,
                error_code: None,
                column: None,
                message: None,
            },
            Err(err) => Self {
                check,
                passed: false,
                error_code: Some(err.error_code().to_string()),
                column: err.column().map(str::to_string),
                message: Some(err.to_string()),
            },
        }
    }
}

/// Outcomes of every check over one (reference, current) pair.
///
/// # Example
///
/// ```rust,ignore
/// let report = Validator::default().run_all(&reference, &current);
/// if !report.passed() {
///     println!("{}", serde_json::to_string_pretty(&report)?);
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Timestamp when the report was generated
    pub generated_at: String,
    /// Total execution time in milliseconds
    pub duration_ms: u64,
    /// Rows in the reference table
    pub reference_rows: usize,
    /// Rows in the current table
    pub current_rows: usize,
    /// Overall significance level of the distributional check
    pub ks_alpha: f64,
    /// One entry per check, in run order
    pub outcomes: Vec<CheckOutcome>,
}

impl ValidationReport {
    /// Whether every check passed.
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.passed)
    }

    /// Outcomes of the checks that failed.
    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed)
    }

    pub fn outcome(&self, check: CheckKind) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|outcome| outcome.check == check)
    }
}
