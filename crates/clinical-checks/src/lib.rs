//! Data quality checks for the heart failure clinical records dataset.
//!
//! A table of clinical records (twelve features plus the binary outcome
//! column `DEATH_EVENT`) is validated against four properties:
//!
//! - **Distributional similarity**: each feature column of the current
//!   sample is compared to a reference sample with a two-sample
//!   Kolmogorov-Smirnov test, at a per-column threshold corrected for
//!   the number of columns tested
//! - **Schema**: all required columns are present with the expected dtype
//! - **Label domain**: the outcome column only holds `0` and `1`
//! - **Numeric ranges**: bounded measurements stay within documented limits
//!
//! Tables are borrowed `polars` `DataFrame`s; loading them is up to the
//! caller.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use clinical_checks::checks;
//!
//! checks::check_schema(&current)?;
//! checks::check_label_domain(&current)?;
//! checks::check_numeric_ranges(&current)?;
//! checks::check_distributional_similarity(&reference, &current, 0.05)?;
//! ```
//!
//! Or run everything at once and inspect the report:
//!
//! ```rust,ignore
//! use clinical_checks::{CheckConfig, Validator};
//!
//! let validator = Validator::new(CheckConfig::builder().ks_alpha(0.05).build()?)?;
//! let report = validator.run_all(&reference, &current);
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! ```
//!
//! # Statistical check
//!
//! The distributional check is non-deterministic with respect to the
//! sampling of its inputs: for two samples drawn from the same
//! distribution it still fails with probability close to `alpha`. Treat an
//! isolated failure as a prompt for review.

pub mod checks;
pub mod config;
pub mod error;
pub mod schema;
pub mod stats;
pub mod types;
pub mod utils;
pub mod validator;

// Re-exports for convenient access
pub use checks::{
    check_distributional_similarity, check_label_domain, check_numeric_ranges, check_schema,
};
pub use config::{CheckConfig, CheckConfigBuilder, ConfigValidationError};
pub use error::{CheckError, Result as CheckResult};
pub use schema::{ColumnSpec, RangeSpec, TypeClass};
pub use stats::{KsMethod, KsResult};
pub use types::{CheckKind, CheckOutcome, ValidationReport};
pub use validator::Validator;
