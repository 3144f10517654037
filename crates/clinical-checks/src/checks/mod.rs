//! The dataset checks.
//!
//! Each check is a leaf function over borrowed `DataFrame`s that returns
//! `Ok(())` or the first violation it finds:
//!
//! - [`check_distributional_similarity`] - two-sample KS test per feature
//!   column against a reference sample
//! - [`check_schema`] - column presence and dtype
//! - [`check_label_domain`] - outcome labels within `{0, 1}`
//! - [`check_numeric_ranges`] - documented value ranges
//!
//! None of them mutate their input or share state, so they can be called
//! from parallel test threads.

mod columns;
mod distribution;
mod labels;
mod ranges;

pub use columns::{check_schema, schema_violations};
pub use distribution::{
    check_distributional_similarity, check_distributional_similarity_with, column_ks,
};
pub use labels::check_label_domain;
pub use ranges::{check_numeric_ranges, check_range};
