//! Fixed layout of the heart failure clinical records dataset.
//!
//! The column lists, dtype classifiers, label set and range table are
//! properties of this dataset and are not configurable.

use polars::prelude::DataType;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::{is_float_dtype, is_numeric_dtype};

/// Scalar type classifier for a column's dtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeClass {
    /// Any floating point dtype.
    Float,
    /// Exactly 64-bit signed integers.
    Int64,
    /// Any integer or floating point dtype.
    Numeric,
}

impl TypeClass {
    /// Whether a column of `dtype` satisfies this classifier.
    pub fn satisfies(self, dtype: &DataType) -> bool {
        match self {
            TypeClass::Float => is_float_dtype(dtype),
            TypeClass::Int64 => matches!(dtype, DataType::Int64),
            TypeClass::Numeric => is_numeric_dtype(dtype),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeClass::Float => "float",
            TypeClass::Int64 => "int64",
            TypeClass::Numeric => "numeric",
        }
    }
}

impl fmt::Display for TypeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A required column and the classifier its dtype must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub type_class: TypeClass,
}

/// Inclusive bounds expected to hold for every non-missing value of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSpec {
    pub column: &'static str,
    pub min: f64,
    pub max: f64,
}

impl RangeSpec {
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

const fn column(name: &'static str, type_class: TypeClass) -> ColumnSpec {
    ColumnSpec { name, type_class }
}

const fn range(column: &'static str, min: f64, max: f64) -> RangeSpec {
    RangeSpec { column, min, max }
}

/// Binary outcome column.
pub const LABEL_COLUMN: &str = "DEATH_EVENT";

/// Values allowed in [`LABEL_COLUMN`].
pub const KNOWN_LABELS: [i64; 2] = [0, 1];

/// Feature columns compared between the reference and current samples.
pub const NUMERICAL_COLUMNS: [&str; 12] = [
    "age",
    "anaemia",
    "creatinine_phosphokinase",
    "diabetes",
    "ejection_fraction",
    "high_blood_pressure",
    "platelets",
    "serum_creatinine",
    "serum_sodium",
    "sex",
    "smoking",
    "time",
];

/// Columns every table must carry, with their dtype classifier.
pub const REQUIRED_COLUMNS: [ColumnSpec; 13] = [
    column("age", TypeClass::Float),
    column("anaemia", TypeClass::Int64),
    column("creatinine_phosphokinase", TypeClass::Int64),
    column("diabetes", TypeClass::Int64),
    column("ejection_fraction", TypeClass::Int64),
    column("high_blood_pressure", TypeClass::Int64),
    column("platelets", TypeClass::Float),
    column("serum_creatinine", TypeClass::Float),
    column("serum_sodium", TypeClass::Int64),
    column("sex", TypeClass::Int64),
    column("smoking", TypeClass::Int64),
    column("time", TypeClass::Int64),
    column(LABEL_COLUMN, TypeClass::Int64),
];

/// Documented value ranges of the bounded clinical measurements.
pub const COLUMN_RANGES: [RangeSpec; 7] = [
    range("age", 40.0, 95.0),
    range("creatinine_phosphokinase", 23.0, 7861.0),
    range("ejection_fraction", 14.0, 80.0),
    range("platelets", 25100.0, 850000.0),
    range("serum_creatinine", 0.5, 9.4),
    range("serum_sodium", 113.0, 148.0),
    range("time", 4.0, 285.0),
];

/// Whether `value` is one of [`KNOWN_LABELS`].
pub fn is_known_label(value: f64) -> bool {
    KNOWN_LABELS.iter().any(|&label| label as f64 == value)
}

/// Look up the classifier of a required column.
pub fn required_type(name: &str) -> Option<TypeClass> {
    REQUIRED_COLUMNS
        .iter()
        .find(|spec| spec.name == name)
        .map(|spec| spec.type_class)
}
