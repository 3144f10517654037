use polars::prelude::*;

use crate::error::{CheckError, Result};
use crate::schema::REQUIRED_COLUMNS;
use crate::utils::column_names;

/// Check that every required column is present with the expected dtype.
///
/// Missing columns are reported before dtype mismatches: the table's
/// column set must be a superset of the required names first.
pub fn check_schema(current: &DataFrame) -> Result<()> {
    match schema_violations(current).into_iter().next() {
        Some(violation) => Err(violation),
        None => Ok(()),
    }
}

/// Every schema violation of `current`, missing columns first, each group
/// in required-column order.
pub fn schema_violations(current: &DataFrame) -> Vec<CheckError> {
    let present = column_names(current);

    let missing = REQUIRED_COLUMNS
        .iter()
        .filter(|spec| !present.contains(spec.name))
        .map(|spec| CheckError::MissingColumn(spec.name.to_string()));

    let mismatched = REQUIRED_COLUMNS.iter().filter_map(|spec| {
        let column = current.column(spec.name).ok()?;
        let dtype = column.dtype();
        (!spec.type_class.satisfies(dtype)).then(|| CheckError::TypeMismatch {
            column: spec.name.to_string(),
            expected: spec.type_class,
            actual: dtype.to_string(),
        })
    });

    missing.chain(mismatched).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TypeClass;

    fn conforming() -> DataFrame {
        df![
            "age" => [75.0, 55.0],
            "anaemia" => [0i64, 1],
            "creatinine_phosphokinase" => [582i64, 7861],
            "diabetes" => [0i64, 0],
            "ejection_fraction" => [20i64, 38],
            "high_blood_pressure" => [1i64, 0],
            "platelets" => [265000.0, 263358.03],
            "serum_creatinine" => [1.9, 1.1],
            "serum_sodium" => [130i64, 136],
            "sex" => [1i64, 1],
            "smoking" => [0i64, 0],
            "time" => [4i64, 6],
            "DEATH_EVENT" => [1i64, 1],
        ]
        .unwrap()
    }

    #[test]
    fn test_conforming_table_passes() {
        assert!(check_schema(&conforming()).is_ok());
        assert!(schema_violations(&conforming()).is_empty());
    }

    #[test]
    fn test_extra_columns_are_allowed() {
        let mut df = conforming();
        df.with_column(Column::new("notes".into(), ["a", "b"])).unwrap();
        assert!(check_schema(&df).is_ok());
    }

    #[test]
    fn test_missing_column() {
        let df = conforming().drop("serum_sodium").unwrap();
        let err = check_schema(&df).unwrap_err();
        assert!(matches!(err, CheckError::MissingColumn(name) if name == "serum_sodium"));
    }

    #[test]
    fn test_missing_reported_before_mismatch() {
        let mut df = conforming().drop("time").unwrap();
        let age = df
            .column("age")
            .unwrap()
            .as_materialized_series()
            .cast(&DataType::Int64)
            .unwrap();
        df.with_column(age).unwrap();

        let violations = schema_violations(&df);
        assert_eq!(violations.len(), 2);
        assert!(matches!(&violations[0], CheckError::MissingColumn(name) if name == "time"));
        assert!(matches!(
            &violations[1],
            CheckError::TypeMismatch { column, expected: TypeClass::Float, .. } if column == "age"
        ));
    }

    #[test]
    fn test_int_column_cast_to_float() {
        let mut df = conforming();
        let smoking = df
            .column("smoking")
            .unwrap()
            .as_materialized_series()
            .cast(&DataType::Float64)
            .unwrap();
        df.with_column(smoking).unwrap();

        let err = check_schema(&df).unwrap_err();
        match err {
            CheckError::TypeMismatch {
                column,
                expected,
                actual,
            } => {
                assert_eq!(column, "smoking");
                assert_eq!(expected, TypeClass::Int64);
                assert_eq!(actual, DataType::Float64.to_string());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_narrow_integer_is_not_int64() {
        let mut df = conforming();
        let sex = df
            .column("sex")
            .unwrap()
            .as_materialized_series()
            .cast(&DataType::Int32)
            .unwrap();
        df.with_column(sex).unwrap();

        assert!(matches!(
            check_schema(&df),
            Err(CheckError::TypeMismatch { column, .. }) if column == "sex"
        ));
    }
}
