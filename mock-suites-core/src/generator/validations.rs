//! Validation rows attached to each test case

use crate::catalog::{ServiceKind, VALIDATION_FIELDS, ValidationKind};
use crate::model::{TestStatus, ValidationDto};
use rand::Rng;
use serde_json::json;

/// Chance that a row after the first fails within a failing case
const LATER_ROW_FAILURE_PROBABILITY: f64 = 0.3;

#[derive(Debug, Clone, Copy)]
pub(crate) struct RowContext {
    pub service: ServiceKind,
    pub run: u32,
    pub index: u32,
    pub status: TestStatus,
}

impl RowContext {
    /// Between 5 and 12 rows
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ValidationDto> {
        let count = rng.gen_range(5..=12);
        (0..count).map(|row| self.row(row, rng)).collect()
    }

    /// Row 0 of a failing case always fails; later rows of a failing case fail
    /// at random. Rows of a passing case never fail.
    fn row_fails<R: Rng>(&self, row: usize, rng: &mut R) -> bool {
        match self.status {
            TestStatus::Pass => false,
            TestStatus::Fail => row == 0 || rng.gen_bool(LATER_ROW_FAILURE_PROBABILITY),
        }
    }

    fn row<R: Rng>(&self, row: usize, rng: &mut R) -> ValidationDto {
        let kind = ValidationKind::ALL[rng.gen_range(0..ValidationKind::ALL.len())];
        let field = VALIDATION_FIELDS[rng.gen_range(0..VALIDATION_FIELDS.len())];
        let expected = kind.expected_value(field);

        let fails = self.row_fails(row, rng);
        let actual = if fails { format!("wrong_{field}_value") } else { expected.clone() };
        let is_api = kind == ValidationKind::Api;
        let service = self.service.display_name();

        ValidationDto {
            static_data: text_if(kind == ValidationKind::Static, "CONSTANT_VALUE_123"),
            kind,
            field: field.to_string(),
            api_field: if is_api { format!("response.data.{field}") } else { String::new() },
            source_value: if kind == ValidationKind::Db {
                format!("SELECT {} FROM table WHERE id={}", field, self.index)
            } else {
                String::new()
            },
            result: if fails { TestStatus::Fail } else { TestStatus::Pass },
            parameters: format!(
                "testCase={}|runId={}|service={}",
                self.index + 1,
                self.run,
                service
            ),
            service_name: service.to_string(),
            header: if is_api && field == "status" {
                json!({ "X-Status-Code": "200" }).to_string()
            } else {
                String::new()
            },
            body: if is_api { json!({ field: actual }).to_string() } else { String::new() },
            sub_header1: text_if(is_api, "Content-Type"),
            sub_header2: text_if(is_api, "X-Response-Time"),
            value: expected,
            api_value: actual,
        }
    }
}

fn text_if(enabled: bool, text: &str) -> String {
    if enabled { text.to_string() } else { String::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn context(status: TestStatus) -> RowContext {
        RowContext { service: ServiceKind::Order, run: 3, index: 7, status }
    }

    #[test]
    fn test_passing_case_rows_all_pass() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let rows = context(TestStatus::Pass).generate(&mut rng);
            assert!((5..=12).contains(&rows.len()));
            assert!(rows.iter().all(|row| row.result == TestStatus::Pass));
            assert!(rows.iter().all(|row| row.value == row.api_value));
        }
    }

    #[test]
    fn test_failing_case_first_row_fails() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..50 {
            let rows = context(TestStatus::Fail).generate(&mut rng);
            assert_eq!(rows[0].result, TestStatus::Fail);
            assert_eq!(rows[0].api_value, format!("wrong_{}_value", rows[0].field));
        }
    }

    #[test]
    fn test_actual_value_mismatches_exactly_when_row_fails() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..50 {
            for row in context(TestStatus::Fail).generate(&mut rng) {
                assert_eq!(row.result == TestStatus::Fail, row.value != row.api_value);
            }
        }
    }

    #[test]
    fn test_later_rows_of_failing_case_fail_at_random() {
        let mut rng = StdRng::seed_from_u64(15);
        let later: Vec<TestStatus> = (0..400)
            .flat_map(|_| context(TestStatus::Fail).generate(&mut rng).into_iter().skip(1))
            .map(|row| row.result)
            .collect();

        let failed = later.iter().filter(|status| **status == TestStatus::Fail).count();
        let fraction = failed as f64 / later.len() as f64;
        assert!(later.len() > 1_000);
        assert!((0.25..0.35).contains(&fraction), "failure fraction {fraction}");
    }

    #[test]
    fn test_kind_specific_columns() {
        let mut rng = StdRng::seed_from_u64(14);
        let rows: Vec<ValidationDto> =
            (0..40).flat_map(|_| context(TestStatus::Pass).generate(&mut rng)).collect();

        for row in &rows {
            assert_eq!(row.parameters, "testCase=8|runId=3|service=Order Service");
            assert_eq!(row.service_name, "Order Service");
            match row.kind {
                ValidationKind::Api => {
                    assert_eq!(row.api_field, format!("response.data.{}", row.field));
                    assert_eq!(row.sub_header1, "Content-Type");
                    let body: serde_json::Value = serde_json::from_str(&row.body).unwrap();
                    assert_eq!(body[row.field.as_str()], row.api_value.as_str());
                    assert_eq!(row.header.is_empty(), row.field != "status");
                }
                ValidationKind::Db => {
                    assert_eq!(row.source_value, format!("SELECT {} FROM table WHERE id=7", row.field));
                    assert!(row.body.is_empty());
                }
                ValidationKind::Static => {
                    assert_eq!(row.static_data, "CONSTANT_VALUE_123");
                    assert_eq!(row.value, "static_constant");
                }
                ValidationKind::Regex | ValidationKind::Schema => {
                    assert!(row.api_field.is_empty());
                    assert!(row.static_data.is_empty());
                }
            }
        }
    }
}
