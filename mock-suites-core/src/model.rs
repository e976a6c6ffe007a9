//! Record shapes consumed by the dashboard
//!
//! Field names serialize in camelCase to match the dashboard's DTO
//! declarations. All records are plain values; nothing holds a reference back
//! to its parent.

use crate::catalog::{HttpMethod, ValidationKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a test case or of a single validation row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestStatus {
    Pass,
    Fail,
}

impl TestStatus {
    pub fn is_pass(self) -> bool {
        self == TestStatus::Pass
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TestStatus::Pass => "Pass",
            TestStatus::Fail => "Fail",
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single simulated execution run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSuite {
    pub ado_run_id: String,
    pub suite_name: String,
    pub total_test_cases: u32,
    pub passed: u32,
    pub failed: u32,
    #[serde(with = "iso_millis")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    pub end_time: DateTime<Utc>,
    pub execution_duration: String,
    pub test_cases: Vec<TestCase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl TestSuite {
    /// Wall-clock seconds between start and end
    pub fn duration_seconds(&self) -> i64 {
        (self.end_time - self.start_time).num_seconds()
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total_test_cases == 0 {
            return 0.0;
        }
        f64::from(self.passed) / f64::from(self.total_test_cases)
    }
}

/// One request/response exercise within a suite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub test_case: TestCaseDto,
    pub output: TestOutputDto,
    pub validations: Vec<ValidationDto>,
    pub status: TestStatus,
}

/// Description of the simulated request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseDto {
    pub idx: String,
    pub test_step_name: String,
    pub method: HttpMethod,
    #[serde(rename = "webURL")]
    pub web_url: String,
    pub header_sheet: String,
    pub body_text: String,
    pub validation_sheet: String,
    pub correlate_sheet: String,
    pub negative_case: String,
    pub params: String,
    pub comments: String,
    pub input1: String,
}

impl TestCaseDto {
    pub fn is_negative(&self) -> bool {
        self.negative_case == "Yes"
    }
}

/// Description of the simulated response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestOutputDto {
    pub output_json: String,
    pub api_name: String,
    pub execution_time_in_sec: f64,
    pub length: usize,
}

/// One assertion row checked against the response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationDto {
    pub static_data: String,
    #[serde(rename = "type")]
    pub kind: ValidationKind,
    pub field: String,
    pub value: String,
    pub api_field: String,
    pub api_value: String,
    pub source_value: String,
    pub result: TestStatus,
    pub parameters: String,
    pub service_name: String,
    pub header: String,
    pub body: String,
    pub sub_header1: String,
    pub sub_header2: String,
}

/// Aggregate handed to the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub suites: Vec<TestSuite>,
}

impl DashboardSummary {
    pub fn new(suites: Vec<TestSuite>) -> Self {
        Self { suites }
    }
}

impl From<Vec<TestSuite>> for DashboardSummary {
    fn from(suites: Vec<TestSuite>) -> Self {
        Self::new(suites)
    }
}

/// Render a timestamp the way the dashboard expects: `2024-05-01T12:30:45.123Z`
pub fn format_iso(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Serde adapter for millisecond-precision ISO-8601 UTC timestamps
pub mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_iso(time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&text)
            .map(|time| time.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
