//! Single test case construction

use super::validations::RowContext;
use crate::catalog::{BASE_URL, HttpMethod, ServiceKind};
use crate::model::{TestCase, TestCaseDto, TestOutputDto, TestStatus, format_iso};
use crate::payload::{
    RequestDetails, RequestPayload, ResponseData, ResponseDetails, ResponseMetadata,
    ResponsePayload, base36_token, to_pretty_json,
};
use chrono::{DateTime, Utc};
use rand::Rng;

const NEGATIVE_CASE_PROBABILITY: f64 = 0.2;
const CACHE_HIT_PROBABILITY: f64 = 0.3;

/// Everything a test case needs from its enclosing run
#[derive(Debug, Clone, Copy)]
pub(crate) struct CaseContext {
    pub service: ServiceKind,
    pub run: u32,
    /// 0-based position within the suite
    pub index: u32,
    /// Number of leading cases that pass
    pub passed: u32,
    pub now: DateTime<Utc>,
}

impl CaseContext {
    pub fn status(&self) -> TestStatus {
        if self.index < self.passed { TestStatus::Pass } else { TestStatus::Fail }
    }

    pub fn generate<R: Rng>(&self, rng: &mut R) -> TestCase {
        let status = self.status();
        let method = HttpMethod::ALL[rng.gen_range(0..HttpMethod::ALL.len())];
        let negative = rng.gen_bool(NEGATIVE_CASE_PROBABILITY);

        let body_text = self.request_body(method, rng);
        let output = self.output(status, negative, rng);
        let validations = RowContext {
            service: self.service,
            run: self.run,
            index: self.index,
            status,
        }
        .generate(rng);

        let number = self.index + 1;
        let service = self.service.display_name();

        TestCase {
            test_case: TestCaseDto {
                idx: number.to_string(),
                test_step_name: format!(
                    "{} - {} {} Case {}",
                    service,
                    method,
                    if negative { "(Negative Test)" } else { "Test" },
                    number
                ),
                method,
                web_url: format!("{}{}/{}", BASE_URL, self.service.url_path(), number),
                header_sheet: "HeadersSheet".to_string(),
                body_text,
                validation_sheet: "ValidationSheet".to_string(),
                correlate_sheet: if self.index % 3 == 0 {
                    "CorrelationSheet".to_string()
                } else {
                    String::new()
                },
                negative_case: if negative { "Yes" } else { "No" }.to_string(),
                params: self.params(method),
                comments: format!(
                    "Test case for {} - {} operation. {}",
                    service,
                    method,
                    if negative {
                        "Validates error handling."
                    } else {
                        "Validates successful response."
                    }
                ),
                input1: if self.index % 5 == 0 {
                    format!("extraParam=value{}", self.index)
                } else {
                    String::new()
                },
            },
            output,
            validations,
            status,
        }
    }

    /// Empty for GET/DELETE, pretty JSON otherwise
    fn request_body<R: Rng>(&self, method: HttpMethod, rng: &mut R) -> String {
        if !method.has_body() {
            return String::new();
        }

        let payload = RequestPayload {
            user_id: 1000 + self.index,
            details: RequestDetails::generate(self.service.payload_kind(), self.index, rng),
            timestamp: format_iso(&self.now),
        };
        to_pretty_json(&payload)
    }

    fn output<R: Rng>(&self, status: TestStatus, negative: bool, rng: &mut R) -> TestOutputDto {
        let status_code = match (status, negative) {
            (TestStatus::Pass, _) => 200,
            (TestStatus::Fail, true) => 400,
            (TestStatus::Fail, false) => 500,
        };
        let message = match status {
            TestStatus::Pass => "Operation completed successfully",
            TestStatus::Fail => "Validation failed",
        };

        let payload = ResponsePayload {
            success: status.is_pass(),
            status_code,
            message: message.to_string(),
            data: ResponseData {
                id: format!(
                    "{}-{:08}",
                    self.service.short_name().to_uppercase(),
                    10_000 + self.index
                ),
                details: ResponseDetails::generate(
                    self.service.payload_kind(),
                    self.index,
                    status,
                    self.now,
                    rng,
                ),
                timestamp: format_iso(&self.now),
                processing_node: format!("node-{}", rng.gen_range(1..=10)),
                trace_id: format!("trace-{}", base36_token(rng, 13)),
            },
            metadata: ResponseMetadata {
                api_version: "v1".to_string(),
                request_id: format!("req-{}", base36_token(rng, 13)),
                execution_time: rng.gen_range(0.5..5.5),
                cache_hit: rng.gen_bool(CACHE_HIT_PROBABILITY),
            },
        };

        let output_json = to_pretty_json(&payload);
        TestOutputDto {
            length: output_json.chars().count(),
            output_json,
            api_name: self.service.display_name().to_string(),
            execution_time_in_sec: rng.gen_range(0.5..5.5),
        }
    }

    fn params(&self, method: HttpMethod) -> String {
        match method {
            HttpMethod::Get => format!(
                "id={}&page=1&limit=10&sort=desc&filter={}",
                1000 + self.index,
                self.service.short_name().to_lowercase()
            ),
            HttpMethod::Post | HttpMethod::Put => "version=v1&async=false".to_string(),
            HttpMethod::Delete | HttpMethod::Patch => {
                format!("id={}&confirm=true", 1000 + self.index)
            }
        }
    }
}
