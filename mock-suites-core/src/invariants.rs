//! Structural checks over generated or hand-edited corpora
//!
//! Every rule here holds for any corpus the generator produces. Running the
//! checks over a JSON document tells a dashboard developer whether fixture data
//! they edited by hand still looks like generated data.

use crate::catalog::HttpMethod;
use crate::error::Result;
use crate::generator::SUITE_COUNT;
use crate::model::{DashboardSummary, TestCase, TestStatus, TestSuite};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Rules a corpus must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rule {
    SuiteCount,
    SortedByStartTime,
    RunIdFormat,
    CountsAddUp,
    TotalInRange,
    CaseCountMatchesTotal,
    PassBlockIsLeading,
    DurationMatchesTimes,
    VersionFormat,
    EmptyBodyForMethod,
    BodyIsJson,
    OutputLength,
    ResponseFormat,
    FailingCaseFirstRowFails,
    PassingCaseRowsPass,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A single broken rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Run the violation belongs to, if it is scoped to one suite
    pub run_id: Option<String>,
    /// Test case (1-based) or validation row within the suite
    pub location: Option<String>,
    pub rule: Rule,
    pub detail: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.rule)?;
        if let Some(run_id) = &self.run_id {
            write!(f, " {run_id}")?;
        }
        if let Some(location) = &self.location {
            write!(f, " {location}")?;
        }
        write!(f, ": {}", self.detail)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvariantReport {
    pub suites_checked: usize,
    pub cases_checked: usize,
    pub violations: Vec<Violation>,
}

impl InvariantReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    fn push(&mut self, run_id: Option<&str>, location: Option<String>, rule: Rule, detail: String) {
        self.violations.push(Violation {
            run_id: run_id.map(str::to_string),
            location,
            rule,
            detail,
        });
    }
}

/// Check every rule over a corpus
pub fn check_suites(suites: &[TestSuite]) -> InvariantReport {
    let mut report = InvariantReport { suites_checked: suites.len(), ..Default::default() };

    if suites.len() != SUITE_COUNT as usize {
        report.push(
            None,
            None,
            Rule::SuiteCount,
            format!("expected {} suites, found {}", SUITE_COUNT, suites.len()),
        );
    }

    for (position, pair) in suites.windows(2).enumerate() {
        if pair[0].start_time < pair[1].start_time {
            report.push(
                Some(&pair[1].ado_run_id),
                None,
                Rule::SortedByStartTime,
                format!("suite at position {} starts after the one before it", position + 1),
            );
        }
    }

    for suite in suites {
        check_suite(suite, &mut report);
    }

    debug!(
        "Checked {} suites and {} cases, {} violations",
        report.suites_checked,
        report.cases_checked,
        report.violations.len()
    );
    report
}

/// Parse a `{ "suites": [...] }` document and check it
pub fn check_summary_json(json: &str) -> Result<InvariantReport> {
    let summary: DashboardSummary = serde_json::from_str(json)?;
    Ok(check_suites(&summary.suites))
}

fn check_suite(suite: &TestSuite, report: &mut InvariantReport) {
    let run_id = Some(suite.ado_run_id.as_str());

    if !suite_patterns::run_id::is_valid(&suite.ado_run_id) {
        report.push(run_id, None, Rule::RunIdFormat, format!("malformed run id '{}'", suite.ado_run_id));
    }

    if u64::from(suite.passed) + u64::from(suite.failed) != u64::from(suite.total_test_cases) {
        report.push(
            run_id,
            None,
            Rule::CountsAddUp,
            format!(
                "passed {} + failed {} != total {}",
                suite.passed, suite.failed, suite.total_test_cases
            ),
        );
    }

    if !(10..=29).contains(&suite.total_test_cases) {
        report.push(
            run_id,
            None,
            Rule::TotalInRange,
            format!("total {} outside 10..=29", suite.total_test_cases),
        );
    }

    if suite.test_cases.len() != suite.total_test_cases as usize {
        report.push(
            run_id,
            None,
            Rule::CaseCountMatchesTotal,
            format!("{} cases recorded for a total of {}", suite.test_cases.len(), suite.total_test_cases),
        );
    }

    match suite_patterns::duration::parse(&suite.execution_duration) {
        Some(seconds) if i64::from(seconds) == suite.duration_seconds() => {}
        _ => report.push(
            run_id,
            None,
            Rule::DurationMatchesTimes,
            format!(
                "'{}' does not match {}s between start and end",
                suite.execution_duration,
                suite.duration_seconds()
            ),
        ),
    }

    if let Some(version) = &suite.version {
        if !suite_patterns::version::is_valid(version) {
            report.push(run_id, None, Rule::VersionFormat, format!("malformed version '{version}'"));
        }
    }

    for (index, case) in suite.test_cases.iter().enumerate() {
        let expected = if (index as u32) < suite.passed { TestStatus::Pass } else { TestStatus::Fail };
        if case.status != expected {
            report.push(
                run_id,
                Some(format!("case {}", index + 1)),
                Rule::PassBlockIsLeading,
                format!("status {} where {} was expected", case.status, expected),
            );
        }
        check_case(run_id, index, case, report);
        report.cases_checked += 1;
    }
}

fn check_case(run_id: Option<&str>, index: usize, case: &TestCase, report: &mut InvariantReport) {
    let location = || Some(format!("case {}", index + 1));
    let dto = &case.test_case;

    if matches!(dto.method, HttpMethod::Get | HttpMethod::Delete) && !dto.body_text.is_empty() {
        report.push(
            run_id,
            location(),
            Rule::EmptyBodyForMethod,
            format!("{} request carries a body", dto.method),
        );
    }

    if !dto.body_text.is_empty() {
        if let Err(e) = serde_json::from_str::<serde_json::Value>(&dto.body_text) {
            report.push(run_id, location(), Rule::BodyIsJson, format!("body is not JSON: {e}"));
        }
    }

    let actual_length = case.output.output_json.chars().count();
    if case.output.length != actual_length {
        report.push(
            run_id,
            location(),
            Rule::OutputLength,
            format!("length {} but output has {} characters", case.output.length, actual_length),
        );
    }

    if let Some(problem) = response_format_problem(&case.output.output_json) {
        report.push(run_id, location(), Rule::ResponseFormat, problem);
    }

    match case.status {
        TestStatus::Fail => {
            if case.validations.first().is_some_and(|row| row.result != TestStatus::Fail) {
                report.push(
                    run_id,
                    location(),
                    Rule::FailingCaseFirstRowFails,
                    "first validation row of a failing case passed".to_string(),
                );
            }
        }
        TestStatus::Pass => {
            for (row, validation) in case.validations.iter().enumerate() {
                if validation.result != TestStatus::Pass {
                    report.push(
                        run_id,
                        Some(format!("case {} row {}", index + 1, row + 1)),
                        Rule::PassingCaseRowsPass,
                        format!("{} check on '{}' failed in a passing case", validation.kind, validation.field),
                    );
                }
            }
        }
    }
}

/// Response documents carry `data.id` and `data.timestamp` in generated formats
fn response_format_problem(output_json: &str) -> Option<String> {
    let response: serde_json::Value = match serde_json::from_str(output_json) {
        Ok(value) => value,
        Err(e) => return Some(format!("output is not JSON: {e}")),
    };
    let data = &response["data"];

    match data["id"].as_str() {
        Some(id) if suite_patterns::data_id::is_valid(id) => {}
        other => return Some(format!("malformed data id {:?}", other)),
    }
    match data["timestamp"].as_str() {
        Some(ts) if suite_patterns::timestamp::is_valid(ts) => None,
        other => Some(format!("malformed data timestamp {:?}", other)),
    }
}
