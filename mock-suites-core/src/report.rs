//! Aggregate statistics over a corpus of suites

use crate::catalog::HttpMethod;
use crate::model::{TestStatus, TestSuite};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Totals across every suite in a corpus
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuiteStatistics {
    pub suite_count: usize,
    pub case_count: usize,
    pub passed_cases: usize,
    pub failed_cases: usize,
    pub validation_count: usize,
    pub failed_validations: usize,
    pub pass_rate: f64,
    pub average_duration_seconds: f64,
    /// Keyed by suite name
    pub services: BTreeMap<String, ServiceStatistics>,
    pub methods: BTreeMap<HttpMethod, usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatistics {
    pub suites: usize,
    pub cases: usize,
    pub passed: usize,
}

impl ServiceStatistics {
    pub fn pass_rate(&self) -> f64 {
        ratio(self.passed, self.cases)
    }
}

impl SuiteStatistics {
    pub fn from_suites(suites: &[TestSuite]) -> Self {
        let mut stats = SuiteStatistics { suite_count: suites.len(), ..Default::default() };
        let mut total_duration = 0i64;

        for suite in suites {
            total_duration += suite.duration_seconds();

            let service = stats.services.entry(suite.suite_name.clone()).or_default();
            service.suites += 1;

            for case in &suite.test_cases {
                service.cases += 1;
                stats.case_count += 1;
                match case.status {
                    TestStatus::Pass => {
                        service.passed += 1;
                        stats.passed_cases += 1;
                    }
                    TestStatus::Fail => stats.failed_cases += 1,
                }

                *stats.methods.entry(case.test_case.method).or_default() += 1;

                stats.validation_count += case.validations.len();
                stats.failed_validations +=
                    case.validations.iter().filter(|row| row.result == TestStatus::Fail).count();
            }
        }

        stats.pass_rate = ratio(stats.passed_cases, stats.case_count);
        if !suites.is_empty() {
            stats.average_duration_seconds = total_duration as f64 / suites.len() as f64;
        }
        stats
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 { 0.0 } else { part as f64 / whole as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::generator::MockSuiteGenerator;

    #[test]
    fn test_empty_corpus() {
        let stats = SuiteStatistics::from_suites(&[]);
        assert_eq!(stats.suite_count, 0);
        assert_eq!(stats.pass_rate, 0.0);
        assert_eq!(stats.average_duration_seconds, 0.0);
        assert!(stats.services.is_empty());
    }

    #[test]
    fn test_totals_agree_with_suites() {
        let suites = MockSuiteGenerator::from_config(&GeneratorConfig::seeded(31)).generate();
        let stats = SuiteStatistics::from_suites(&suites);

        let expected_cases: u32 = suites.iter().map(|suite| suite.total_test_cases).sum();
        let expected_passed: u32 = suites.iter().map(|suite| suite.passed).sum();

        assert_eq!(stats.suite_count, 25);
        assert_eq!(stats.case_count, expected_cases as usize);
        assert_eq!(stats.passed_cases, expected_passed as usize);
        assert_eq!(stats.passed_cases + stats.failed_cases, stats.case_count);
        assert_eq!(stats.methods.values().sum::<usize>(), stats.case_count);
        assert_eq!(stats.services.values().map(|s| s.suites).sum::<usize>(), 25);
        assert!(stats.failed_validations >= stats.failed_cases);
        assert!((60.0..360.0).contains(&stats.average_duration_seconds));
        assert!(stats.pass_rate > 0.6 && stats.pass_rate <= 0.95);
    }
}
