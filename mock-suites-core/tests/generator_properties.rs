//! Properties that hold for every seed

use chrono::{TimeZone, Utc};
use mock_suites_core::{
    GeneratorConfig, HttpMethod, MockSuiteGenerator, SUITE_COUNT, TestStatus, TestSuite,
    check_suites,
};
use proptest::prelude::*;

fn generate(seed: u64) -> Vec<TestSuite> {
    let config = GeneratorConfig::seeded(seed)
        .with_reference_time(Utc.with_ymd_and_hms(2025, 3, 10, 14, 0, 0).unwrap());
    MockSuiteGenerator::from_config(&config).generate()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_corpus_passes_every_check(seed in any::<u64>()) {
        let report = check_suites(&generate(seed));
        prop_assert!(report.is_clean(), "violations: {:?}", report.violations);
    }

    #[test]
    fn prop_suite_counts(seed in any::<u64>()) {
        let suites = generate(seed);
        prop_assert_eq!(suites.len(), SUITE_COUNT as usize);

        for suite in &suites {
            prop_assert_eq!(suite.passed + suite.failed, suite.total_test_cases);
            prop_assert!((10..=29).contains(&suite.total_test_cases));

            let passing = suite.test_cases.iter().filter(|c| c.status == TestStatus::Pass).count();
            prop_assert_eq!(passing, suite.passed as usize);
            prop_assert!(suite.test_cases[..suite.passed as usize]
                .iter()
                .all(|c| c.status == TestStatus::Pass));
        }
    }

    #[test]
    fn prop_duration_string_reconstructs_seconds(seed in any::<u64>()) {
        for suite in generate(seed) {
            let seconds = suite_seconds(&suite.execution_duration);
            prop_assert_eq!(i64::from(seconds), suite.duration_seconds());
        }
    }

    #[test]
    fn prop_cases_are_well_formed(seed in any::<u64>()) {
        for suite in generate(seed) {
            for case in &suite.test_cases {
                let dto = &case.test_case;
                if matches!(dto.method, HttpMethod::Get | HttpMethod::Delete) {
                    prop_assert!(dto.body_text.is_empty());
                } else {
                    prop_assert!(serde_json::from_str::<serde_json::Value>(&dto.body_text).is_ok());
                }

                prop_assert_eq!(case.output.length, case.output.output_json.chars().count());

                match case.status {
                    TestStatus::Fail => prop_assert_eq!(case.validations[0].result, TestStatus::Fail),
                    TestStatus::Pass => prop_assert!(
                        case.validations.iter().all(|row| row.result == TestStatus::Pass)
                    ),
                }
            }
        }
    }
}

fn suite_seconds(duration: &str) -> u32 {
    let (minutes, seconds) = duration.trim_end_matches('s').split_once("m ").unwrap();
    minutes.parse::<u32>().unwrap() * 60 + seconds.parse::<u32>().unwrap()
}

#[test]
fn test_sorted_by_start_time_descending() {
    let suites = generate(2024);
    for pair in suites.windows(2) {
        assert!(pair[0].start_time >= pair[1].start_time);
    }
}

#[test]
fn test_pinned_config_is_reproducible() {
    assert_eq!(generate(77), generate(77));
}
