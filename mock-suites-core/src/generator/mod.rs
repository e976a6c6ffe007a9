//! Mock suite generation
//!
//! Builds a corpus of fake test-execution runs for dashboard development. The
//! generator owns its random source and a fixed "now", so a seeded generator
//! with a pinned reference time is fully reproducible.

mod case;
mod validations;


use crate::catalog::ServiceKind;
use crate::config::GeneratorConfig;
use crate::model::TestSuite;
use chrono::{DateTime, Duration, SubsecRound, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use case::CaseContext;

/// Number of runs in every generated corpus
pub const SUITE_COUNT: u32 = 25;

/// Generates synthetic test suites
pub struct MockSuiteGenerator<R = StdRng> {
    rng: R,
    now: DateTime<Utc>,
}

impl MockSuiteGenerator<StdRng> {
    /// Seeded from `config.seed` when set, otherwise from entropy.
    ///
    /// A pinned reference time must pass [`GeneratorConfig::validate`].
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let now = config.reference_time.unwrap_or_else(Utc::now);
        Self::with_rng(rng, now)
    }
}

impl<R: Rng> MockSuiteGenerator<R> {
    /// Use an explicit random source and reference time.
    ///
    /// The reference time is truncated to milliseconds so that encoded timestamps are exact.
    pub fn with_rng(rng: R, now: DateTime<Utc>) -> Self {
        Self { rng, now: now.trunc_subsecs(3) }
    }

    pub fn reference_time(&self) -> DateTime<Utc> {
        self.now
    }

    /// Generate [`SUITE_COUNT`] suites, most recent first
    pub fn generate(&mut self) -> Vec<TestSuite> {
        let mut suites: Vec<TestSuite> = (1..=SUITE_COUNT).map(|run| self.generate_suite(run)).collect();

        suites.sort_by(|a, b| b.start_time.cmp(&a.start_time));

        let total_cases: usize = suites.iter().map(|suite| suite.test_cases.len()).sum();
        info!("Generated {} mock suites with {} test cases", suites.len(), total_cases);
        suites
    }

    fn generate_suite(&mut self, run: u32) -> TestSuite {
        let service = ServiceKind::ALL[self.rng.gen_range(0..ServiceKind::ALL.len())];
        let total: u32 = self.rng.gen_range(10..30);
        let pass_rate: f64 = self.rng.gen_range(0.70..=0.95);
        let passed = passed_count(total, pass_rate);
        let failed = total - passed;

        let start_time = self.now - Duration::days(i64::from(run));
        let duration: u32 = self.rng.gen_range(60..360);
        let end_time = start_time + Duration::seconds(i64::from(duration));

        let test_cases = (0..total)
            .map(|index| {
                let ctx = CaseContext { service, run, index, passed, now: self.now };
                ctx.generate(&mut self.rng)
            })
            .collect();

        let version = format!(
            "v{}.{}.{}",
            self.rng.gen_range(1..=3),
            self.rng.gen_range(0..10),
            self.rng.gen_range(0..20)
        );

        debug!(
            "Run {}: {} with {} cases ({} passed, {} failed)",
            run, service, total, passed, failed
        );

        TestSuite {
            ado_run_id: run_id(run),
            suite_name: service.display_name().to_string(),
            total_test_cases: total,
            passed,
            failed,
            start_time,
            end_time,
            execution_duration: format_duration(duration),
            test_cases,
            version: Some(version),
        }
    }
}

/// Generate a fresh corpus from entropy and the current clock
pub fn generate_mock_suites() -> Vec<TestSuite> {
    MockSuiteGenerator::from_config(&GeneratorConfig::default()).generate()
}

/// `floor(total * rate)`, never more than `total`
fn passed_count(total: u32, pass_rate: f64) -> u32 {
    let passed = (f64::from(total) * pass_rate.clamp(0.0, 1.0)).floor() as u32;
    passed.min(total)
}

/// `ADO-<10000 + run>` zero padded to five digits
pub fn run_id(run: u32) -> String {
    format!("ADO-{:05}", 10_000 + run)
}

/// `<minutes>m <seconds>s`
pub fn format_duration(seconds: u32) -> String {
    format!("{}m {}s", seconds / 60, seconds % 60)
}
