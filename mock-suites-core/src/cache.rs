//! Explicit cache handle for a generated corpus
//!
//! Callers that want the same corpus across several reads hold a `SuiteCache`
//! and pass it where it is needed. There is no process-wide instance.

use crate::config::GeneratorConfig;
use crate::generator::MockSuiteGenerator;
use crate::model::{DashboardSummary, TestSuite};
use once_cell::sync::OnceCell;
use tracing::debug;

/// Lazily generated, read-only corpus
#[derive(Debug, Default)]
pub struct SuiteCache {
    config: GeneratorConfig,
    suites: OnceCell<Vec<TestSuite>>,
}

impl SuiteCache {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config, suites: OnceCell::new() }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate on first access, then return the same suites
    pub fn get(&self) -> &[TestSuite] {
        self.suites.get_or_init(|| {
            debug!("Populating suite cache (seed: {:?})", self.config.seed);
            MockSuiteGenerator::from_config(&self.config).generate()
        })
    }

    pub fn is_populated(&self) -> bool {
        self.suites.get().is_some()
    }

    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary::new(self.get().to_vec())
    }

    /// Take the cached suites, if they were ever generated
    pub fn into_inner(self) -> Option<Vec<TestSuite>> {
        self.suites.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn config() -> GeneratorConfig {
        GeneratorConfig::seeded(21).with_reference_time(Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap())
    }

    #[test]
    fn test_lazy_population() {
        let cache = SuiteCache::new(config());
        assert!(!cache.is_populated());

        let first = cache.get().as_ptr();
        assert!(cache.is_populated());
        assert_eq!(cache.get().as_ptr(), first);
        assert_eq!(cache.get().len(), 25);
    }

    #[test]
    fn test_summary_matches_cache() {
        let cache = SuiteCache::new(config());
        let summary = cache.summary();
        assert_eq!(summary.suites.as_slice(), cache.get());
    }

    #[test]
    fn test_into_inner() {
        let cache = SuiteCache::new(config());
        assert!(SuiteCache::new(config()).into_inner().is_none());

        let expected = cache.get().to_vec();
        assert_eq!(cache.into_inner(), Some(expected));
    }

    #[test]
    fn test_shared_across_threads() {
        let cache = Arc::new(SuiteCache::new(config()));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.get()[0].ado_run_id.clone())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "ADO-10001");
        }
    }
}
