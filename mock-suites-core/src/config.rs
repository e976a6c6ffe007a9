//! Configuration for generation and output
//!
//! A TOML file can pin the seed and reference time so that two runs produce
//! byte-identical corpora. Anything left unset falls back to entropy and the
//! current clock.

use crate::error::{MockSuiteError, Result};
use crate::export::ExportFormat;
use crate::generator::SUITE_COUNT;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Generator inputs
    pub generator: GeneratorConfig,

    /// Output rendering
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.generator.validate()
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Furthest back from the reference time that generated dates reach
const LOOKBACK_DAYS: i64 = 365 + SUITE_COUNT as i64;
/// Furthest ahead of the reference time that generated dates reach
const LOOKAHEAD_DAYS: i64 = 7;

/// Inputs that control the random source and the clock
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed for the random source; entropy is used when unset
    pub seed: Option<u64>,

    /// The "now" that run start times count back from; the wall clock when unset
    pub reference_time: Option<DateTime<Utc>>,
}

impl GeneratorConfig {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed), reference_time: None }
    }

    pub fn with_reference_time(mut self, reference_time: DateTime<Utc>) -> Self {
        self.reference_time = Some(reference_time);
        self
    }

    /// Reject a reference time too close to the representable range for
    /// generated dates to be computed around it
    pub fn validate(&self) -> Result<()> {
        let Some(now) = self.reference_time else {
            return Ok(());
        };

        let in_range = now.checked_sub_signed(Duration::days(LOOKBACK_DAYS)).is_some()
            && now.checked_add_signed(Duration::days(LOOKAHEAD_DAYS)).is_some();
        if !in_range {
            return Err(MockSuiteError::invalid_config(format!(
                "reference_time {now} leaves no room for generated dates"
            )));
        }
        Ok(())
    }

    /// True when both the seed and the clock are pinned
    pub fn is_reproducible(&self) -> bool {
        self.seed.is_some() && self.reference_time.is_some()
    }
}

/// How generated data is rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: ExportFormat,
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: ExportFormat::Json, pretty: true }
    }
}
