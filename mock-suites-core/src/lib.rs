//! Core functionality for mock-suites
//!
//! This crate generates synthetic test-execution records for populating a
//! test dashboard during development, along with the record types that
//! describe the data's shape. Around the generator it offers an explicit
//! cache handle, aggregate statistics, exports and structural checks.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod invariants;
pub mod model;
pub mod payload;
pub mod report;

pub use cache::SuiteCache;
pub use catalog::{HttpMethod, PayloadKind, ServiceKind, ValidationKind};
pub use config::{AppConfig, GeneratorConfig, OutputConfig};
pub use error::{MockSuiteError, Result};
pub use export::{ExportFormat, SuiteExporter};
pub use generator::{MockSuiteGenerator, SUITE_COUNT, generate_mock_suites};
pub use invariants::{InvariantReport, Rule, Violation, check_suites, check_summary_json};
pub use model::{
    DashboardSummary, TestCase, TestCaseDto, TestOutputDto, TestStatus, TestSuite, ValidationDto,
};
pub use report::{ServiceStatistics, SuiteStatistics};
