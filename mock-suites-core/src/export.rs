//! Render generated suites in various formats

use crate::error::{MockSuiteError, Result};
use crate::model::{DashboardSummary, TestSuite, format_iso};
use crate::report::SuiteStatistics;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
    #[serde(alias = "md")]
    Markdown,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Markdown => "md",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = MockSuiteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(MockSuiteError::unknown_format(s)),
        }
    }
}

/// Exports suites for the dashboard or for people
pub struct SuiteExporter;

impl SuiteExporter {
    /// Render suites into a string
    pub fn render(suites: &[TestSuite], format: ExportFormat, pretty: bool) -> Result<String> {
        match format {
            ExportFormat::Json => Self::export_json(suites, pretty),
            ExportFormat::Csv => Ok(Self::export_csv(suites)),
            ExportFormat::Markdown => Ok(Self::export_markdown(suites)),
        }
    }

    /// Export suites to a file
    pub async fn export_to_file(
        suites: &[TestSuite],
        format: ExportFormat,
        pretty: bool,
        output_path: impl AsRef<Path>,
    ) -> Result<()> {
        let content = Self::render(suites, format, pretty)?;
        tokio::fs::write(output_path.as_ref(), content).await?;

        info!("Exported {} suites to {:?}", suites.len(), output_path.as_ref());
        Ok(())
    }

    /// The dashboard document, `{ "suites": [...] }`
    fn export_json(suites: &[TestSuite], pretty: bool) -> Result<String> {
        let summary = DashboardSummary::new(suites.to_vec());
        let json = if pretty {
            serde_json::to_string_pretty(&summary)?
        } else {
            serde_json::to_string(&summary)?
        };
        Ok(json)
    }

    /// One row per suite
    fn export_csv(suites: &[TestSuite]) -> String {
        let mut csv = String::new();

        csv.push_str("adoRunId,suiteName,totalTestCases,passed,failed,");
        csv.push_str("startTime,endTime,executionDuration,version\n");

        for suite in suites {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{},{}\n",
                suite.ado_run_id,
                suite.suite_name,
                suite.total_test_cases,
                suite.passed,
                suite.failed,
                format_iso(&suite.start_time),
                format_iso(&suite.end_time),
                suite.execution_duration,
                suite.version.as_deref().unwrap_or_default(),
            ));
        }

        csv
    }

    fn export_markdown(suites: &[TestSuite]) -> String {
        let stats = SuiteStatistics::from_suites(suites);
        let mut md = String::new();

        md.push_str("# Mock Test Suite Report\n\n");
        if let Some(latest) = suites.iter().map(|suite| suite.end_time).max() {
            md.push_str(&format!("Latest run finished: {}\n\n", format_iso(&latest)));
        }

        md.push_str("## Totals\n\n");
        md.push_str(&format!("- Suites: {}\n", stats.suite_count));
        md.push_str(&format!(
            "- Test cases: {} ({} passed, {} failed)\n",
            stats.case_count, stats.passed_cases, stats.failed_cases
        ));
        md.push_str(&format!("- Pass rate: {:.1}%\n", stats.pass_rate * 100.0));
        md.push_str(&format!(
            "- Validations: {} ({} failed)\n",
            stats.validation_count, stats.failed_validations
        ));
        md.push_str(&format!("- Average duration: {:.0}s\n\n", stats.average_duration_seconds));

        if !suites.is_empty() {
            md.push_str("## Suites\n\n");
            md.push_str("| Run | Suite | Cases | Passed | Failed | Started | Duration | Version |\n");
            md.push_str("|-----|-------|-------|--------|--------|---------|----------|---------|\n");

            for suite in suites {
                md.push_str(&format!(
                    "| {} | {} | {} | {} | {} | {} | {} | {} |\n",
                    suite.ado_run_id,
                    suite.suite_name,
                    suite.total_test_cases,
                    suite.passed,
                    suite.failed,
                    suite.start_time.format("%Y-%m-%d %H:%M"),
                    suite.execution_duration,
                    suite.version.as_deref().unwrap_or("-"),
                ));
            }
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::generator::MockSuiteGenerator;
    use chrono::{TimeZone, Utc};

    fn suites() -> Vec<TestSuite> {
        MockSuiteGenerator::from_config(&GeneratorConfig::seeded(41)).generate()
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("md".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert!(matches!(
            "xml".parse::<ExportFormat>(),
            Err(MockSuiteError::UnknownFormat { .. })
        ));
        assert_eq!(ExportFormat::Markdown.extension(), "md");
    }

    #[test]
    fn test_json_is_dashboard_document() {
        let suites = suites();
        let compact = SuiteExporter::render(&suites, ExportFormat::Json, false).unwrap();
        let pretty = SuiteExporter::render(&suites, ExportFormat::Json, true).unwrap();

        assert!(!compact.contains('\n'));
        let back: DashboardSummary = serde_json::from_str(&pretty).unwrap();
        assert_eq!(back.suites.len(), suites.len());
        for (read, written) in back.suites.iter().zip(&suites) {
            assert_eq!(read.ado_run_id, written.ado_run_id);
            assert_eq!(read.start_time, written.start_time);
            assert_eq!(read.test_cases.len(), written.test_cases.len());
        }
    }

    #[test]
    fn test_csv_rows() {
        let suites = suites();
        let csv = SuiteExporter::render(&suites, ExportFormat::Csv, true).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), suites.len() + 1);
        assert!(lines[0].starts_with("adoRunId,suiteName"));
        assert!(lines[1].starts_with(&suites[0].ado_run_id));
        assert_eq!(lines[1].split(',').count(), 9);
    }

    #[test]
    fn test_markdown_report() {
        let suites = suites();
        let md = SuiteExporter::render(&suites, ExportFormat::Markdown, true).unwrap();

        assert!(md.starts_with("# Mock Test Suite Report"));
        assert!(md.contains("- Suites: 25"));
        assert!(md.contains(&format!("| {} | {} |", suites[0].ado_run_id, suites[0].suite_name)));
    }

    #[test]
    fn test_pinned_renders_are_identical() {
        let config = GeneratorConfig::seeded(42)
            .with_reference_time(Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0).unwrap());

        for format in [ExportFormat::Json, ExportFormat::Csv, ExportFormat::Markdown] {
            let first = MockSuiteGenerator::from_config(&config).generate();
            let second = MockSuiteGenerator::from_config(&config).generate();
            assert_eq!(
                SuiteExporter::render(&first, format, true).unwrap(),
                SuiteExporter::render(&second, format, true).unwrap(),
                "{format:?} output differs"
            );
        }

        let md = SuiteExporter::render(
            &MockSuiteGenerator::from_config(&config).generate(),
            ExportFormat::Markdown,
            true,
        )
        .unwrap();
        assert!(md.contains("Latest run finished: 2025-01-14T08:"));
    }

    #[tokio::test]
    async fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("suites.json");
        let suites = suites();

        SuiteExporter::export_to_file(&suites, ExportFormat::Json, true, &path).await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        let back: DashboardSummary = serde_json::from_str(&content).unwrap();
        assert_eq!(back.suites.len(), 25);
    }
}
