//! Check command - verify a dashboard document against the generator's invariants

use super::super::app::CheckArgs;
use anyhow::{Context, Result, bail};
use mock_suites_core::check_summary_json;
use tokio::fs;
use tracing::warn;

pub async fn execute(args: CheckArgs) -> Result<()> {
    let content = fs::read_to_string(&args.path)
        .await
        .with_context(|| format!("Failed to read {}", args.path.display()))?;

    let report = check_summary_json(&content)
        .with_context(|| format!("{} is not a dashboard document", args.path.display()))?;

    println!(
        "Checked {} suites and {} test cases in {}",
        report.suites_checked,
        report.cases_checked,
        args.path.display()
    );

    if report.is_clean() {
        println!("✅ No violations found");
        return Ok(());
    }

    for violation in &report.violations {
        warn!("{}", violation);
        println!("  ❌ {}", violation);
    }

    bail!("{} invariant violations found", report.violations.len())
}
