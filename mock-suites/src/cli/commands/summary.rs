//! Summary command - aggregate statistics for a generated corpus

use super::super::app::SummaryArgs;
use anyhow::Result;
use mock_suites_core::{AppConfig, SuiteCache, SuiteStatistics};

pub fn execute(args: SummaryArgs, config: AppConfig) -> Result<()> {
    let mut generator_config = config.generator;
    if args.seed.is_some() {
        generator_config.seed = args.seed;
    }

    let cache = SuiteCache::new(generator_config);
    let stats = SuiteStatistics::from_suites(cache.get());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Mock Suite Summary");
    println!("==================\n");
    println!("Suites:      {}", stats.suite_count);
    println!(
        "Test cases:  {} ({} passed, {} failed)",
        stats.case_count, stats.passed_cases, stats.failed_cases
    );
    println!("Pass rate:   {:.1}%", stats.pass_rate * 100.0);
    println!("Validations: {} ({} failed)", stats.validation_count, stats.failed_validations);
    println!("Avg runtime: {:.0}s\n", stats.average_duration_seconds);

    println!("By service:");
    for (name, service) in &stats.services {
        println!(
            "  {:<22} {:>2} suites {:>4} cases {:>6.1}% pass",
            name,
            service.suites,
            service.cases,
            service.pass_rate() * 100.0
        );
    }

    println!("\nBy method:");
    for (method, count) in &stats.methods {
        println!("  {:<8} {}", method, count);
    }

    if let Some(latest) = cache.get().first() {
        println!(
            "\nLatest run: {} ({}) {}",
            latest.ado_run_id, latest.suite_name, latest.execution_duration
        );
    }

    Ok(())
}
