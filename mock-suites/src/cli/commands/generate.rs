//! Generate command - build a corpus and print or write it

use super::super::app::GenerateArgs;
use anyhow::{Context, Result};
use mock_suites_core::{AppConfig, ExportFormat, MockSuiteGenerator, SuiteExporter};
use tracing::info;

pub async fn execute(args: GenerateArgs, config: AppConfig) -> Result<()> {
    let mut generator_config = config.generator;
    if args.seed.is_some() {
        generator_config.seed = args.seed;
    }

    let format = match &args.format {
        Some(name) => name.parse::<ExportFormat>()?,
        None => config.output.format,
    };
    let pretty = config.output.pretty && !args.compact;

    let suites = MockSuiteGenerator::from_config(&generator_config).generate();

    match &args.output {
        Some(path) => {
            SuiteExporter::export_to_file(&suites, format, pretty, path)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("✅ Wrote {} suites to {}", suites.len(), path.display());
        }
        None => {
            let content = SuiteExporter::render(&suites, format, pretty)?;
            println!("{}", content);
        }
    }

    info!("Generated {} suites as {:?}", suites.len(), format);
    Ok(())
}
