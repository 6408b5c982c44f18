use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use derivation_core::diagnostics::Level;
use derivation_core::pipeline::derive;
use derivation_core::settings::Settings;
use magic_records::LayeredCatalog;

#[derive(Parser)]
#[command(name = "magic-derive")]
#[command(about = "Derive staff and scroll records from the layers in load order")]
struct Cli {
    /// Settings file
    #[arg(short, long, default_value = "magic-derive.toml", env = "MAGIC_DERIVE_SETTINGS")]
    settings: PathBuf,

    /// Output file, overriding the one in settings
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the per-item report as JSON
    #[arg(long)]
    report: Option<PathBuf>,

    /// Run the pipelines without writing the output layer
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("derivation_core=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let settings = Settings::load(&cli.settings)?;
    info!(
        layers = ?settings.participating_layers,
        output = %settings.output_layer,
        "Loaded settings from {}",
        cli.settings.display()
    );

    let catalog = LayeredCatalog::from_layer_files(&settings.load_order)
        .context("failed to build the load order")?;
    settings.check_runnable(catalog.layer_ids())?;
    info!(
        layers = settings.load_order.len(),
        records = catalog.record_count(),
        "Load order ready"
    );

    let derivation = derive(&catalog, &settings);

    for report in &derivation.reports {
        info!(
            pipeline = report.pipeline,
            succeeded = report.succeeded(),
            failed = report.failed(),
            warnings = report.diagnostics.count(Level::Warn),
            errors = report.diagnostics.count(Level::Error),
            "Pipeline summary"
        );
        if let Some(summary) = &report.aggregation {
            info!(
                spells = summary.spells_scanned,
                added = summary.memberships_added,
                "Membership summary"
            );
        }
    }

    if let Some(path) = &cli.report {
        let json = serde_json::to_string_pretty(&derivation.reports)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
    }

    if cli.dry_run {
        info!(
            records = derivation.output.records().len(),
            "Dry run, output not written"
        );
        return Ok(());
    }

    let path = cli.output.unwrap_or_else(|| settings.output_path());
    let json = serde_json::to_string_pretty(&derivation.output.to_layer())?;
    std::fs::write(&path, json)
        .with_context(|| format!("failed to write output layer to {}", path.display()))?;
    info!("Wrote {} to {}", settings.output_layer, path.display());

    Ok(())
}
