//! Chart-spec emission and status reporting.

use std::path::PathBuf;

use anyhow::Context;
use redcast_core::AppConfig;
use redcast_pipeline::ChartStatus;

/// Run the pipeline and emit the chart spec catalogue as JSON — the hand-off
/// payload for the external renderer.
///
/// # Errors
///
/// Returns an error if the pipeline fails fatally, serialization fails, or
/// the output file cannot be written.
pub(crate) fn run_charts(
    config: &AppConfig,
    pretty: bool,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let specs = redcast_pipeline::run(config)?;

    let json = if pretty {
        serde_json::to_string_pretty(&specs)?
    } else {
        serde_json::to_string(&specs)?
    };

    match out {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("cannot write chart specs to {}", path.display()))?;
            tracing::info!(path = %path.display(), views = specs.len(), "chart specs written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Run the pipeline and print a per-view status table.
///
/// # Errors
///
/// Returns an error if the pipeline fails fatally.
pub(crate) fn run_summary(config: &AppConfig) -> anyhow::Result<()> {
    let specs = redcast_pipeline::run(config)?;

    println!("{:<22}{:<12}{:<10}POINTS", "VIEW", "KIND", "STATUS");
    for spec in &specs {
        let status = match spec.status {
            ChartStatus::Ok => "ok",
            ChartStatus::NoData => "no_data",
        };
        println!(
            "{:<22}{:<12}{:<10}{}",
            spec.label,
            format!("{:?}", spec.kind).to_lowercase(),
            status,
            spec.data.len()
        );
    }
    Ok(())
}
