use anyhow::{Context, Result};
use std::{env, io::Write};
use tabular_loader::{LoaderConfig, Source, TabularDataLoader};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging (stderr; stdout carries the dataset) ────────
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tabular_loader=info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) configuration: env, then optional CLI override ──────────
    let mut config = LoaderConfig::from_env().context("reading TABULAR_* configuration")?;
    if let Some(arg) = env::args().nth(1) {
        config.source = Source::parse(&arg).with_context(|| format!("parsing source {}", arg))?;
    }
    info!(source = %config.source, "startup");

    // ─── 3) fetch + parse ───────────────────────────────────────────
    let loader = TabularDataLoader::new(config);
    let dataset = loader
        .fetch_data()
        .await
        .with_context(|| format!("loading {}", loader.config().source))?;

    // ─── 4) emit as JSON ────────────────────────────────────────────
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &dataset)?;
    writeln!(out)?;

    info!(rows = dataset.len(), "done");
    Ok(())
}
