// Launch Strategy Benchmark Runner
// Runs preset (or user-supplied) launch configurations and prints a comparison table
//
// Usage:
//   cargo run --release --bin bench                          # Compare all presets
//   cargo run --release --bin bench -- --filter LaunchLab    # Filter presets by name
//   cargo run --release --bin bench -- --config sale.json    # Run one JSON config
//   cargo run --release --bin bench -- --series --json       # Write price paths + report

mod report;
mod time_series;

use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use launch_sim::conservation::audit_ledger;
use launch_sim::experiments::{presets, render_table, run_all, Strategy, StrategyOutcome};
use launch_sim::LaunchConfig;

use report::*;
use time_series::{slug, PriceSeries};

// ─── CLI Parsing ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "bench")]
#[command(about = "Compare launch-sale strategies on a bonding curve")]
struct Cli {
    /// Run a single JSON config instead of the presets
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only run presets whose name contains this (case-insensitive)
    #[arg(short, long)]
    filter: Option<String>,

    /// Write each price path as JSONL under <out-dir>/series/
    #[arg(long)]
    series: bool,

    /// Write the full comparison report as JSON under <out-dir>/
    #[arg(long)]
    json: bool,

    /// Output directory for series and reports
    #[arg(long, default_value = "launch-results")]
    out_dir: PathBuf,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "launch_sim=info,bench=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn select_strategies(cli: &Cli) -> Result<Vec<Strategy>> {
    if let Some(path) = &cli.config {
        let config = LaunchConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "custom".to_string());
        return Ok(vec![Strategy::new(name, config)]);
    }

    let all = presets();
    let selected: Vec<Strategy> = match &cli.filter {
        Some(f) => {
            let f_lower = f.to_lowercase();
            all.into_iter()
                .filter(|s| s.name.to_lowercase().contains(&f_lower))
                .collect()
        }
        None => all,
    };
    if selected.is_empty() {
        bail!("no presets match filter: {:?}", cli.filter);
    }
    Ok(selected)
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let strategies = select_strategies(&cli)?;

    info!(count = strategies.len(), "running launch strategies");
    let start = Instant::now();
    let results = run_all(&strategies).context("simulation failed")?;
    let elapsed = start.elapsed();

    let mut reports = Vec::with_capacity(strategies.len());
    for (strategy, result) in strategies.iter().zip(&results) {
        let audit = audit_ledger(&strategy.config, result).map_err(|e| e.to_string());
        if let Err(reason) = &audit {
            warn!(strategy = %strategy.name, %reason, "ledger audit failed");
        }
        reports.push(StrategyReport::new(strategy, result, audit));

        if cli.series {
            let path = cli.out_dir.join("series").join(format!("{}.jsonl", slug(&strategy.name)));
            let series = PriceSeries::from_result(result);
            series
                .write_jsonl(&path)
                .with_context(|| format!("writing series {}", path.display()))?;
            info!(path = %path.display(), points = series.len(), "price series written");
        }
    }

    let rows: Vec<StrategyOutcome> = reports.iter().map(|r| r.outcome.clone()).collect();
    println!("\n==== Simulation Comparison Results ====");
    println!("{}", render_table(&rows));

    let summary = Summary::from_reports(&reports);
    let audit_failures = summary.audit_failures;
    println!(
        "  Total: {}  Audited: {}  Audit failures: {}  Time: {:.1}ms\n",
        summary.total,
        summary.audited,
        summary.audit_failures,
        elapsed.as_secs_f64() * 1000.0,
    );

    if cli.json {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("system clock before UNIX epoch")?
            .as_millis();
        let report = CompareReport {
            timestamp: ts.to_string(),
            version: env!("CARGO_PKG_VERSION"),
            summary,
            strategies: reports,
        };
        std::fs::create_dir_all(&cli.out_dir)
            .with_context(|| format!("creating {}", cli.out_dir.display()))?;
        let path = cli.out_dir.join(format!("compare-{}.json", ts));
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        println!("  Results saved to: {}\n", path.display());
    }

    if audit_failures > 0 {
        bail!("{} strategy ledger(s) failed the conservation audit", audit_failures);
    }

    Ok(())
}
