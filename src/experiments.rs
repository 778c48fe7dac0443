// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Launch Sale Simulation Suite - Strategy Comparison

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::config::LaunchConfig;
use crate::curve::PriceCurve;
use crate::simulation::{run_simulation, SimulationError, SimulationResult};

// ─── Strategy ────────────────────────────────────────────────────────────────

/// A named launch configuration to compare against others.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Strategy {
    pub name: String,
    pub config: LaunchConfig,
}

impl Strategy {
    pub fn new(name: impl Into<String>, config: LaunchConfig) -> Self {
        Self { name: name.into(), config }
    }
}

/// The three reference launch strategies.
pub fn presets() -> Vec<Strategy> {
    vec![
        Strategy::new("LaunchLab (log, vesting, LP)", LaunchConfig::default()),
        Strategy::new(
            "JustSendIt (linear, no vesting, no LP)",
            LaunchConfig {
                curve: PriceCurve::Linear { base_price: 0.01, slope: 0.000002 },
                to_lp: false,
                vesting_ratio: 0.0,
                platform_lp_split: 0.0,
                ..LaunchConfig::default()
            },
        ),
        Strategy::new(
            "LaunchLab (exp, stronger vesting)",
            LaunchConfig {
                curve: PriceCurve::Exponential { base_price: 0.01, growth: 0.00005 },
                vesting_ratio: 0.2,
                vesting_duration: 5.0,
                ..LaunchConfig::default()
            },
        ),
    ]
}

// ─── Outcome ─────────────────────────────────────────────────────────────────

/// One row of the comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyOutcome {
    pub strategy: String,
    pub protocol_revenue: f64,
    pub lp_revenue: f64,
    pub locked_revenue: f64,
    pub final_price: f64,
    pub buyers: usize,
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

impl StrategyOutcome {
    pub fn from_result(name: &str, result: &SimulationResult) -> Self {
        Self {
            strategy: name.to_string(),
            protocol_revenue: round_to(result.ledger.platform_fee, 4),
            lp_revenue: round_to(result.ledger.lp_fee, 4),
            locked_revenue: round_to(result.ledger.locked_value, 4),
            final_price: round_to(result.final_price(), 6),
            buyers: result.buyer_count(),
        }
    }
}

// ─── Comparison ──────────────────────────────────────────────────────────────

/// Run every strategy and keep the full results, in input order.
///
/// Runs share nothing, so on native targets they execute in parallel.
pub fn run_all(strategies: &[Strategy]) -> Result<Vec<SimulationResult>, SimulationError> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        use rayon::prelude::*;
        strategies
            .par_iter()
            .map(|s| run_simulation(&s.config))
            .collect()
    }
    #[cfg(target_arch = "wasm32")]
    {
        strategies.iter().map(|s| run_simulation(&s.config)).collect()
    }
}

/// Run every strategy and summarise each as a table row.
pub fn compare(strategies: &[Strategy]) -> Result<Vec<StrategyOutcome>, SimulationError> {
    let results = run_all(strategies)?;
    Ok(strategies
        .iter()
        .zip(&results)
        .map(|(s, r)| StrategyOutcome::from_result(&s.name, r))
        .collect())
}

/// Markdown table with one row per strategy.
pub fn render_table(rows: &[StrategyOutcome]) -> String {
    let mut out = String::new();
    out.push_str("| Strategy | Protocol Revenue | LP Revenue | Locked Revenue | Final Price | Buyers |\n");
    out.push_str("|:---|---:|---:|---:|---:|---:|\n");
    for row in rows {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} | {} | {} |",
            row.strategy,
            row.protocol_revenue,
            row.lp_revenue,
            row.locked_revenue,
            row.final_price,
            row.buyers,
        );
    }
    out
}
