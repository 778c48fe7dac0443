// Strategy Comparison Report Types
// Structured output for independent analysis of launch strategies

use launch_sim::conservation::AuditReport;
use launch_sim::experiments::{Strategy, StrategyOutcome};
use launch_sim::{RawConfig, SimulationResult};
use serde::Serialize;

// ─── Per-Strategy Result ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct StrategyReport {
    pub outcome: StrategyOutcome,
    pub config: RawConfig,
    pub cumulative_raised: f64,
    pub locked_buys: u64,
    pub unlocked: f64,
    pub buys_per_step: Vec<u64>,
    /// Largest ledger deviation from the decimal replay; `None` if the audit failed.
    pub audit_max_error: Option<f64>,
    pub audit_failure: Option<String>,
}

impl StrategyReport {
    pub fn new(
        strategy: &Strategy,
        result: &SimulationResult,
        audit: Result<AuditReport, String>,
    ) -> Self {
        let (audit_max_error, audit_failure) = match audit {
            Ok(report) => (Some(report.max_error()), None),
            Err(reason) => (None, Some(reason)),
        };
        Self {
            outcome: StrategyOutcome::from_result(&strategy.name, result),
            config: RawConfig::from(strategy.config.clone()),
            cumulative_raised: result.cumulative_raised,
            locked_buys: result.locked_buys,
            unlocked: result.unlocked,
            buys_per_step: result.buys_per_step.clone(),
            audit_max_error,
            audit_failure,
        }
    }

    pub fn audit_passed(&self) -> bool {
        self.audit_failure.is_none()
    }
}

// ─── Top-Level Report ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CompareReport {
    pub timestamp: String,
    pub version: &'static str,
    pub summary: Summary,
    pub strategies: Vec<StrategyReport>,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub total: usize,
    pub audited: usize,
    pub audit_failures: usize,
}

impl Summary {
    pub fn from_reports(reports: &[StrategyReport]) -> Self {
        let audited = reports.iter().filter(|r| r.audit_passed()).count();
        Self {
            total: reports.len(),
            audited,
            audit_failures: reports.len() - audited,
        }
    }
}
