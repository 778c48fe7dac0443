// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Launch Sale Simulation Suite - Ledger Conservation Audit

//! Recomputes a run's ledger from its price history in exact decimals.
//!
//! ```text
//! platform_fee + lp_fee = Σ fee_rate × price   (liquid buys) + released
//! locked_value          = Σ price              (locked buys) − released
//! released              = locked / vesting_duration
//! ```
//!
//! The audit is a cross-check only; it never alters the ledger.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::adapter::{from_decimal, to_decimal};
use crate::config::LaunchConfig;
use crate::ledger::DEFAULT_FEE_RATE;
use crate::lock;
use crate::simulation::SimulationResult;

/// Tolerance between the f64 ledger and the decimal recomputation, scaled by
/// `max(|expected|, 1)` per account.
const AUDIT_TOLERANCE: Decimal = dec!(0.000000001);

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConservationError {
    #[error("{account} imbalance: expected {expected}, got {actual}")]
    Imbalance {
        account: &'static str,
        expected: Decimal,
        actual: Decimal,
    },
}

// ---------------------------------------------------------------------------
// Audit report
// ---------------------------------------------------------------------------

/// Expected balances recomputed from the price history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedLedger {
    pub platform_fee: Decimal,
    pub lp_fee: Decimal,
    pub locked_value: Decimal,
}

/// Outcome of a passing audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub expected: ExpectedLedger,
    pub platform_error: f64,
    pub lp_error: f64,
    pub locked_error: f64,
}

impl AuditReport {
    pub fn max_error(&self) -> f64 {
        self.platform_error.max(self.lp_error).max(self.locked_error)
    }
}

/// Replay the lock rule, fee routing and single unlock over `prices`.
pub fn expected_ledger(config: &LaunchConfig, prices: &[f64]) -> ExpectedLedger {
    let fee_rate = to_decimal(DEFAULT_FEE_RATE);
    let retained = to_decimal(config.platform_lp_split);

    let mut platform_fee = Decimal::ZERO;
    let mut lp_fee = Decimal::ZERO;
    let mut locked_value = Decimal::ZERO;

    for (index, &price) in prices.iter().enumerate() {
        let price = to_decimal(price);
        if lock::is_locked(index as u64, config.vesting_ratio) {
            locked_value += price;
            continue;
        }
        let fee = price * fee_rate;
        if config.to_lp {
            let lp = fee * (Decimal::ONE - retained);
            lp_fee += lp;
            platform_fee += fee - lp;
        } else {
            platform_fee += fee;
        }
    }

    if config.vesting_duration > 0.0 {
        let released = locked_value / to_decimal(config.vesting_duration);
        platform_fee += released;
        locked_value -= released;
    }

    ExpectedLedger { platform_fee, lp_fee, locked_value }
}

fn check(account: &'static str, expected: Decimal, actual: f64) -> Result<f64, ConservationError> {
    let actual = to_decimal(actual);
    let error = (expected - actual).abs();
    if error > AUDIT_TOLERANCE * expected.abs().max(Decimal::ONE) {
        return Err(ConservationError::Imbalance { account, expected, actual });
    }
    Ok(from_decimal(error))
}

/// Verify that `result.ledger` matches a decimal replay of its price history.
pub fn audit_ledger(
    config: &LaunchConfig,
    result: &SimulationResult,
) -> Result<AuditReport, ConservationError> {
    let expected = expected_ledger(config, &result.price_history);
    let ledger = &result.ledger;

    let platform_error = check("platform_fee", expected.platform_fee, ledger.platform_fee)?;
    let lp_error = check("lp_fee", expected.lp_fee, ledger.lp_fee)?;
    let locked_error = check("locked_value", expected.locked_value, ledger.locked_value)?;

    Ok(AuditReport {
        expected,
        platform_error,
        lp_error,
        locked_error,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrival::UserBehavior;
    use crate::curve::PriceCurve;
    use crate::ledger::RevenueLedger;
    use crate::simulation::run_simulation;

    #[test]
    fn default_run_passes_audit() {
        let config = LaunchConfig::default();
        let result = run_simulation(&config).expect("test: default run");
        let report = audit_ledger(&config, &result).expect("test: audit passes");
        assert!(report.max_error() < 1e-9);
    }

    #[test]
    fn expected_ledger_for_fully_locked_sale() {
        let config = LaunchConfig {
            vesting_ratio: 1.0,
            vesting_duration: 2.0,
            ..LaunchConfig::default()
        };
        let expected = expected_ledger(&config, &[1.0, 2.0, 3.0]);
        assert_eq!(expected.locked_value, dec!(3));
        assert_eq!(expected.platform_fee, dec!(3));
        assert_eq!(expected.lp_fee, Decimal::ZERO);
    }

    #[test]
    fn expected_ledger_routes_lp_share() {
        let config = LaunchConfig {
            vesting_ratio: 0.0,
            vesting_duration: 0.0,
            to_lp: true,
            platform_lp_split: 0.1,
            ..LaunchConfig::default()
        };
        let expected = expected_ledger(&config, &[100.0]);
        assert!((expected.lp_fee - dec!(0.225)).abs() < AUDIT_TOLERANCE);
        assert!((expected.platform_fee - dec!(0.025)).abs() < AUDIT_TOLERANCE);
    }

    #[test]
    fn large_sale_passes_audit() {
        let config = LaunchConfig {
            entry_rate: 1000.0,
            max_time: 100,
            curve: PriceCurve::Linear { base_price: 100.0, slope: 0.37 },
            behavior: UserBehavior::Uniform,
            target_raise: None,
            ..LaunchConfig::default()
        };
        let result = run_simulation(&config).expect("test: large run");
        assert!(result.ledger.platform_fee > 1e7);
        let report = audit_ledger(&config, &result).expect("test: large ledger audits clean");
        assert!(report.platform_error < result.ledger.platform_fee * 2e-9);
    }

    #[test]
    fn relative_tolerance_still_catches_real_drift() {
        assert!(check("platform_fee", dec!(62412333.3333), 62_412_333.3333).is_ok());
        assert!(check("platform_fee", dec!(62412333.3333), 62_412_334.3333).is_err());
        assert!(check("lp_fee", dec!(0.5), 0.500_000_01).is_err());
    }

    #[test]
    fn tampered_ledger_is_rejected() {
        let config = LaunchConfig::default();
        let mut result = run_simulation(&config).expect("test: default run");
        result.ledger = RevenueLedger {
            lp_fee: result.ledger.lp_fee + 0.001,
            ..result.ledger.clone()
        };
        let err = audit_ledger(&config, &result);
        assert!(
            matches!(err, Err(ConservationError::Imbalance { account: "lp_fee", .. })),
            "expected lp_fee imbalance, got {err:?}"
        );
    }
}
