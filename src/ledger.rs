// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Launch Sale Simulation Suite - Revenue Ledger
//
// Accumulates protocol fee revenue, liquidity-pool fee revenue and locked
// principal for a single run. The ledger is owned by exactly one simulation
// and never shared across runs.

use serde::{Deserialize, Serialize};

/// Fee charged on every liquid buy (0.25%).
pub const DEFAULT_FEE_RATE: f64 = 0.0025;

// ---------------------------------------------------------------------------
// Fee split
// ---------------------------------------------------------------------------

/// Outcome of routing one buy's fee.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeSplit {
    pub fee: f64,
    pub platform: f64,
    pub lp: f64,
}

impl FeeSplit {
    /// Split `amount * fee_rate` between protocol and LP.
    ///
    /// `lp_split` is the protocol's retained share of the LP-destined fee:
    /// the LP receives `fee * (1 - lp_split)`. With `to_lp` off the protocol
    /// keeps the whole fee.
    pub fn compute(amount: f64, fee_rate: f64, to_lp: bool, lp_split: f64) -> Self {
        let fee = amount * fee_rate;
        if to_lp {
            let lp = fee * (1.0 - lp_split);
            Self { fee, platform: fee - lp, lp }
        } else {
            Self { fee, platform: fee, lp: 0.0 }
        }
    }
}

// ---------------------------------------------------------------------------
// RevenueLedger
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueLedger {
    /// Protocol fee revenue, plus any principal released by `unlock_tokens`.
    pub platform_fee: f64,
    /// Fee revenue routed to the liquidity pool.
    pub lp_fee: f64,
    /// Raw (not fee-scaled) value of locked buys still vesting.
    pub locked_value: f64,
}

impl RevenueLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a liquid buy of `amount`; returns the fee split applied.
    pub fn record_txn(&mut self, amount: f64, fee_rate: f64, to_lp: bool, lp_split: f64) -> FeeSplit {
        let split = FeeSplit::compute(amount, fee_rate, to_lp, lp_split);
        self.platform_fee += split.platform;
        self.lp_fee += split.lp;
        split
    }

    /// Record a locked buy. The full unit price is held, not a fee.
    pub fn record_locked(&mut self, value: f64) {
        self.locked_value += value;
    }

    /// Release `locked_value / vesting_duration` into `platform_fee`.
    ///
    /// No-op when `vesting_duration <= 0`. Each call releases a fraction of
    /// what remains, so repeated calls decay the pool geometrically.
    /// Returns the amount released.
    pub fn unlock_tokens(&mut self, vesting_duration: f64) -> f64 {
        if vesting_duration <= 0.0 {
            return 0.0;
        }
        let unlocked = self.locked_value / vesting_duration;
        self.platform_fee += unlocked;
        self.locked_value -= unlocked;
        unlocked
    }

    /// Protocol plus LP fee revenue.
    pub fn total_fees(&self) -> f64 {
        self.platform_fee + self.lp_fee
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
