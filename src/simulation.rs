// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Launch Sale Simulation Suite - Simulation Core

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::arrival;
use crate::config::{ConfigError, LaunchConfig, RawConfig};
use crate::ledger::{RevenueLedger, DEFAULT_FEE_RATE};
use crate::lock;
use crate::pool::LiquidityPool;

// ─── Errors ──────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The curve left its numeric domain (NaN or infinite price).
    #[error("curve produced non-finite price {price} at buy {index}")]
    NonFinitePrice { index: u64, price: f64 },
}

// ─── SimulationState ─────────────────────────────────────────────────────────

/// Mutable per-run progress. Created fresh for each run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationState {
    /// Units sold so far; also the index of the next buy.
    pub cumulative_quantity: u64,
    /// Sum of all unit prices paid so far.
    pub cumulative_raised: f64,
    /// One price per completed buy, in buy order.
    pub price_history: Vec<f64>,
}

// ─── SimulationResult ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    pub price_history: Vec<f64>,
    pub ledger: RevenueLedger,
    /// Buys actually executed at each step (may be below the arrival count
    /// when the target raise halted that step).
    pub buys_per_step: Vec<u64>,
    pub cumulative_raised: f64,
    pub locked_buys: u64,
    /// Amount moved from `locked_value` to `platform_fee` by the unlock step.
    pub unlocked: f64,
}

impl SimulationResult {
    pub fn buyer_count(&self) -> usize {
        self.price_history.len()
    }

    /// Price of the last buy, or 0 when nothing sold.
    pub fn final_price(&self) -> f64 {
        self.price_history.last().copied().unwrap_or(0.0)
    }
}

// ─── LaunchSimulation ────────────────────────────────────────────────────────

/// One launch-sale run. Owns its state and ledger exclusively, so independent
/// runs can execute on separate threads without coordination.
pub struct LaunchSimulation<'a> {
    config: &'a LaunchConfig,
    state: SimulationState,
    ledger: RevenueLedger,
    pool: LiquidityPool,
    buys_per_step: Vec<u64>,
    locked_buys: u64,
}

impl<'a> LaunchSimulation<'a> {
    pub fn new(config: &'a LaunchConfig) -> Self {
        Self {
            config,
            state: SimulationState::default(),
            ledger: RevenueLedger::new(),
            pool: LiquidityPool::new(&config.pool),
            buys_per_step: Vec::with_capacity(config.max_time as usize),
            locked_buys: 0,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn ledger(&self) -> &RevenueLedger {
        &self.ledger
    }

    pub fn pool(&self) -> &LiquidityPool {
        &self.pool
    }

    fn target_reached(&self) -> bool {
        match self.config.active_target() {
            Some(target) => self.state.cumulative_raised >= target,
            None => false,
        }
    }

    /// Execute a single unit buy at the current cumulative quantity.
    fn buy(&mut self) -> Result<(), SimulationError> {
        let index = self.state.cumulative_quantity;
        let price = self.config.curve.price_at(index);
        if !price.is_finite() {
            return Err(SimulationError::NonFinitePrice { index, price });
        }

        if lock::is_locked(index, self.config.vesting_ratio) {
            self.ledger.record_locked(price);
            self.locked_buys += 1;
        } else {
            self.ledger.record_txn(
                price,
                DEFAULT_FEE_RATE,
                self.config.to_lp,
                self.config.platform_lp_split,
            );
        }

        self.state.price_history.push(price);
        self.state.cumulative_quantity += 1;
        self.state.cumulative_raised += price;
        Ok(())
    }

    /// Run up to `buyers` buys for step `t`.
    ///
    /// Reaching the target raise only ends this step. The next step checks
    /// the threshold again before its first buy.
    pub fn step(&mut self, t: u32, buyers: u64) -> Result<u64, SimulationError> {
        let mut taken = 0;
        for _ in 0..buyers {
            if self.target_reached() {
                warn!(
                    step = t,
                    raised = self.state.cumulative_raised,
                    skipped = buyers - taken,
                    "target raise reached, halting step"
                );
                break;
            }
            self.buy()?;
            taken += 1;
        }
        debug!(step = t, buyers, taken, q = self.state.cumulative_quantity, "step complete");
        self.buys_per_step.push(taken);
        Ok(taken)
    }

    /// Drive every step, apply the single unlock, and return the outcome.
    pub fn run(mut self) -> Result<SimulationResult, SimulationError> {
        let config = self.config;
        if !config.curve.is_monotone() {
            warn!(
                curve = config.curve.name(),
                "curve coefficients allow the price to fall as quantity grows"
            );
        }
        debug!(
            curve = config.curve.name(),
            base_price = config.curve.base_price(),
            behavior = config.behavior.name(),
            token_reserve = self.pool.token_reserve(),
            sol_reserve = self.pool.sol_reserve(),
            "starting launch simulation"
        );

        let buyers = arrival::simulate_buyers(config.entry_rate, config.max_time, config.behavior);
        for (t, &n) in buyers.iter().enumerate() {
            self.step(t as u32, n)?;
        }

        let unlocked = self.ledger.unlock_tokens(config.vesting_duration);

        info!(
            buys = self.state.price_history.len(),
            raised = self.state.cumulative_raised,
            platform_fee = self.ledger.platform_fee,
            lp_fee = self.ledger.lp_fee,
            locked_value = self.ledger.locked_value,
            "launch simulation finished"
        );

        Ok(SimulationResult {
            price_history: self.state.price_history,
            ledger: self.ledger,
            buys_per_step: self.buys_per_step,
            cumulative_raised: self.state.cumulative_raised,
            locked_buys: self.locked_buys,
            unlocked,
        })
    }
}

/// Run one simulation for a validated configuration.
pub fn run_simulation(config: &LaunchConfig) -> Result<SimulationResult, SimulationError> {
    LaunchSimulation::new(config).run()
}

/// Validate `raw` and run it. Configuration errors abort before any buy.
pub fn run_raw(raw: RawConfig) -> Result<SimulationResult, SimulationError> {
    let config = LaunchConfig::try_from(raw)?;
    run_simulation(&config)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
