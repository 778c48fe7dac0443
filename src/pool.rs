// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Launch Sale Simulation Suite - Liquidity Pool

use serde::{Deserialize, Serialize};

/// Initial reserves of the post-launch liquidity pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoolConfig {
    pub lp_token: f64,
    pub lp_sol: f64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            lp_token: 10_000_000.0,
            lp_sol: 50.0,
        }
    }
}

/// Liquidity pool seeded at the start of a run.
///
/// The sale never trades against it; LP revenue is tracked in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityPool {
    token_reserve: f64,
    sol_reserve: f64,
}

impl LiquidityPool {
    pub fn new(config: &PoolConfig) -> Self {
        Self {
            token_reserve: config.lp_token,
            sol_reserve: config.lp_sol,
        }
    }

    pub fn token_reserve(&self) -> f64 {
        self.token_reserve
    }

    pub fn sol_reserve(&self) -> f64 {
        self.sol_reserve
    }
}
