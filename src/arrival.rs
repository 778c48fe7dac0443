// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Launch Sale Simulation Suite - Buyer Arrival Model

use serde::{Deserialize, Serialize};

/// Per-step demand growth under FOMO arrivals.
const FOMO_GROWTH_PER_STEP: f64 = 0.05;

// ─── UserBehavior ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserBehavior {
    /// Buyer count grows linearly with elapsed steps.
    Fomo,
    /// Constant buyer count every step.
    Uniform,
}

impl UserBehavior {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fomo => "fomo",
            Self::Uniform => "uniform",
        }
    }

    /// Number of buyers active at step `t`.
    pub fn buyers_at(&self, entry_rate: f64, t: u32) -> u64 {
        let count = match self {
            Self::Fomo => entry_rate * (1.0 + FOMO_GROWTH_PER_STEP * t as f64),
            Self::Uniform => entry_rate,
        };
        count.floor().max(0.0) as u64
    }
}

/// Buyer count for every step in `0..max_time`.
///
/// Deterministic: the same inputs always produce the same sequence.
pub fn simulate_buyers(entry_rate: f64, max_time: u32, behavior: UserBehavior) -> Vec<u64> {
    (0..max_time)
        .map(|t| behavior.buyers_at(entry_rate, t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_is_constant() {
        let buyers = simulate_buyers(10.0, 5, UserBehavior::Uniform);
        assert_eq!(buyers, vec![10; 5]);
    }

    #[test]
    fn test_fomo_grows_linearly_and_floors() {
        let buyers = simulate_buyers(10.0, 6, UserBehavior::Fomo);
        // 10 * (1 + 0.05t) = 10, 10.5, 11, 11.5, 12, 12.5
        assert_eq!(buyers, vec![10, 10, 11, 11, 12, 12]);
    }

    #[test]
    fn test_fomo_first_step_equals_entry_rate() {
        assert_eq!(UserBehavior::Fomo.buyers_at(7.0, 0), 7);
    }

    #[test]
    fn test_zero_steps_is_empty() {
        assert!(simulate_buyers(10.0, 0, UserBehavior::Fomo).is_empty());
    }

    #[test]
    fn test_sequence_is_rederivable() {
        let a = simulate_buyers(13.0, 30, UserBehavior::Fomo);
        let b = simulate_buyers(13.0, 30, UserBehavior::Fomo);
        assert_eq!(a, b);
    }
}
