// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Launch Sale Simulation Suite - Vesting Lock Rule

/// Spacing between locked buys: `floor(1 / vesting_ratio)`.
///
/// `None` when vesting is disabled (`vesting_ratio <= 0`). The floor means a
/// non-exact reciprocal locks slightly less often than the nominal ratio.
pub fn lock_period(vesting_ratio: f64) -> Option<u64> {
    if vesting_ratio <= 0.0 {
        return None;
    }
    let period = (1.0 / vesting_ratio).floor() as u64;
    Some(period.max(1))
}

/// Whether the buy at cumulative `index` enters the locked pool.
///
/// Index 0 is always locked while vesting is active, then every
/// `period`-th buy after it.
pub fn is_locked(index: u64, vesting_ratio: f64) -> bool {
    match lock_period(vesting_ratio) {
        Some(period) => index % period == 0,
        None => false,
    }
}
