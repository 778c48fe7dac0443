//! Adapter layer: converts between the simulation's f64 world and the
//! audit's Decimal types.

use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

/// Convert f64 to Decimal, keeping the full binary value where Decimal's
/// 28 digits allow it. Non-finite inputs map to zero.
pub fn to_decimal(v: f64) -> Decimal {
    Decimal::from_f64_retain(v)
        .or_else(|| Decimal::from_f64(v))
        .unwrap_or(Decimal::ZERO)
}

/// Convert Decimal to f64.
pub fn from_decimal(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_trip_small_prices() {
        let d = to_decimal(0.0025);
        assert!((d - dec!(0.0025)).abs() < dec!(0.000000000001));
        assert!((from_decimal(d) - 0.0025).abs() < 1e-15);
    }

    #[test]
    fn test_large_values_keep_fractional_digits() {
        let v = 62_412_333.333_333_336_f64;
        let d = to_decimal(v);
        assert!(d.fract() > dec!(0.3333333));
        assert!((from_decimal(d) - v).abs() < 1e-6);
    }

    #[test]
    fn test_non_finite_maps_to_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
    }
}
