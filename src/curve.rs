// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Launch Sale Simulation Suite - Bonding Curves

use serde::{Deserialize, Serialize};

// ─── PriceCurve ──────────────────────────────────────────────────────────────

/// Bonding curve shape with its validated coefficients.
///
/// The curve is stateless: the only input is the cumulative quantity sold,
/// supplied by the caller on every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PriceCurve {
    /// `base_price + slope * q`
    Linear { base_price: f64, slope: f64 },
    /// `base_price * (1 + scale * ln(1 + q))`
    Logarithmic { base_price: f64, scale: f64 },
    /// `base_price * e^(growth * q)`
    Exponential { base_price: f64, growth: f64 },
}

impl PriceCurve {
    /// Unit price of the next buy after `q` units have been sold.
    ///
    /// Out-of-domain coefficients are not rejected here; a non-finite result
    /// is reported by the simulation loop.
    pub fn price_at(&self, q: u64) -> f64 {
        let q = q as f64;
        match *self {
            Self::Linear { base_price, slope } => base_price + slope * q,
            Self::Logarithmic { base_price, scale } => base_price * (1.0 + scale * q.ln_1p()),
            Self::Exponential { base_price, growth } => base_price * (growth * q).exp(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear { .. } => "linear",
            Self::Logarithmic { .. } => "logarithmic",
            Self::Exponential { .. } => "exponential",
        }
    }

    pub fn base_price(&self) -> f64 {
        match *self {
            Self::Linear { base_price, .. }
            | Self::Logarithmic { base_price, .. }
            | Self::Exponential { base_price, .. } => base_price,
        }
    }

    /// Whether the shape coefficient is non-negative, i.e. the curve never
    /// decreases as `q` grows.
    pub fn is_monotone(&self) -> bool {
        match *self {
            Self::Linear { slope, .. } => slope >= 0.0,
            Self::Logarithmic { base_price, scale } => scale >= 0.0 && base_price > 0.0,
            Self::Exponential { growth, base_price } => growth >= 0.0 && base_price >= 0.0,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_linear_price() {
        let curve = PriceCurve::Linear { base_price: 0.01, slope: 0.000002 };
        assert!((curve.price_at(0) - 0.01).abs() < EPS);
        assert!((curve.price_at(1000) - 0.012).abs() < EPS);
    }

    #[test]
    fn test_logarithmic_price_at_origin_is_base() {
        let curve = PriceCurve::Logarithmic { base_price: 0.01, scale: 0.03 };
        assert!((curve.price_at(0) - 0.01).abs() < EPS);
        let expected = 0.01 * (1.0 + 0.03 * 100f64.ln());
        assert!((curve.price_at(99) - expected).abs() < EPS);
    }

    #[test]
    fn test_exponential_price() {
        let curve = PriceCurve::Exponential { base_price: 0.01, growth: 0.00005 };
        assert!((curve.price_at(0) - 0.01).abs() < EPS);
        let expected = 0.01 * (0.00005_f64 * 2000.0).exp();
        assert!((curve.price_at(2000) - expected).abs() < EPS);
    }

    #[test]
    fn test_flat_curve_is_constant() {
        let curve = PriceCurve::Linear { base_price: 0.01, slope: 0.0 };
        for q in [0, 1, 10, 1_000_000] {
            assert_eq!(curve.price_at(q), 0.01);
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(PriceCurve::Linear { base_price: 1.0, slope: 0.0 }.name(), "linear");
        assert_eq!(PriceCurve::Logarithmic { base_price: 1.0, scale: 0.0 }.name(), "logarithmic");
        assert_eq!(PriceCurve::Exponential { base_price: 1.0, growth: 0.0 }.name(), "exponential");
    }

    #[test]
    fn test_negative_slope_not_monotone() {
        assert!(!PriceCurve::Linear { base_price: 1.0, slope: -0.1 }.is_monotone());
        assert!(PriceCurve::Linear { base_price: 1.0, slope: 0.1 }.is_monotone());
    }

    fn monotone_curves() -> impl Strategy<Value = PriceCurve> {
        prop_oneof![
            (0.0001f64..10.0, 0.0f64..0.01)
                .prop_map(|(base_price, slope)| PriceCurve::Linear { base_price, slope }),
            (0.0001f64..10.0, 0.0f64..1.0)
                .prop_map(|(base_price, scale)| PriceCurve::Logarithmic { base_price, scale }),
            (0.0001f64..10.0, 0.0f64..0.001)
                .prop_map(|(base_price, growth)| PriceCurve::Exponential { base_price, growth }),
        ]
    }

    proptest! {
        #[test]
        fn prop_price_non_decreasing(curve in monotone_curves(), q in 0u64..100_000) {
            prop_assert!(curve.price_at(q + 1) >= curve.price_at(q));
        }
    }
}
