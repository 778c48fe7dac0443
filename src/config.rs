// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Launch Sale Simulation Suite - Run Configuration
//
// `RawConfig` is the JSON shape callers write by hand. `LaunchConfig` is the
// validated form the engine runs on: curve and behavior tags are resolved to
// enums once, so a malformed config never reaches the buy loop.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::arrival::UserBehavior;
use crate::curve::PriceCurve;
use crate::pool::PoolConfig;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown curve type: {0:?}")]
    UnknownCurveType(String),

    #[error("unknown user behavior: {0:?}")]
    UnknownBehavior(String),

    #[error("{curve} curve requires parameter {param:?}")]
    MissingCurveParam { curve: &'static str, param: &'static str },

    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("malformed config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// RawConfig
// ---------------------------------------------------------------------------

/// Unvalidated run configuration, as read from JSON or JS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawConfig {
    pub entry_rate: f64,
    pub max_time: u32,
    pub curve_type: String,
    pub curve_params: HashMap<String, f64>,
    pub lp_token: f64,
    pub lp_sol: f64,
    pub to_lp: bool,
    pub platform_lp_split: f64,
    pub user_behavior: String,
    #[serde(default)]
    pub vesting_ratio: f64,
    #[serde(default)]
    pub vesting_duration: f64,
    #[serde(default)]
    pub target_raise: Option<f64>,
}

impl Default for RawConfig {
    fn default() -> Self {
        LaunchConfig::default().into()
    }
}

fn curve_param(
    params: &HashMap<String, f64>,
    curve: &'static str,
    param: &'static str,
) -> Result<f64, ConfigError> {
    params
        .get(param)
        .copied()
        .ok_or(ConfigError::MissingCurveParam { curve, param })
}

fn parse_curve(curve_type: &str, params: &HashMap<String, f64>) -> Result<PriceCurve, ConfigError> {
    match curve_type {
        "linear" => Ok(PriceCurve::Linear {
            base_price: curve_param(params, "linear", "base_price")?,
            slope: curve_param(params, "linear", "slope")?,
        }),
        "logarithmic" => Ok(PriceCurve::Logarithmic {
            base_price: curve_param(params, "logarithmic", "base_price")?,
            scale: curve_param(params, "logarithmic", "scale")?,
        }),
        "exponential" => Ok(PriceCurve::Exponential {
            base_price: curve_param(params, "exponential", "base_price")?,
            growth: curve_param(params, "exponential", "growth")?,
        }),
        other => Err(ConfigError::UnknownCurveType(other.to_string())),
    }
}

fn parse_behavior(behavior: &str) -> Result<UserBehavior, ConfigError> {
    match behavior {
        "fomo" => Ok(UserBehavior::Fomo),
        "uniform" => Ok(UserBehavior::Uniform),
        other => Err(ConfigError::UnknownBehavior(other.to_string())),
    }
}

fn check_fraction(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidField {
            field,
            reason: format!("{value} is outside [0, 1]"),
        })
    }
}

// ---------------------------------------------------------------------------
// LaunchConfig
// ---------------------------------------------------------------------------

/// Validated, immutable input to one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchConfig {
    /// Baseline buyers per step.
    pub entry_rate: f64,
    /// Number of steps simulated.
    pub max_time: u32,
    pub curve: PriceCurve,
    pub pool: PoolConfig,
    /// Route a share of each fee to the liquidity pool.
    pub to_lp: bool,
    /// Protocol's retained share of the LP-destined fee.
    pub platform_lp_split: f64,
    pub behavior: UserBehavior,
    /// Lock frequency; 0 disables locking.
    pub vesting_ratio: f64,
    /// Unlock divisor; 0 disables unlocking.
    pub vesting_duration: f64,
    /// Stepwise stop threshold on cumulative raise; `None` disables it.
    pub target_raise: Option<f64>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            entry_rate: 10.0,
            max_time: 30,
            curve: PriceCurve::Logarithmic { base_price: 0.01, scale: 0.03 },
            pool: PoolConfig::default(),
            to_lp: true,
            platform_lp_split: 0.1,
            behavior: UserBehavior::Fomo,
            vesting_ratio: 0.10,
            vesting_duration: 3.0,
            target_raise: Some(30.0),
        }
    }
}

impl LaunchConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Threshold that actually halts buying. Zero counts as disabled.
    pub fn active_target(&self) -> Option<f64> {
        self.target_raise.filter(|t| *t > 0.0)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.entry_rate.is_nan() || self.entry_rate <= 0.0 || self.entry_rate.is_infinite() {
            return Err(ConfigError::InvalidField {
                field: "entry_rate",
                reason: format!("{} must be a positive number", self.entry_rate),
            });
        }
        check_fraction("platform_lp_split", self.platform_lp_split)?;
        check_fraction("vesting_ratio", self.vesting_ratio)?;
        if self.vesting_duration < 0.0 || self.vesting_duration.is_nan() {
            return Err(ConfigError::InvalidField {
                field: "vesting_duration",
                reason: format!("{} must be non-negative", self.vesting_duration),
            });
        }
        if let Some(target) = self.target_raise {
            if target < 0.0 || target.is_nan() {
                return Err(ConfigError::InvalidField {
                    field: "target_raise",
                    reason: format!("{target} must be non-negative"),
                });
            }
        }
        Ok(())
    }
}

impl TryFrom<RawConfig> for LaunchConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let curve = parse_curve(&raw.curve_type, &raw.curve_params)?;
        let behavior = parse_behavior(&raw.user_behavior)?;
        let config = Self {
            entry_rate: raw.entry_rate,
            max_time: raw.max_time,
            curve,
            pool: PoolConfig {
                lp_token: raw.lp_token,
                lp_sol: raw.lp_sol,
            },
            to_lp: raw.to_lp,
            platform_lp_split: raw.platform_lp_split,
            behavior,
            vesting_ratio: raw.vesting_ratio,
            vesting_duration: raw.vesting_duration,
            target_raise: raw.target_raise,
        };
        config.validate()?;
        Ok(config)
    }
}

impl From<LaunchConfig> for RawConfig {
    fn from(config: LaunchConfig) -> Self {
        let params = match config.curve {
            PriceCurve::Linear { base_price, slope } => [("base_price", base_price), ("slope", slope)],
            PriceCurve::Logarithmic { base_price, scale } => [("base_price", base_price), ("scale", scale)],
            PriceCurve::Exponential { base_price, growth } => [("base_price", base_price), ("growth", growth)],
        };
        Self {
            entry_rate: config.entry_rate,
            max_time: config.max_time,
            curve_type: config.curve.name().to_string(),
            curve_params: params.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
            lp_token: config.pool.lp_token,
            lp_sol: config.pool.lp_sol,
            to_lp: config.to_lp,
            platform_lp_split: config.platform_lp_split,
            user_behavior: config.behavior.name().to_string(),
            vesting_ratio: config.vesting_ratio,
            vesting_duration: config.vesting_duration,
            target_raise: config.target_raise,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
