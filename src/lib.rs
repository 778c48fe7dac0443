// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Launch Sale Simulation Suite

pub mod adapter;
pub mod arrival;
pub mod config;
pub mod conservation;
pub mod curve;
pub mod experiments;
pub mod ledger;
pub mod lock;
pub mod pool;
pub mod simulation;

pub use arrival::{simulate_buyers, UserBehavior};
pub use config::{ConfigError, LaunchConfig, RawConfig};
pub use curve::PriceCurve;
pub use ledger::{RevenueLedger, DEFAULT_FEE_RATE};
pub use simulation::{run_raw, run_simulation, LaunchSimulation, SimulationError, SimulationResult};

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);
}

fn announce(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    console_log(msg);
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!("{msg}");
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ─── WASM Interface ──────────────────────────────────────────────────────────

/// JS handle over one validated launch configuration.
#[wasm_bindgen]
pub struct SaleSimulator {
    config: LaunchConfig,
}

#[wasm_bindgen]
impl SaleSimulator {
    /// Build from a plain JS object shaped like `RawConfig`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SaleSimulator, JsValue> {
        #[cfg(target_arch = "wasm32")]
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        let raw: RawConfig = serde_wasm_bindgen::from_value(config)?;
        let config = LaunchConfig::try_from(raw).map_err(to_js_error)?;
        Ok(Self { config })
    }

    pub fn with_defaults() -> SaleSimulator {
        Self { config: LaunchConfig::default() }
    }

    /// The validated configuration, in the same `RawConfig` shape the
    /// constructor accepts.
    pub fn config(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.raw_config())?)
    }

    /// Run the sale and return `SimulationResult` as a JS object.
    pub fn run(&self) -> Result<JsValue, JsValue> {
        let result = run_simulation(&self.config).map_err(to_js_error)?;
        announce(&format!(
            "launch-sim: {} buys, protocol {:.4}, lp {:.4}, locked {:.4}",
            result.buyer_count(),
            result.ledger.platform_fee,
            result.ledger.lp_fee,
            result.ledger.locked_value,
        ));
        Ok(serde_wasm_bindgen::to_value(&result)?)
    }
}

impl SaleSimulator {
    fn raw_config(&self) -> RawConfig {
        RawConfig::from(self.config.clone())
    }
}

/// Run the reference strategies and return the comparison rows.
#[wasm_bindgen]
pub fn compare_presets() -> Result<JsValue, JsValue> {
    let rows = experiments::compare(&experiments::presets()).map_err(to_js_error)?;
    Ok(serde_wasm_bindgen::to_value(&rows)?)
}
