//! Scaler engine, configuration and pass outcomes.

mod engine;
mod engine_config;
mod json_contract;
mod quantity_formatter;
mod scaling_pass;

pub use engine::{ScalerEngine, ScalerPhase};
pub use engine_config::ScalerConfig;
pub use json_contract::{SCALING_OUTCOME_JSON_SCHEMA_V1, ScalingOutcomeJsonContractV1};
pub use quantity_formatter::{
    QuantityFormatterFn, display_fraction_digits, format_quantity_with_runtime,
};
pub use scaling_pass::{RenderedTarget, ScalingOutcome, ScalingPass, build_scaling_pass};
