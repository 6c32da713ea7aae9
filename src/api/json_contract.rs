use serde::{Deserialize, Serialize};

use crate::error::{ScalerError, ScalerResult};

use super::ScalingOutcome;

pub const SCALING_OUTCOME_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingOutcomeJsonContractV1 {
    pub schema_version: u32,
    pub outcome: ScalingOutcome,
}

impl ScalingOutcome {
    pub fn to_json_pretty(&self) -> ScalerResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ScalerError::Serialization(format!("failed to serialize scaling outcome: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ScalerResult<String> {
        let payload = ScalingOutcomeJsonContractV1 {
            schema_version: SCALING_OUTCOME_JSON_SCHEMA_V1,
            outcome: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ScalerError::Serialization(format!(
                "failed to serialize scaling outcome contract v1: {e}"
            ))
        })
    }

    /// Parses either a bare outcome or a v1 contract envelope.
    pub fn from_json_compat_str(input: &str) -> ScalerResult<Self> {
        if let Ok(outcome) = serde_json::from_str::<ScalingOutcome>(input) {
            return Ok(outcome);
        }
        let payload: ScalingOutcomeJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ScalerError::Serialization(format!("failed to parse scaling outcome payload: {e}"))
        })?;
        if payload.schema_version != SCALING_OUTCOME_JSON_SCHEMA_V1 {
            return Err(ScalerError::Serialization(format!(
                "unsupported scaling outcome schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.outcome)
    }
}
