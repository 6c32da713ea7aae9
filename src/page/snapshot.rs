use serde::{Deserialize, Serialize};

/// One element marked as a servings input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServingsInputState {
    /// Current `value` of the element; `None` for elements without one.
    #[serde(default)]
    pub value: Option<String>,
    /// Raw base-quantity attribute, when present.
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub is_input_control: bool,
}

impl ServingsInputState {
    /// Value text that takes part in servings resolution.
    ///
    /// Any value-bearing element counts here, `select` and `textarea`
    /// included; only input controls are written back.
    #[must_use]
    pub fn current_value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// One element marked as a scaling target.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScalingTargetState {
    #[serde(default)]
    pub base: Option<String>,
}

/// One element marked as a servings submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmitControlState {
    #[serde(default)]
    pub is_input_control: bool,
    #[serde(default)]
    pub disabled: bool,
}

/// Everything a scaling pass reads from a page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// Query string of the page URL, including its leading `?` if any.
    #[serde(default)]
    pub query: String,
    /// Declared document language; may be empty.
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub servings_inputs: Vec<ServingsInputState>,
    #[serde(default)]
    pub scaling_targets: Vec<ScalingTargetState>,
    #[serde(default)]
    pub submit_controls: Vec<SubmitControlState>,
}

impl PageSnapshot {
    /// The servings input consulted for value and base.
    #[must_use]
    pub fn first_servings_input(&self) -> Option<&ServingsInputState> {
        self.servings_inputs.first()
    }
}
