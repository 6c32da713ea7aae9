use serde::{Deserialize, Serialize};

use crate::error::{ScalerError, ScalerResult};

/// Class markers and data attribute that tie page elements to the scaler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageMarkers {
    #[serde(default = "default_servings_input")]
    pub servings_input: String,
    #[serde(default = "default_scaling")]
    pub scaling: String,
    #[serde(default = "default_servings_submit")]
    pub servings_submit: String,
    /// Dataset key of the base quantity; `base` reads `data-base`.
    #[serde(default = "default_base_attribute")]
    pub base_attribute: String,
}

impl Default for PageMarkers {
    fn default() -> Self {
        Self {
            servings_input: default_servings_input(),
            scaling: default_scaling(),
            servings_submit: default_servings_submit(),
            base_attribute: default_base_attribute(),
        }
    }
}

impl PageMarkers {
    /// HTML attribute backing the dataset key, e.g. `baseQty` -> `data-base-qty`.
    #[must_use]
    pub fn base_data_attribute(&self) -> String {
        let mut attribute = String::with_capacity(self.base_attribute.len() + 8);
        attribute.push_str("data-");
        for ch in self.base_attribute.chars() {
            if ch.is_ascii_uppercase() {
                attribute.push('-');
                attribute.push(ch.to_ascii_lowercase());
            } else {
                attribute.push(ch);
            }
        }
        attribute
    }

    pub fn validate(&self) -> ScalerResult<()> {
        for (field, marker) in [
            ("servings_input", &self.servings_input),
            ("scaling", &self.scaling),
            ("servings_submit", &self.servings_submit),
        ] {
            if marker.is_empty() || marker.chars().any(char::is_whitespace) {
                return Err(ScalerError::InvalidConfig(format!(
                    "marker `{field}` must be a single non-empty class name"
                )));
            }
        }

        if self.base_attribute.is_empty()
            || !self
                .base_attribute
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        {
            return Err(ScalerError::InvalidConfig(format!(
                "base attribute `{}` is not a valid dataset key",
                self.base_attribute
            )));
        }

        Ok(())
    }
}

fn default_servings_input() -> String {
    "servings_input".to_owned()
}

fn default_scaling() -> String {
    "scaling".to_owned()
}

fn default_servings_submit() -> String {
    "servings_submit".to_owned()
}

fn default_base_attribute() -> String {
    "base".to_owned()
}
