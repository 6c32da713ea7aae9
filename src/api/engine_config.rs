use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_FRACTION_DIGITS, LanguageTag};
use crate::error::{ScalerError, ScalerResult};
use crate::page::PageMarkers;

const MAX_FRACTION_DIGITS: u8 = 12;

/// Scaler configuration.
///
/// Every field has a default matching the stock recipe page markup, so an
/// empty JSON object is a complete config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalerConfig {
    #[serde(default)]
    pub markers: PageMarkers,
    #[serde(default = "default_servings_parameter")]
    pub servings_parameter: String,
    #[serde(default = "default_fraction_digits")]
    pub fraction_digits: u8,
    #[serde(default = "default_fallback_language")]
    pub fallback_language: String,
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self {
            markers: PageMarkers::default(),
            servings_parameter: default_servings_parameter(),
            fraction_digits: default_fraction_digits(),
            fallback_language: default_fallback_language(),
        }
    }
}

impl ScalerConfig {
    /// Sets the page markers.
    #[must_use]
    pub fn with_markers(mut self, markers: PageMarkers) -> Self {
        self.markers = markers;
        self
    }

    /// Sets the query parameter holding the desired serving count.
    #[must_use]
    pub fn with_servings_parameter(mut self, name: impl Into<String>) -> Self {
        self.servings_parameter = name.into();
        self
    }

    /// Sets the rounding precision of displayed quantities.
    #[must_use]
    pub fn with_fraction_digits(mut self, digits: u8) -> Self {
        self.fraction_digits = digits;
        self
    }

    /// Sets the language used when the page declares none we know.
    #[must_use]
    pub fn with_fallback_language(mut self, language: impl Into<String>) -> Self {
        self.fallback_language = language.into();
        self
    }

    pub fn validate(&self) -> ScalerResult<()> {
        self.markers.validate()?;
        if self.servings_parameter.is_empty() {
            return Err(ScalerError::InvalidConfig(
                "servings parameter name must not be empty".to_owned(),
            ));
        }
        if self.fraction_digits > MAX_FRACTION_DIGITS {
            return Err(ScalerError::InvalidConfig(format!(
                "fraction digits must be <= {MAX_FRACTION_DIGITS}, got {}",
                self.fraction_digits
            )));
        }
        if LanguageTag::parse(&self.fallback_language).is_none() {
            return Err(ScalerError::InvalidConfig(format!(
                "fallback language `{}` is not a language tag",
                self.fallback_language
            )));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> ScalerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ScalerError::Serialization(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ScalerResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ScalerError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_servings_parameter() -> String {
    "servings".to_owned()
}

fn default_fraction_digits() -> u8 {
    DEFAULT_FRACTION_DIGITS as u8
}

fn default_fallback_language() -> String {
    "en".to_owned()
}
