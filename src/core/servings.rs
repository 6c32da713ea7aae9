use serde::{Deserialize, Serialize};
use tracing::trace;

use super::number::{parse_float, serde_js_float};

/// Serving count used when neither the query nor the page provides one.
pub const DEFAULT_SERVINGS: f64 = 1.0;

/// Base serving count used when the first servings input carries none.
pub const DEFAULT_BASE_SERVINGS: f64 = 1.0;

/// Where the desired serving count came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServingsSource {
    QueryParameter,
    InputValue,
    Default,
}

/// Where the base serving count came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseSource {
    InputAttribute,
    Default,
}

/// Desired and base serving counts with the resulting scaling factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServingsResolution {
    #[serde(with = "serde_js_float")]
    pub desired: f64,
    pub desired_source: ServingsSource,
    #[serde(with = "serde_js_float")]
    pub base: f64,
    pub base_source: BaseSource,
    #[serde(with = "serde_js_float")]
    pub factor: f64,
}

impl ServingsResolution {
    /// Scales one base quantity by the factor.
    #[must_use]
    pub fn scale(&self, base_quantity: f64) -> f64 {
        self.factor * base_quantity
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.factor == 1.0
    }
}

/// Resolves serving counts from raw page text.
///
/// The desired count comes from the query parameter, else the first input's
/// value, else [`DEFAULT_SERVINGS`]. The base comes from the first input's base
/// attribute, else [`DEFAULT_BASE_SERVINGS`]. Only unparsable text falls
/// through; zero, negative and infinite values are kept as given.
#[must_use]
pub fn resolve_servings(
    query_value: Option<&str>,
    input_value: Option<&str>,
    input_base: Option<&str>,
) -> ServingsResolution {
    let (desired, desired_source) = if let Some(value) = parse_float(query_value) {
        (value, ServingsSource::QueryParameter)
    } else if let Some(value) = parse_float(input_value) {
        trace!(?query_value, "servings parameter unusable, reading input value");
        (value, ServingsSource::InputValue)
    } else {
        trace!(?query_value, ?input_value, "no usable servings, using default");
        (DEFAULT_SERVINGS, ServingsSource::Default)
    };

    let (base, base_source) = match parse_float(input_base) {
        Some(value) => (value, BaseSource::InputAttribute),
        None => {
            trace!(?input_base, "no usable base servings, using default");
            (DEFAULT_BASE_SERVINGS, BaseSource::Default)
        }
    };

    ServingsResolution {
        desired,
        desired_source,
        base,
        base_source,
        factor: desired / base,
    }
}
