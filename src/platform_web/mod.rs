//! Browser DOM adapter.
//!
//! `DomPage` reads and writes the live document through `web-sys`;
//! [`register_on_ready`] runs the scaler once the document has been parsed.
//! Quantities are formatted by the browser's `Number#toLocaleString` for the
//! declared page language, with the built-in symbol table as fallback.

use std::sync::Arc;

use js_sys::{Array, Function, Object, Reflect};
use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement};

use crate::api::{QuantityFormatterFn, ScalerConfig, ScalerEngine, format_quantity_with_runtime};
use crate::core::NumberLocale;
use crate::error::{ScalerError, ScalerResult};
use crate::page::{
    PageMarkers, PagePatch, PageSnapshot, PageSurface, ScalingTargetState, ServingsInputState,
    SubmitControlState,
};

const READY_EVENT: &str = "DOMContentLoaded";

/// [`PageSurface`] over a live `web_sys::Document`.
pub struct DomPage {
    document: Document,
}

impl DomPage {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Binds to the document of the global window.
    pub fn from_window() -> ScalerResult<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ScalerError::Page("no document on the global window".to_owned()))?;
        Ok(Self::new(document))
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn elements(&self, class: &str) -> Vec<Element> {
        let collection = self.document.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|index| collection.item(index))
            .collect()
    }

    fn query(&self) -> ScalerResult<String> {
        match self.document.location() {
            Some(location) => location
                .search()
                .map_err(|err| js_error("failed to read location.search", &err)),
            None => Ok(String::new()),
        }
    }

    /// Value of the `lang` attribute on the root element; empty when unset.
    #[must_use]
    pub fn language(&self) -> String {
        self.document
            .document_element()
            .and_then(|root| root.get_attribute("lang"))
            .unwrap_or_default()
    }
}

impl PageSurface for DomPage {
    fn snapshot(&self, markers: &PageMarkers) -> ScalerResult<PageSnapshot> {
        let base_attribute = markers.base_data_attribute();

        let servings_inputs = self
            .elements(&markers.servings_input)
            .iter()
            .map(|element| ServingsInputState {
                value: element_value(element),
                base: element.get_attribute(&base_attribute),
                is_input_control: element.dyn_ref::<HtmlInputElement>().is_some(),
            })
            .collect();
        let scaling_targets = self
            .elements(&markers.scaling)
            .iter()
            .map(|element| ScalingTargetState {
                base: element.get_attribute(&base_attribute),
            })
            .collect();
        let submit_controls = self
            .elements(&markers.servings_submit)
            .iter()
            .map(|element| {
                let input = element.dyn_ref::<HtmlInputElement>();
                SubmitControlState {
                    is_input_control: input.is_some(),
                    disabled: input.is_some_and(HtmlInputElement::disabled),
                }
            })
            .collect();

        Ok(PageSnapshot {
            query: self.query()?,
            language: self.language(),
            servings_inputs,
            scaling_targets,
            submit_controls,
        })
    }

    fn apply(&mut self, markers: &PageMarkers, patch: &PagePatch) -> ScalerResult<()> {
        let submits = self.elements(&markers.servings_submit);
        let targets = self.elements(&markers.scaling);
        let inputs = self.elements(&markers.servings_input);
        patch.validate_bounds(submits.len(), targets.len(), inputs.len())?;

        for &index in &patch.enable_submits {
            if let Some(input) = submits[index].dyn_ref::<HtmlInputElement>() {
                input.set_disabled(false);
            }
        }
        for target in &patch.target_texts {
            targets[target.index].set_text_content(Some(&target.text));
        }
        let value = patch.servings_value_text();
        for &index in &patch.servings_inputs {
            if let Some(input) = inputs[index].dyn_ref::<HtmlInputElement>() {
                input.set_value(&value);
            }
        }
        Ok(())
    }
}

/// `value` property of any element; `None` when it has none, like a `div`.
fn element_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    Reflect::get(element.as_ref(), &JsValue::from_str("value"))
        .ok()
        .and_then(|value| value.as_string())
}

/// Quantity formatter backed by `Number#toLocaleString(language)`.
///
/// Tags the browser rejects fall back to the built-in symbols of the resolved
/// locale.
#[must_use]
pub fn runtime_quantity_formatter(language: String, fraction_digits: u8) -> QuantityFormatterFn {
    Arc::new(move |quantity: f64, locale: &NumberLocale| {
        format_quantity_with_runtime(
            |value, max_fraction_digits| to_locale_string(value, &language, max_fraction_digits),
            quantity,
            locale,
            fraction_digits,
        )
    })
}

fn to_locale_string(value: f64, language: &str, max_fraction_digits: u32) -> Option<String> {
    let number = js_sys::Number::new(&JsValue::from_f64(value));
    let method = Reflect::get(&number, &JsValue::from_str("toLocaleString"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    let options = Object::new();
    Reflect::set(
        &options,
        &JsValue::from_str("maximumFractionDigits"),
        &JsValue::from(max_fraction_digits),
    )
    .ok()?;
    let arguments = Array::of2(&JsValue::from_str(language), &options);
    // A malformed tag throws a `RangeError`.
    Reflect::apply(&method, &number, &arguments)
        .ok()?
        .as_string()
}

/// Builds an engine over the global document whose quantities are formatted
/// with the browser's locale data for the declared page language.
pub fn dom_engine(config: ScalerConfig) -> ScalerResult<ScalerEngine<DomPage>> {
    let page = DomPage::from_window()?;
    let formatter = runtime_quantity_formatter(page.language(), config.fraction_digits);
    let mut engine = ScalerEngine::new(page, config)?;
    engine.set_quantity_formatter(formatter);
    Ok(engine)
}

/// Runs the scaler once the document is parsed.
///
/// If parsing already finished (the module loaded late) the pass runs right
/// away; otherwise a one-shot `DOMContentLoaded` listener is installed.
/// Failures inside the pass are logged and never reach the page.
pub fn register_on_ready(config: ScalerConfig) -> ScalerResult<()> {
    config.validate()?;
    let window =
        web_sys::window().ok_or_else(|| ScalerError::Page("no global window".to_owned()))?;
    let document = window
        .document()
        .ok_or_else(|| ScalerError::Page("no document on the global window".to_owned()))?;

    if document.ready_state() != "loading" {
        run_ready_pass(config);
        return Ok(());
    }

    let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        run_ready_pass(config.clone());
    });
    window
        .add_event_listener_with_callback(READY_EVENT, handler.as_ref().unchecked_ref())
        .map_err(|err| js_error("failed to register ready listener", &err))?;
    // The listener lives as long as the page.
    handler.forget();
    Ok(())
}

fn run_ready_pass(config: ScalerConfig) {
    let result = dom_engine(config).and_then(|mut engine| engine.on_ready());
    if let Err(err) = result {
        warn!(error = %err, "recipe scaling pass failed");
    }
}

fn js_error(context: &str, err: &JsValue) -> ScalerError {
    ScalerError::Page(format!("{context}: {err:?}"))
}

/// Module entry point: scales the page with the default config.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    register_on_ready(ScalerConfig::default()).map_err(|err| JsValue::from_str(&err.to_string()))
}
