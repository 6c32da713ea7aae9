use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ScalerError, ScalerResult};
use crate::page::{
    PageMarkers, PagePatch, PageSnapshot, PageSurface, ScalingTargetState, ServingsInputState,
    SubmitControlState,
};

/// One element of a [`StaticPage`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageElement {
    pub tag: String,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub attributes: IndexMap<String, String>,
    #[serde(default)]
    pub text: String,
    /// Value of an input control. Empty when unset, as in a browser.
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub disabled: bool,
}

impl PageElement {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn input() -> Self {
        Self::new("input")
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn is_input_control(&self) -> bool {
        self.tag.eq_ignore_ascii_case("input")
    }

    /// Whether the element exposes a `value` property.
    #[must_use]
    pub fn has_value(&self) -> bool {
        ["input", "select", "textarea"]
            .iter()
            .any(|tag| self.tag.eq_ignore_ascii_case(tag))
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|candidate| candidate == class)
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// In-memory page used by tests, the snapshot CLI and headless hosts.
///
/// Elements are kept in document order; marker collections are the elements
/// whose class list contains the marker, like `getElementsByClassName`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StaticPage {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub elements: Vec<PageElement>,
}

impl StaticPage {
    #[must_use]
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub fn with_element(mut self, element: PageElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn push(&mut self, element: PageElement) -> usize {
        self.elements.push(element);
        self.elements.len() - 1
    }

    /// Document positions of the elements carrying `class`.
    #[must_use]
    pub fn collection(&self, class: &str) -> Vec<usize> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.has_class(class))
            .map(|(position, _)| position)
            .collect()
    }

    /// Elements carrying `class`, in document order.
    pub fn elements_with_class<'a>(
        &'a self,
        class: &'a str,
    ) -> impl Iterator<Item = &'a PageElement> + 'a {
        self.elements
            .iter()
            .filter(move |element| element.has_class(class))
    }

    pub fn to_json_pretty(&self) -> ScalerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ScalerError::Serialization(format!("failed to serialize page: {e}")))
    }

    pub fn from_json_str(input: &str) -> ScalerResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ScalerError::Serialization(format!("failed to parse page: {e}")))
    }
}

impl PageSurface for StaticPage {
    fn snapshot(&self, markers: &PageMarkers) -> ScalerResult<PageSnapshot> {
        let base_attribute = markers.base_data_attribute();
        let base_of = |element: &PageElement| element.attribute(&base_attribute).map(str::to_owned);

        Ok(PageSnapshot {
            query: self.query.clone(),
            language: self.language.clone(),
            servings_inputs: self
                .elements_with_class(&markers.servings_input)
                .map(|element| ServingsInputState {
                    value: element.has_value().then(|| element.value.clone()),
                    base: base_of(element),
                    is_input_control: element.is_input_control(),
                })
                .collect(),
            scaling_targets: self
                .elements_with_class(&markers.scaling)
                .map(|element| ScalingTargetState {
                    base: base_of(element),
                })
                .collect(),
            submit_controls: self
                .elements_with_class(&markers.servings_submit)
                .map(|element| SubmitControlState {
                    is_input_control: element.is_input_control(),
                    disabled: element.disabled,
                })
                .collect(),
        })
    }

    fn apply(&mut self, markers: &PageMarkers, patch: &PagePatch) -> ScalerResult<()> {
        let submits = self.collection(&markers.servings_submit);
        let targets = self.collection(&markers.scaling);
        let inputs = self.collection(&markers.servings_input);
        patch.validate_bounds(submits.len(), targets.len(), inputs.len())?;

        for &index in &patch.enable_submits {
            let element = &mut self.elements[submits[index]];
            if element.is_input_control() {
                element.disabled = false;
            }
        }
        for target in &patch.target_texts {
            self.elements[targets[target.index]].text = target.text.clone();
        }
        let value = patch.servings_value_text();
        for &index in &patch.servings_inputs {
            let element = &mut self.elements[inputs[index]];
            if element.is_input_control() {
                element.value = value.clone();
            }
        }
        Ok(())
    }
}
