use crate::core::number_to_string;
use crate::error::{ScalerError, ScalerResult};
use crate::page::PageSnapshot;

/// New display text for one scaling target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetText {
    pub index: usize,
    pub text: String,
}

/// Writes produced by one scaling pass, applied in field order: submit
/// controls first, then target texts, then servings inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct PagePatch {
    pub enable_submits: Vec<usize>,
    pub target_texts: Vec<TargetText>,
    /// Resolved serving count written to every servings input.
    pub servings_value: f64,
    pub servings_inputs: Vec<usize>,
}

impl PagePatch {
    #[must_use]
    pub fn new(servings_value: f64) -> Self {
        Self {
            enable_submits: Vec::new(),
            target_texts: Vec::new(),
            servings_value,
            servings_inputs: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_enabled_submit(mut self, index: usize) -> Self {
        self.enable_submits.push(index);
        self
    }

    #[must_use]
    pub fn with_target_text(mut self, index: usize, text: impl Into<String>) -> Self {
        self.target_texts.push(TargetText {
            index,
            text: text.into(),
        });
        self
    }

    #[must_use]
    pub fn with_servings_input(mut self, index: usize) -> Self {
        self.servings_inputs.push(index);
        self
    }

    /// Text assigned to input controls, in plain `Number#toString` form.
    #[must_use]
    pub fn servings_value_text(&self) -> String {
        number_to_string(self.servings_value)
    }

    /// Checks the patch against the snapshot it was computed from.
    ///
    /// Besides index bounds, only input controls may be enabled or receive a
    /// value.
    pub fn validate(&self, snapshot: &PageSnapshot) -> ScalerResult<()> {
        self.validate_bounds(
            snapshot.submit_controls.len(),
            snapshot.scaling_targets.len(),
            snapshot.servings_inputs.len(),
        )?;

        if let Some(index) = self
            .enable_submits
            .iter()
            .copied()
            .find(|&index| !snapshot.submit_controls[index].is_input_control)
        {
            return Err(ScalerError::InvalidPatch(format!(
                "submit control {index} is not an input control"
            )));
        }
        if let Some(index) = self
            .servings_inputs
            .iter()
            .copied()
            .find(|&index| !snapshot.servings_inputs[index].is_input_control)
        {
            return Err(ScalerError::InvalidPatch(format!(
                "servings input {index} is not an input control"
            )));
        }

        Ok(())
    }

    /// Checks indices against the current collection sizes of a page.
    pub fn validate_bounds(
        &self,
        submit_count: usize,
        target_count: usize,
        input_count: usize,
    ) -> ScalerResult<()> {
        let check = |kind: &str, index: usize, count: usize| {
            if index < count {
                Ok(())
            } else {
                Err(ScalerError::InvalidPatch(format!(
                    "{kind} index {index} out of range for {count} elements"
                )))
            }
        };

        for &index in &self.enable_submits {
            check("submit control", index, submit_count)?;
        }
        for target in &self.target_texts {
            check("scaling target", target.index, target_count)?;
        }
        for &index in &self.servings_inputs {
            check("servings input", index, input_count)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enable_submits.is_empty()
            && self.target_texts.is_empty()
            && self.servings_inputs.is_empty()
    }
}
