use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::ScalerResult;
use crate::page::PageSurface;

use super::quantity_formatter::QuantityFormatterFn;
use super::{ScalerConfig, ScalingOutcome, ScalingPass, build_scaling_pass};

/// Lifecycle of a scaler bound to one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScalerPhase {
    /// The page has not signalled readiness yet.
    #[default]
    Pending,
    /// At least one pass has been applied to the page.
    Computed,
}

/// Drives scaling passes against one page surface.
pub struct ScalerEngine<P: PageSurface> {
    page: P,
    config: ScalerConfig,
    phase: ScalerPhase,
    quantity_formatter: Option<QuantityFormatterFn>,
    last_outcome: Option<ScalingOutcome>,
}

impl<P: PageSurface> ScalerEngine<P> {
    pub fn new(page: P, config: ScalerConfig) -> ScalerResult<Self> {
        config.validate()?;
        Ok(Self {
            page,
            config,
            phase: ScalerPhase::Pending,
            quantity_formatter: None,
            last_outcome: None,
        })
    }

    #[must_use]
    pub fn phase(&self) -> ScalerPhase {
        self.phase
    }

    #[must_use]
    pub fn config(&self) -> &ScalerConfig {
        &self.config
    }

    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    #[must_use]
    pub fn into_page(self) -> P {
        self.page
    }

    /// Outcome of the most recent applied pass.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&ScalingOutcome> {
        self.last_outcome.as_ref()
    }

    /// Replaces the built-in locale number formatting of scaled quantities.
    pub fn set_quantity_formatter(&mut self, formatter: QuantityFormatterFn) {
        self.quantity_formatter = Some(formatter);
    }

    pub fn clear_quantity_formatter(&mut self) {
        self.quantity_formatter = None;
    }

    /// Handles the page-ready notification.
    ///
    /// The first notification runs a pass and moves the engine to
    /// [`ScalerPhase::Computed`]; later ones are ignored. Returns whether a pass
    /// ran. When the page cannot be read or written the engine stays pending.
    pub fn on_ready(&mut self) -> ScalerResult<bool> {
        if self.phase == ScalerPhase::Computed {
            trace!("ready notification after first pass ignored");
            return Ok(false);
        }
        self.recompute()?;
        Ok(true)
    }

    /// Runs a pass against the current page state and applies it.
    pub fn recompute(&mut self) -> ScalerResult<ScalingOutcome> {
        let pass = self.preview()?;
        if let Err(err) = self.page.apply(&self.config.markers, &pass.patch) {
            warn!(error = %err, "failed to apply scaling patch");
            return Err(err);
        }

        if self.phase == ScalerPhase::Pending {
            debug!("scaler computed");
        }
        self.phase = ScalerPhase::Computed;
        self.last_outcome = Some(pass.outcome.clone());
        Ok(pass.outcome)
    }

    /// Computes the pass for the current page state without applying it.
    pub fn preview(&self) -> ScalerResult<ScalingPass> {
        let snapshot = self.page.snapshot(&self.config.markers)?;
        let pass = build_scaling_pass(&snapshot, &self.config, self.quantity_formatter.as_ref());
        pass.patch.validate(&snapshot)?;
        Ok(pass)
    }
}
