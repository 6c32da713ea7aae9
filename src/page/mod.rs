mod markers;
mod patch;
mod snapshot;
mod static_page;

pub use markers::PageMarkers;
pub use patch::{PagePatch, TargetText};
pub use snapshot::{PageSnapshot, ScalingTargetState, ServingsInputState, SubmitControlState};
pub use static_page::{PageElement, StaticPage};

use crate::error::ScalerResult;

/// Contract implemented by anything that hosts a recipe page.
///
/// The scaler never touches a page directly: it reads one `PageSnapshot`,
/// computes a `PagePatch` from it, and hands the patch back. Element indices in
/// the patch refer to positions within the marker collections of the snapshot,
/// in document order.
pub trait PageSurface {
    fn snapshot(&self, markers: &PageMarkers) -> ScalerResult<PageSnapshot>;

    fn apply(&mut self, markers: &PageMarkers, patch: &PagePatch) -> ScalerResult<()>;
}
