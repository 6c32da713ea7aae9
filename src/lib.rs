//! recipe-scaler: rescales recipe ingredient quantities to a chosen number of
//! servings.
//!
//! The scaling pass itself is pure: it reads a [`page::PageSnapshot`] and
//! produces a [`page::PagePatch`]. Pages are reached through the
//! [`page::PageSurface`] trait, implemented here by the in-memory
//! [`page::StaticPage`] and, with the `web-adapter` feature, by a browser DOM
//! adapter.

pub mod api;
pub mod core;
pub mod error;
pub mod page;
pub mod telemetry;

#[cfg(feature = "web-adapter")]
pub mod platform_web;

pub use api::{ScalerConfig, ScalerEngine};
pub use error::{ScalerError, ScalerResult};
