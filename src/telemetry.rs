//! Tracing setup for hosts embedding `recipe-scaler`.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the host. With the `telemetry` feature these helpers install a compact fmt
//! subscriber filtered by `RUST_LOG`.

/// Installs a compact fmt subscriber with an `info` default filter.
///
/// See [`init_tracing`] for the return value.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing("info")
}

/// Installs a compact fmt subscriber, using `default_directive` when `RUST_LOG`
/// is unset or unparsable.
///
/// Returns `false` when the `telemetry` feature is disabled or when a global
/// subscriber was already set by the host.
#[must_use]
pub fn init_tracing(default_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_directive;
        false
    }
}
