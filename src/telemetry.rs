//! Opt-in tracing setup for hosts embedding `chart-nav`.
//!
//! The crate only emits `tracing` events; installing a subscriber stays the
//! host's call. `init_default_tracing` is a convenience for examples and
//! debugging sessions, gated behind the `telemetry` feature.

/// Installs a compact default `tracing` subscriber.
///
/// Honors `RUST_LOG` when set and falls back to `info`. Returns `false` when
/// the feature is disabled or the host already installed a global
/// subscriber, so calling it is always safe.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
