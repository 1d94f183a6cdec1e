//! Log subscriber setup.
//!
//! Compact output without module paths; actors tag their lines with
//! `entity_type` instead. The level comes from `RUST_LOG`.
//!
//! Lines dropped by the lenient order policy carry `partial_resolution=true`,
//! so they can be told apart from hard failures:
//!
//! ```text
//! WARN place_order: Dropping lines for unknown products partial_resolution=true unresolved=[ProductId("ghost")]
//! ```

/// Initializes the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
