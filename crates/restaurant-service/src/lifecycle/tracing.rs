//! # Tracing Setup
//!
//! Log lines carry an `engine` field (`customers`, `dispatch`, `inventory`,
//! `routes`) on actor events, and client calls open a span named after the
//! method, so a request reads as e.g. `place_order{priority=4}: Command`.
//!
//! ```bash
//! RUST_LOG=info cargo run                        # transitions, resizes, rejections
//! RUST_LOG=debug cargo run                       # every command and reply
//! RUST_LOG=restaurant_core=debug cargo run       # engine internals only
//! ```

/// Installs the global `fmt` subscriber, filtered by `RUST_LOG`.
///
/// Call once, from the binary. Panics if a global subscriber is already set.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
