//! # Observability
//!
//! Structured logging setup shared by every binary built on the store.
//!
//! The collection actor emits events with a `collection` field (`Collection started`,
//! `Created`, `Deleted`, `Shutdown`, ...), so module targets are hidden to keep lines short.
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle events only
//! RUST_LOG=debug cargo run     # full payloads of every request
//! ```

use tracing_subscriber::EnvFilter;

/// Installs a compact `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (e.g. `"info"`) is used. Calling
/// this more than once is harmless: later calls leave the first subscriber in place.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
