//! Tracing setup for host applications.
//!
//! The crate itself only emits `tracing` events; a desktop host that wants
//! them on a console or in a file calls [`init`] once at startup.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber, honoring `RUST_LOG` and
/// falling back to `info`.
pub fn init() {
    init_with_filter("info");
}

/// Initializes the global tracing subscriber with an explicit fallback
/// filter. Calling it again is a no-op.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init_with_filter("debug");
    }
}
