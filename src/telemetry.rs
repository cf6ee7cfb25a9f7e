//! Diagnostic logging setup.
//!
//! Library code emits `tracing` events; the binary installs a formatting
//! subscriber on stderr so stdout stays reserved for the run summary.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Builds the event filter from `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_FILTER`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global stderr subscriber.
///
/// An already installed subscriber is kept.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(error) = installed {
        debug!(%error, "keeping existing tracing subscriber");
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{env_filter, init_tracing};

    #[rstest]
    fn filter_defaults_to_info_without_rust_log() {
        let _guard = env_lock::lock_env([("RUST_LOG", None::<&str>)]);
        assert_eq!(env_filter().to_string(), "info");
    }

    #[rstest]
    fn filter_honours_rust_log() {
        let _guard = env_lock::lock_env([("RUST_LOG", Some("archivist=debug"))]);
        assert_eq!(env_filter().to_string(), "archivist=debug");
    }

    #[rstest]
    fn repeated_initialisation_keeps_first_subscriber() {
        init_tracing();
        init_tracing();
        tracing::info!("still logging after repeated initialisation");
    }
}
