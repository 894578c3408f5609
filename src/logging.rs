//! Logging setup for binaries built on this crate.

/// Installs a `tracing` subscriber filtered by the `RUST_LOG` environment variable.
///
/// Log lines go to stderr so that descriptions written to stdout stay clean.
/// `RUST_LOG=dispatch_patterns=trace` shows every construction, dispatch, and
/// buffer release.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
