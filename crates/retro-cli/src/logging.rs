//! Logging init: stderr with env-filter. The demos print their own
//! progress to stdout, so diagnostics stay on stderr.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr. A `RUST_LOG`-style value in
/// the environment overrides the default filter.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,retro_core=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
