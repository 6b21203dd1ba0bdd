//! Logging system initialization
//!
//! Sets up the tracing subscriber for the whole process. Output goes to
//! stdout through a non-blocking writer; the filter comes from `RUST_LOG`
//! and defaults to `info`.

use tracing_subscriber::EnvFilter;

/// Initialize the logging system.
///
/// Call exactly once, before anything that can fail wants to log.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
pub fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(true)
        .init();

    guard
}
