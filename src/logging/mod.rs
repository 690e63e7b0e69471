use tracing::Level;
use tracing_subscriber::EnvFilter;


/// Level selected by the `-v` count: warn, then debug, then trace.
#[must_use]
pub const fn verbosity_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Build the event filter. A non-empty, parseable `rust_log` wins over the
/// `-v` level; otherwise the verbosity level applies to every target.
#[must_use]
pub fn filter(verbose: u8, rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(verbosity_level(verbose).into()))
}

/// Install the global `fmt` subscriber, writing to stderr.
pub fn init(verbose: u8) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
