use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber, writing to stderr.
///
/// `filter` takes precedence over `RUST_LOG`; with neither set the level is
/// `info`. Calling this more than once is a no-op.
pub fn init(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
