use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `NUTRACK_LOG` takes precedence over the configured level, so a single run
/// can be traced with e.g. `NUTRACK_LOG=debug nutrack today -u ada`.
pub fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_from_env("NUTRACK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: logging disabled: {}", e);
    }
}
