use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber. `log` records from the client are bridged
/// into it; `RUST_LOG` picks the level, `info` otherwise.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // a subscriber may already be installed (tests, embedding applications)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
