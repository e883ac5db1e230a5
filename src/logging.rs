use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber for the CLI.
///
/// `RUST_LOG` wins when set. Otherwise the level is `warn`, or `debug` with
/// `verbose`. Output goes to stderr so stdout stays clean for tables and JSON.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
