use tracing_subscriber::EnvFilter;

/// Sets up stderr logging. `RUST_LOG` wins over `verbose` when set.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("measure=debug,info")
        } else {
            EnvFilter::new("warn")
        }
    });

    // Keep running without logs if a global subscriber is already set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
