//! Installs the process-wide `tracing` subscriber.

use tracing_subscriber::EnvFilter;

use medtagger_config::BuildTarget;

/// The filter used when `RUST_LOG` isn't set: production builds stay quiet,
/// development builds show debug output.
pub fn default_directive(target: BuildTarget) -> &'static str {
    match target {
        BuildTarget::Production => "info",
        BuildTarget::Development => "debug",
    }
}

/// Sets up logging to stderr so stdout stays clean for the rendered record.
///
/// `RUST_LOG` always wins over the target default.
pub fn init(target: BuildTarget) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(target)));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(error) = result {
        eprintln!("Failed to install log subscriber: {}", error);
    }
}
