use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::config::RuntimeConfig;

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over
/// the `--verbose` default.
pub fn init(config: &RuntimeConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    // A subscriber may already be set when running under tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .try_init();
}

fn default_directive(config: &RuntimeConfig) -> &'static str {
    if config.verbose {
        "zigbee_light=debug"
    } else {
        "warn"
    }
}
