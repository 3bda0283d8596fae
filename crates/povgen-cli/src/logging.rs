use povgen_config::LogConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for `-v` flags, falling back to the configured level.
fn directive(config: &LogConfig, verbose: u8) -> String {
    match verbose {
        0 => config.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over both the flags and the
/// config file.
pub fn init(config: &LogConfig, verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(config, verbose)));

    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    // an earlier subscriber stays in place
    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
    {
        tracing::debug!(%err, "keeping the installed subscriber");
    }
}
