use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::LogLevel;

/// Install the stderr subscriber. `REFDATA_LOG` takes precedence over
/// `--log-level` when set.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_env("REFDATA_LOG")
        .unwrap_or_else(|_| EnvFilter::new(level.as_directive()));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
