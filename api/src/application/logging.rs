use tracing_subscriber::EnvFilter;

use crate::args::LogArgs;

/// `RUST_LOG` wins over `--log-filter` when set.
pub fn init_logger(log: &LogArgs) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
