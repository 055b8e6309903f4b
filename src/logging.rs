//! Logging initialization
//!
//! Android builds route `tracing` events (and `log` records) to logcat;
//! other platforms print to stderr through the fmt subscriber.

use once_cell::sync::OnceCell;

use crate::config::LoggingConfig;

static INIT: OnceCell<()> = OnceCell::new();

/// Install the global subscriber once. Later calls are no-ops.
pub fn init_logging(config: &LoggingConfig) {
    INIT.get_or_init(|| install(config));
}

cfg_if::cfg_if! {
    if #[cfg(target_os = "android")] {
        fn install(config: &LoggingConfig) {
            use tracing_subscriber::filter::LevelFilter;
            use tracing_subscriber::layer::SubscriberExt;
            use tracing_subscriber::util::SubscriberInitExt;

            let layer = match tracing_android::layer(&config.tag) {
                Ok(layer) => layer,
                Err(err) => {
                    eprintln!("[logging] Failed to open logcat: {}", err);
                    return;
                }
            };

            // Another subscriber may already be installed by the host app.
            let _ = tracing_subscriber::registry()
                .with(LevelFilter::from_level(config.level()))
                .with(layer)
                .try_init();
        }
    } else {
        fn install(config: &LoggingConfig) {
            // Another subscriber may already be installed by the host app.
            let _ = tracing_subscriber::fmt()
                .with_max_level(config.level())
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let config = LoggingConfig::default();
        init_logging(&config);
        init_logging(&config);
        log::debug!("logging initialized twice without panicking");
    }
}
