//! Diagnostic logging
//!
//! Structured logging through `tracing`, written to stderr so it never mixes with
//! command output. Logging is off unless `--debug` is given; `FS_LOG` then refines
//! the filter (e.g. `FS_LOG=fscmd=trace`).

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "FS_LOG";

const DEFAULT_LEVEL: &str = "debug";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub enabled: bool,
    /// Filter used when `FS_LOG` is unset.
    pub level: String,
    /// Include file and line of each event.
    pub with_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_LEVEL.to_string(),
            with_location: true,
        }
    }
}

/// Build the event filter for a configuration.
pub fn build_env_filter(config: &LogConfig) -> EnvFilter {
    if !config.enabled {
        return EnvFilter::new("off");
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(config: &LogConfig) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(config.with_location)
        .with_line_number(config.with_location)
        .with_ansi(false);

    let _ = tracing_subscriber::registry()
        .with(build_env_filter(config))
        .with(layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_disabled_filter_is_off() {
        let filter = build_env_filter(&LogConfig::default());
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::OFF));
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        let config = LogConfig {
            enabled: true,
            ..LogConfig::default()
        };
        init(&config);
        init(&config);
    }
}
