//! Utilities for logging.
use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Environment variable for the log output format.
pub const LOG_MODE_ENV: &str = "TABLEID_LOG_MODE";

/// Environment variable for the log verbosity.
pub const LOG_VERBOSITY_ENV: &str = "TABLEID_LOG_VERBOSITY";

#[derive(Debug, thiserror::Error)]
pub enum LogConfigError {
    #[error("invalid log mode '{0}', expected one of pretty, json, compact")]
    InvalidMode(String),

    #[error("invalid log verbosity '{0}'")]
    InvalidVerbosity(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoggingMode {
    #[default]
    Pretty,
    Json,
    Compact,
}

impl FromStr for LoggingMode {
    type Err = LogConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LoggingMode::Pretty),
            "json" => Ok(LoggingMode::Json),
            "compact" => Ok(LoggingMode::Compact),
            _ => Err(LogConfigError::InvalidMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    pub mode: LoggingMode,
    /// 0 => warn, 1 => info, 2 => debug, 3+ => trace
    pub verbosity: u8,
}

impl LoggingConfig {
    /// Read the config from the environment, using defaults for unset
    /// variables.
    pub fn from_env() -> Result<Self, LogConfigError> {
        Self::from_vars(
            std::env::var(LOG_MODE_ENV).ok().as_deref(),
            std::env::var(LOG_VERBOSITY_ENV).ok().as_deref(),
        )
    }

    fn from_vars(mode: Option<&str>, verbosity: Option<&str>) -> Result<Self, LogConfigError> {
        let mode = match mode {
            Some(mode) => mode.parse()?,
            None => LoggingMode::default(),
        };
        let verbosity = match verbosity {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| LogConfigError::InvalidVerbosity(v.to_string()))?,
            None => 0,
        };
        Ok(LoggingConfig { mode, verbosity })
    }

    pub fn level(&self) -> Level {
        match self.verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Initialize a global subscriber. `RUST_LOG` takes precedence over the
/// verbosity.
///
/// Does nothing if a global subscriber is already set.
pub fn init(verbosity: u8, mode: LoggingMode) {
    init_with_config(&LoggingConfig { mode, verbosity })
}

pub fn init_with_config(config: &LoggingConfig) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(config.level().into())
        .from_env_lossy();
    let builder = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_file(true)
        .with_line_number(true);

    let _ = match config.mode {
        LoggingMode::Pretty => tracing::subscriber::set_global_default(builder.pretty().finish()),
        LoggingMode::Json => tracing::subscriber::set_global_default(builder.json().finish()),
        LoggingMode::Compact => {
            tracing::subscriber::set_global_default(builder.compact().finish())
        }
    };
}

/// Initialize logging for tests, writing through the test harness so output
/// is captured per test.
pub fn init_test() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::DEBUG.into())
        .from_env_lossy();
    let _ = FmtSubscriber::builder()
        .with_test_writer()
        .with_env_filter(env_filter)
        .try_init();
}
