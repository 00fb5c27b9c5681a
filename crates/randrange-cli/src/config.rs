//! Environment configuration.

use crate::error::AppError;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Runtime configuration read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How many values to print.
    pub count: usize,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: 1,
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Reads `RANDRANGE_COUNT` and `RANDRANGE_LOG_FORMAT` from the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let count = match lookup("RANDRANGE_COUNT") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|count| *count > 0)
                .ok_or_else(|| {
                    AppError::Config(format!(
                        "RANDRANGE_COUNT must be a positive integer, got {raw:?}"
                    ))
                })?,
            None => 1,
        };

        let log_format = match lookup("RANDRANGE_LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "RANDRANGE_LOG_FORMAT must be \"pretty\" or \"json\", got {other:?}"
                )));
            }
        };

        Ok(Self { count, log_format })
    }
}
