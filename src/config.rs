//! Application-level configuration loading: quiz source endpoint and round
//! timing.

use std::{env, fs, io::ErrorKind, path::PathBuf, time::Duration};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "WORD_BLITZ_BACK_CONFIG_PATH";
/// Time budget of a round when the configuration does not specify one.
const DEFAULT_TIME_BUDGET_SECS: u64 = 300;
/// Session clock period when the configuration does not specify one.
const DEFAULT_TICK_PERIOD_MS: u64 = 1_000;

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    source_url: String,
    time_budget_secs: u64,
    tick_period: Duration,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to baked-in
    /// defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        time_budget_secs = config.time_budget_secs,
                        "loaded configuration"
                    );
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Endpoint the quiz payload is fetched from. Empty when unconfigured,
    /// which every fetch attempt reports as an invalid-URL failure.
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Time budget of one round, in seconds.
    pub fn time_budget_secs(&self) -> u64 {
        self.time_budget_secs
    }

    /// Period of the session clock driving one-second ticks.
    pub fn tick_period(&self) -> Duration {
        self.tick_period
    }

    #[cfg(test)]
    pub(crate) fn for_tests(time_budget_secs: u64, tick_period: Duration) -> Self {
        Self {
            source_url: String::new(),
            time_budget_secs,
            tick_period,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_url: String::new(),
            time_budget_secs: DEFAULT_TIME_BUDGET_SECS,
            tick_period: Duration::from_millis(DEFAULT_TICK_PERIOD_MS),
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default)]
    source_url: String,
    time_budget_secs: Option<u64>,
    tick_period_ms: Option<u64>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        Self {
            source_url: value.source_url,
            time_budget_secs: value.time_budget_secs.unwrap_or(DEFAULT_TIME_BUDGET_SECS),
            tick_period: Duration::from_millis(
                value.tick_period_ms.unwrap_or(DEFAULT_TICK_PERIOD_MS),
            ),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
