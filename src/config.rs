//! Runtime configuration, read from the environment (and `.env`).

use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_PREDICTOR_URL: &str = "http://127.0.0.1:5000/predict";
pub const DEFAULT_HISTORY_DIR: &str = ".height_predictor";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prediction endpoint
    pub predictor_url: String,
    /// Directory holding the durable history entry
    pub history_dir: PathBuf,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Run the timed celebration and wave effects
    pub effects_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            predictor_url: DEFAULT_PREDICTOR_URL.to_string(),
            history_dir: PathBuf::from(DEFAULT_HISTORY_DIR),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            effects_enabled: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset keys keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let request_timeout = match lookup("PREDICTOR_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!("Ignoring invalid PREDICTOR_TIMEOUT_SECS={:?}", raw);
                    defaults.request_timeout
                }
            },
            None => defaults.request_timeout,
        };

        Self {
            predictor_url: lookup("PREDICTOR_URL").unwrap_or(defaults.predictor_url),
            history_dir: lookup("PREDICTOR_HISTORY_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.history_dir),
            request_timeout,
            effects_enabled: lookup("PREDICTOR_EFFECTS")
                .map(|v| v.trim() != "0")
                .unwrap_or(defaults.effects_enabled),
        }
    }
}
