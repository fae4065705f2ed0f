use std::env;
use std::fmt;
use std::path::PathBuf;

/// Top-level configuration, read once at startup. Domain constants (price
/// bands, acceptance thresholds, districts, points of interest) are compiled
/// in; the environment only steers the ambient pieces.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telemetry: TelemetryConfig,
    pub reference: ReferenceConfig,
    pub top_n: usize,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let postal_codes = env::var("APP_POSTAL_CODES")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("nl_postal_codes.csv"));
        let top_n = match env::var("APP_TOP_N") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidTopN)?,
            Err(_) => 20,
        };

        Ok(Self {
            telemetry: TelemetryConfig { log_level },
            reference: ReferenceConfig { postal_codes },
            top_n,
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where the static reference data lives.
#[derive(Debug, Clone)]
pub struct ReferenceConfig {
    pub postal_codes: PathBuf,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTopN,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTopN => write!(f, "APP_TOP_N must be a non-negative integer"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_POSTAL_CODES");
        env::remove_var("APP_TOP_N");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(
            config.reference.postal_codes,
            PathBuf::from("nl_postal_codes.csv")
        );
        assert_eq!(config.top_n, 20);
    }

    #[test]
    fn env_overrides_are_honored() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_LOG_LEVEL", "debug");
        env::set_var("APP_POSTAL_CODES", "/tmp/codes.csv");
        env::set_var("APP_TOP_N", "5");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.telemetry.log_level, "debug");
        assert_eq!(config.reference.postal_codes, PathBuf::from("/tmp/codes.csv"));
        assert_eq!(config.top_n, 5);
        reset_env();
    }

    #[test]
    fn non_numeric_top_n_is_rejected() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_TOP_N", "twintig");
        let error = AppConfig::load().expect_err("bad top_n rejected");
        assert!(matches!(error, ConfigError::InvalidTopN));
        reset_env();
    }
}
