//! Service configuration.
//!
//! Loaded from an optional TOML file (every section and field defaults),
//! then overridden from the environment. A `.env` file in the working
//! directory is read first so local keys need not be exported.
//!
//! Environment overrides:
//!   WEATHER_API_KEY     WeatherAPI.com key (live data; baseline values without it)
//!   SEASAFE_API_URL     remote dashboard base URL (use it instead of the registry)
//!   SEASAFE_LOG_LEVEL   debug | info | warn | error
//!   SEASAFE_STORE_PATH  session store file

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::alert::status::ClassificationThresholds;
use crate::alert::thresholds::AlertThresholds;
use crate::logging::LogLevel;
use crate::model::MarineError;
use crate::retry::RetryConfig;
use crate::session::AdminIdentity;
use crate::sos::SosSettings;

pub const DEFAULT_CONFIG_FILE: &str = "seasafe.toml";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_source: DataSourceConfig,
    pub classification: ClassificationThresholds,
    pub alerts: AlertThresholds,
    pub sos: SosSettings,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSourceConfig {
    /// Remote dashboard API. When unset, the built-in registry is served.
    pub api_url: Option<String>,
    pub weather_api_key: Option<String>,
    pub timeout_secs: u64,
    /// Default interval for `watch`.
    pub refresh_interval_secs: u64,
    pub retry: RetryConfig,
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            weather_api_key: None,
            timeout_secs: 10,
            refresh_interval_secs: 900,
            retry: RetryConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { path: PathBuf::from(".seasafe/store.json") }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            timestamps: false,
        }
    }
}

impl LoggingConfig {
    pub fn min_level(&self) -> Result<LogLevel, MarineError> {
        self.level.parse().map_err(MarineError::Config)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub admins: Vec<AdminIdentity>,
}

impl Config {
    /// Parses TOML text. Missing sections take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, MarineError> {
        let config: Config = toml::from_str(text).map_err(|e| MarineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Applies environment overrides, looking keys up through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), MarineError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty("WEATHER_API_KEY") {
            self.data_source.weather_api_key = Some(key);
        }
        if let Some(url) = non_empty("SEASAFE_API_URL") {
            self.data_source.api_url = Some(url);
        }
        if let Some(level) = non_empty("SEASAFE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(path) = non_empty("SEASAFE_STORE_PATH") {
            self.store.path = PathBuf::from(path);
        }
        self.validate()
    }

    /// Rejects threshold sets that would make the tiers overlap.
    pub fn validate(&self) -> Result<(), MarineError> {
        let c = &self.classification;
        let numbers = [
            ("classification.caution_wave_m", Some(c.caution_wave_m)),
            ("classification.caution_wind_kph", Some(c.caution_wind_kph)),
            ("classification.danger_wave_m", Some(c.danger_wave_m)),
            ("classification.danger_wind_kph", Some(c.danger_wind_kph)),
            ("classification.min_visibility_nm", c.min_visibility_nm),
            ("alerts.wind_speed_kph", Some(self.alerts.wind_speed_kph)),
            ("alerts.wave_height_m", Some(self.alerts.wave_height_m)),
            ("data_source.retry.jitter_factor", Some(self.data_source.retry.jitter_factor)),
        ];
        for (name, value) in numbers {
            if let Some(v) = value.filter(|v| !v.is_finite()) {
                return Err(MarineError::Config(format!("{} must be a finite number, got {}", name, v)));
            }
        }

        if c.caution_wave_m >= c.danger_wave_m {
            return Err(MarineError::Config(format!(
                "caution_wave_m ({}) must be below danger_wave_m ({})",
                c.caution_wave_m, c.danger_wave_m
            )));
        }
        if c.caution_wind_kph >= c.danger_wind_kph {
            return Err(MarineError::Config(format!(
                "caution_wind_kph ({}) must be below danger_wind_kph ({})",
                c.caution_wind_kph, c.danger_wind_kph
            )));
        }
        if self.alerts.wind_speed_kph < 0.0 || self.alerts.wave_height_m < 0.0 {
            return Err(MarineError::Config("alert thresholds must be non-negative".to_string()));
        }
        self.logging.min_level()?;
        Ok(())
    }
}

/// Loads configuration from `path` (or `seasafe.toml` if present) and the
/// process environment.
pub fn load_config(path: Option<&Path>) -> Result<Config, MarineError> {
    dotenv::dotenv().ok();

    let mut config = match path {
        Some(p) => {
            let text = std::fs::read_to_string(p)
                .map_err(|e| MarineError::Config(format!("{}: {}", p.display(), e)))?;
            Config::from_toml_str(&text)?
        }
        None => match std::fs::read_to_string(DEFAULT_CONFIG_FILE) {
            Ok(text) => Config::from_toml_str(&text)?,
            Err(_) => Config::default(),
        },
    };

    config.apply_env_overrides(|key| std::env::var(key).ok())?;
    Ok(config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
