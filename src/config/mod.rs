//! Dashboard configuration: where to fetch from, where the dashboard is, and
//! how often each part of it refreshes.
//!
//! Every field has a default, so a config file only needs the values that
//! differ. Files are JSON:
//!
//! ```json
//! {
//!   "source_url": "https://example.com/weather",
//!   "location": { "latitude": 52.52, "longitude": 13.405 },
//!   "schedule": { "weather_secs": 600 }
//! }
//! ```

pub mod error;

use crate::config::error::ConfigError;
use log::info;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// The spreadsheet endpoint the dashboard was built against.
pub const DEFAULT_SOURCE_URL: &str = "https://script.google.com/macros/s/AKfycbwYX2CKpZ9BHaWXMtpfw6fTVINr4L1oTG7x4m9Uk9YqEG2Zy0HyhVfgcNPS5-r3CT5keg/exec";
pub const DEFAULT_SUN_TIMES_URL: &str = "https://api.sunrise-sunset.org/json";

/// Fixed geographic position of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    /// Positive east.
    pub longitude: f64,
}

impl Default for Location {
    /// New Delhi.
    fn default() -> Self {
        Self {
            latitude: 28.6139,
            longitude: 77.2090,
        }
    }
}

/// Refresh periods, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    pub clock_secs: u64,
    pub weather_secs: u64,
    pub sun_position_secs: u64,
    pub moon_secs: u64,
    pub sun_times_secs: u64,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            clock_secs: 1,
            weather_secs: 5 * 60,
            sun_position_secs: 60,
            moon_secs: 60 * 60,
            sun_times_secs: 24 * 60 * 60,
        }
    }
}

impl Schedule {
    pub fn clock(&self) -> Duration {
        Duration::from_secs(self.clock_secs)
    }

    pub fn weather(&self) -> Duration {
        Duration::from_secs(self.weather_secs)
    }

    pub fn sun_position(&self) -> Duration {
        Duration::from_secs(self.sun_position_secs)
    }

    pub fn moon(&self) -> Duration {
        Duration::from_secs(self.moon_secs)
    }

    pub fn sun_times(&self) -> Duration {
        Duration::from_secs(self.sun_times_secs)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let periods = [
            ("schedule.clock_secs", self.clock_secs),
            ("schedule.weather_secs", self.weather_secs),
            ("schedule.sun_position_secs", self.sun_position_secs),
            ("schedule.moon_secs", self.moon_secs),
            ("schedule.sun_times_secs", self.sun_times_secs),
        ];
        for (field, secs) in periods {
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "period must be at least one second".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Weather data endpoint, fetched with a plain GET.
    pub source_url: String,
    /// Sunrise-sunset service base URL.
    pub sun_times_url: String,
    pub location: Location,
    pub request_timeout_secs: u64,
    pub schedule: Schedule,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            sun_times_url: DEFAULT_SUN_TIMES_URL.to_string(),
            location: Location::default(),
            request_timeout_secs: 30,
            schedule: Schedule::default(),
        }
    }
}

impl DashboardConfig {
    /// Reads and validates a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`] if the file
    /// can't be loaded, or [`ConfigError::Invalid`] if a value is out of range.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        let config: DashboardConfig = serde_json::from_slice(&bytes)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        info!("Loaded dashboard config from {}", path.display());
        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Checks URLs, coordinates and periods.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("source_url", &self.source_url)?;
        check_url("sun_times_url", &self.sun_times_url)?;

        let Location {
            latitude,
            longitude,
        } = self.location;
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ConfigError::Invalid {
                field: "location.latitude",
                reason: format!("{} is outside -90..=90", latitude),
            });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ConfigError::Invalid {
                field: "location.longitude",
                reason: format!("{} is outside -180..=180", longitude),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "request_timeout_secs",
                reason: "timeout must be at least one second".to_string(),
            });
        }
        self.schedule.validate()
    }
}

fn check_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::Invalid {
        field,
        reason: format!("'{}' is not a URL: {}", value, e),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::Invalid {
            field,
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}
