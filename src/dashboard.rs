//! The main entry point: a [`Dashboard`] owns the configuration and the
//! clients for the weather source and the sun-times service, and turns their
//! answers into display-ready values.

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::feed::sample::synthetic_snapshot;
use crate::feed::sun_times::SunTimesClient;
use crate::feed::weather_feed::WeatherFeed;
use crate::metrics::lunar::phase_at;
use crate::metrics::riseset::riseset;
use crate::metrics::solar::project;
use crate::types::moon_phase::MoonPhaseResult;
use crate::types::snapshot::WeatherSnapshot;
use crate::types::solar::{SolarWindow, SunPosition};
use bon::bon;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Timelike, Utc};
use log::{info, warn};
use reqwest::Client;
use std::fmt::Display;

/// Wall-clock format, e.g. `Monday, 19 October 2026, 02:03:04 pm`.
pub const CLOCK_FORMAT: &str = "%A, %-d %B %Y, %I:%M:%S %P";

/// Formats `now` for the clock line in its own time zone.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use skydeck::clock_label;
///
/// let now = Utc.with_ymd_and_hms(2026, 10, 19, 14, 3, 4).unwrap();
/// assert_eq!(clock_label(now), "Monday, 19 October 2026, 02:03:04 pm");
/// ```
pub fn clock_label<Tz: TimeZone>(now: DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    now.format(CLOCK_FORMAT).to_string()
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    config: DashboardConfig,
    weather_feed: WeatherFeed,
    sun_times: SunTimesClient,
}

#[bon]
impl Dashboard {
    /// Creates a dashboard.
    ///
    /// # Arguments
    ///
    /// * `config` - Optional configuration. Defaults to [`DashboardConfig::default()`].
    /// * `client` - Optional HTTP client shared by both feeds. When omitted, one
    ///   is built with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Config`] if the configuration fails
    /// validation, or [`DashboardError::HttpClient`] if the HTTP client can't
    /// be built.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use skydeck::{Dashboard, DashboardConfig, DashboardError};
    /// # fn run() -> Result<(), DashboardError> {
    /// let dashboard = Dashboard::builder().build()?;
    ///
    /// let mut config = DashboardConfig::default();
    /// config.source_url = "http://localhost:8080/weather".to_string();
    /// let local = Dashboard::builder().config(config).build()?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub fn new(
        config: Option<DashboardConfig>,
        client: Option<Client>,
    ) -> Result<Self, DashboardError> {
        let config = config.unwrap_or_default();
        config.validate()?;

        let client = match client {
            Some(client) => client,
            None => Client::builder()
                .timeout(config.request_timeout())
                .build()
                .map_err(DashboardError::HttpClient)?,
        };

        Ok(Self {
            weather_feed: WeatherFeed::new(client.clone(), config.source_url.clone()),
            sun_times: SunTimesClient::new(client, config.sun_times_url.clone(), config.location),
            config,
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Fetches the latest reading and derives a snapshot from it.
    ///
    /// Never fails: when the fetch does, the error is logged and a
    /// synthetic snapshot for the local hour of `now` is returned instead.
    pub async fn refresh_weather(&self, now: DateTime<Utc>) -> WeatherSnapshot {
        match self.weather_feed.fetch().await {
            Ok(feed) => WeatherSnapshot::live(feed.reading, feed.temperature_series, now),
            Err(e) => {
                warn!("Weather fetch failed, showing synthetic data: {}", e);
                let hour = now.with_timezone(&Local).hour();
                synthetic_snapshot(hour, now, &mut rand::thread_rng())
            }
        }
    }

    /// Sunrise and sunset for `date` at the configured location.
    ///
    /// Asks the sun-times service first and computes the window locally if
    /// that fails.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Solar`] only when both the service and the
    /// local computation fail, i.e. when the sun doesn't rise or set on
    /// `date` at this latitude.
    pub async fn refresh_sun_window(&self, date: NaiveDate) -> Result<SolarWindow, DashboardError> {
        match self.sun_times.fetch(date).await {
            Ok(window) => Ok(window),
            Err(e) => {
                warn!("Sun times fetch failed, computing locally: {}", e);
                let location = self.config.location;
                let window = riseset(date, location.latitude, location.longitude)?;
                info!(
                    "Computed sun times for {}: sunrise {}, sunset {}",
                    date,
                    window.sunrise(),
                    window.sunset()
                );
                Ok(window)
            }
        }
    }

    pub fn sun_position(&self, now: DateTime<Utc>, window: &SolarWindow) -> SunPosition {
        project(now, window)
    }

    pub fn moon_phase(&self, now: DateTime<Utc>) -> MoonPhaseResult {
        phase_at(now)
    }
}
