//! Defines `WeatherSnapshot`, the derived record handed to the presentation
//! layer after every data refresh.

use crate::metrics::aqi::estimate_aqi;
use crate::metrics::bands::{thermometer_level, BandTable};
use crate::metrics::wind::{normalize_wind, WindReading};
use crate::types::band::Band;
use crate::types::reading::Reading;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Where the reading behind a snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingSource {
    /// Fetched from the weather source.
    Live,
    /// Generated locally because the fetch failed.
    Synthetic,
}

/// A reading plus every value derived from it for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    pub observed_at: DateTime<Utc>,
    pub source: ReadingSource,
    pub reading: Reading,
    pub aqi: f64,
    pub wind: WindReading,
    pub aqi_band: Band,
    pub uv_band: Band,
    pub temperature_band: Band,
    /// Thermometer fill in percent.
    pub thermometer_level: f64,
    /// Recent temperatures for the chart, most recent first. Empty for
    /// synthetic snapshots.
    pub temperature_series: Vec<f64>,
}

impl WeatherSnapshot {
    /// Derives a snapshot from a fetched reading, computing the AQI from its
    /// pollutant concentrations.
    pub fn live(reading: Reading, temperature_series: Vec<f64>, observed_at: DateTime<Utc>) -> Self {
        let aqi = estimate_aqi(reading.pm25, reading.pm10, reading.co);
        Self::derive(
            reading,
            aqi,
            temperature_series,
            observed_at,
            ReadingSource::Live,
        )
    }

    /// Derives a snapshot from a generated reading whose AQI is given
    /// directly rather than computed from concentrations.
    pub fn synthetic(reading: Reading, aqi: f64, observed_at: DateTime<Utc>) -> Self {
        Self::derive(
            reading,
            aqi,
            Vec::new(),
            observed_at,
            ReadingSource::Synthetic,
        )
    }

    fn derive(
        reading: Reading,
        aqi: f64,
        temperature_series: Vec<f64>,
        observed_at: DateTime<Utc>,
        source: ReadingSource,
    ) -> Self {
        let wind = normalize_wind(reading.wind_speed, &reading.wind_direction);
        Self {
            observed_at,
            source,
            aqi,
            wind,
            aqi_band: *BandTable::aqi().classify(aqi),
            uv_band: *BandTable::uv().classify(reading.uv_index),
            temperature_band: *BandTable::temperature().classify(reading.temperature),
            thermometer_level: thermometer_level(reading.temperature),
            temperature_series,
            reading,
        }
    }
}
