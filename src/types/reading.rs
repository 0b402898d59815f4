//! Defines `Reading`, one flat set of measurements from the weather source,
//! and `WindHeading`, the two shapes a reported wind direction can take.

use crate::types::compass::CompassDirection;
use serde::Serialize;
use std::fmt;

/// A wind direction as reported by the source: either a heading in degrees
/// or a compass label such as `"SW"`.
///
/// Labels are kept verbatim; matching them against the compass rose happens in
/// [`crate::normalize_wind`], which also decides what an unknown label means.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WindHeading {
    Degrees(f64),
    Label(String),
}

impl WindHeading {
    /// Interprets free text the way the feed does: anything that reads as a
    /// finite number is a heading in degrees, everything else is a label.
    /// Blank text means north.
    ///
    /// # Examples
    ///
    /// ```
    /// use skydeck::WindHeading;
    ///
    /// assert_eq!(WindHeading::parse(" 135 "), WindHeading::Degrees(135.0));
    /// assert_eq!(WindHeading::parse("ese"), WindHeading::Label("ese".to_string()));
    /// assert_eq!(WindHeading::parse(""), WindHeading::Label("N".to_string()));
    /// ```
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return WindHeading::default();
        }
        match trimmed.parse::<f64>() {
            Ok(degrees) if degrees.is_finite() => WindHeading::Degrees(degrees),
            _ => WindHeading::Label(text.to_string()),
        }
    }
}

impl Default for WindHeading {
    fn default() -> Self {
        WindHeading::Label(CompassDirection::N.label().to_string())
    }
}

impl From<CompassDirection> for WindHeading {
    fn from(direction: CompassDirection) -> Self {
        WindHeading::Label(direction.label().to_string())
    }
}

impl fmt::Display for WindHeading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindHeading::Degrees(degrees) => write!(f, "{}°", degrees),
            WindHeading::Label(label) => f.write_str(label),
        }
    }
}

/// One set of current conditions, built fresh for every fetch cycle.
///
/// Every numeric field is finite. Values the source did not provide, or that
/// could not be parsed, are `0.0`; a missing wind direction is north.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Reading {
    /// Current temperature in °C.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Today's high in °C.
    pub high_temperature: f64,
    /// Today's low in °C.
    pub low_temperature: f64,
    /// Sea-level pressure in hPa.
    pub pressure: f64,
    pub uv_index: f64,
    /// PM2.5 concentration in µg/m³.
    pub pm25: f64,
    /// PM10 concentration in µg/m³.
    pub pm10: f64,
    /// Carbon monoxide in ppm.
    pub co: f64,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    pub wind_direction: WindHeading,
    /// Rainfall in mm.
    pub rainfall: f64,
}
