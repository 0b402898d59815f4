//! Defines the daylight window and the projected sun position.

use crate::metrics::error::SolarError;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Sunrise and sunset for one calendar day at the dashboard's location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolarWindow {
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
}

impl SolarWindow {
    /// Creates a window, rejecting a sunset that is not strictly after sunrise.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use skydeck::SolarWindow;
    ///
    /// let rise = Utc.with_ymd_and_hms(2024, 6, 1, 5, 0, 0).unwrap();
    /// let set = Utc.with_ymd_and_hms(2024, 6, 1, 19, 0, 0).unwrap();
    /// assert!(SolarWindow::new(rise, set).is_ok());
    /// assert!(SolarWindow::new(set, rise).is_err());
    /// ```
    pub fn new(sunrise: DateTime<Utc>, sunset: DateTime<Utc>) -> Result<Self, SolarError> {
        if sunset <= sunrise {
            return Err(SolarError::InvertedWindow { sunrise, sunset });
        }
        Ok(Self { sunrise, sunset })
    }

    pub fn sunrise(&self) -> DateTime<Utc> {
        self.sunrise
    }

    pub fn sunset(&self) -> DateTime<Utc> {
        self.sunset
    }

    pub fn day_length(&self) -> Duration {
        self.sunset - self.sunrise
    }

    /// Whether `now` lies between sunrise and sunset, both inclusive.
    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        self.sunrise <= now && now <= self.sunset
    }
}

/// Position of the sun marker on a semicircular arc.
///
/// `x` and `y` are percentages of the drawing area, with the arc centred at
/// (50, 50) and a radius of 40; `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunPosition {
    /// Whether the sun is up; when `false` the marker should be hidden.
    pub visible: bool,
    /// Share of the daylight window elapsed, clamped to `[0, 1]`.
    pub progress: f64,
    pub x: f64,
    pub y: f64,
    /// Dawn or dusk tint rather than midday.
    pub warm: bool,
}
