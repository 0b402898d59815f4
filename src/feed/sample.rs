//! Plausible stand-in readings for when the weather source is unreachable.
//!
//! Temperature, humidity, UV and AQI follow a sine over the hour of day; the
//! remaining values are jittered with the supplied random source.

use crate::types::reading::{Reading, WindHeading};
use crate::types::snapshot::WeatherSnapshot;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::f64::consts::PI;

/// A generated reading and the AQI that goes with it.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticReading {
    pub reading: Reading,
    pub aqi: f64,
}

pub fn synthetic_reading<R: Rng + ?Sized>(hour: u32, rng: &mut R) -> SyntheticReading {
    let s = (f64::from(hour % 24) * PI / 12.0).sin();

    let reading = Reading {
        temperature: 25.0 + 10.0 * s,
        humidity: 50.0 + 30.0 * s,
        high_temperature: 32.0,
        low_temperature: 18.0,
        pressure: 1012.0 + rng.gen_range(-2.0..2.0),
        uv_index: (3.0 + 5.0 * s).round().clamp(1.0, 10.0),
        co: 0.5 + rng.gen_range(0.0..2.0),
        wind_speed: 2.0 + rng.gen_range(0.0..5.0),
        wind_direction: WindHeading::Degrees(rng.gen_range(0.0..360.0_f64).round()),
        rainfall: 0.0,
        ..Default::default()
    };

    SyntheticReading {
        reading,
        aqi: (50.0 + 100.0 * s).round().clamp(20.0, 300.0),
    }
}

/// Builds a [`WeatherSnapshot`] from [`synthetic_reading`].
pub fn synthetic_snapshot<R: Rng + ?Sized>(
    hour: u32,
    observed_at: DateTime<Utc>,
    rng: &mut R,
) -> WeatherSnapshot {
    let SyntheticReading { reading, aqi } = synthetic_reading(hour, rng);
    WeatherSnapshot::synthetic(reading, aqi, observed_at)
}
