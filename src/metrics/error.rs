use chrono::{DateTime, Utc};
use thiserror::Error;

/// A breakpoint or band table that cannot be used for lookups.
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("Breakpoint table needs at least 2 breakpoints, got {0}")]
    TooFewBreakpoints(usize),

    #[error("Index table must hold one entry more than the breakpoints ({breakpoints}), got {indices}")]
    LengthMismatch { breakpoints: usize, indices: usize },

    #[error("{table} value at position {position} is not finite")]
    NonFinite { table: &'static str, position: usize },

    #[error("{table} values must be strictly increasing, position {position} is not")]
    NotStrictlyIncreasing { table: &'static str, position: usize },

    #[error("Band table needs exactly one colour more than thresholds ({thresholds}), got {colors}")]
    BandCountMismatch { thresholds: usize, colors: usize },
}

/// An invalid sunrise/sunset pair.
#[derive(Debug, Error, PartialEq)]
pub enum SolarError {
    #[error("Sunset {sunset} is not after sunrise {sunrise}")]
    InvertedWindow {
        sunrise: DateTime<Utc>,
        sunset: DateTime<Utc>,
    },

    #[error("The sun does not rise or set at latitude {latitude} on {date}")]
    NoRiseOrSet {
        latitude: f64,
        date: chrono::NaiveDate,
    },
}
