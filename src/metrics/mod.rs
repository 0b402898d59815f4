pub mod aqi;
pub mod bands;
pub mod error;
pub mod interpolate;
pub mod lunar;
pub mod riseset;
pub mod solar;
pub mod wind;
