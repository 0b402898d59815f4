mod config;
mod dashboard;
mod error;
mod feed;
mod metrics;
mod schedule;
mod types;

pub use dashboard::*;
pub use error::DashboardError;
pub use schedule::{DashboardSink, Scheduler};

pub use config::error::ConfigError;
pub use config::{DashboardConfig, Location, Schedule, DEFAULT_SOURCE_URL, DEFAULT_SUN_TIMES_URL};

pub use feed::error::FeedError;
pub use feed::payload::{lenient_number, parse_payload, reading_from_row, FeedSnapshot, WeatherPayload, CHART_ROWS};
pub use feed::sample::{synthetic_reading, synthetic_snapshot, SyntheticReading};
pub use feed::sun_times::{parse_sun_times, SunTimesClient};
pub use feed::weather_feed::WeatherFeed;

pub use metrics::aqi::*;
pub use metrics::bands::*;
pub use metrics::error::{SolarError, TableError};
pub use metrics::interpolate::*;
pub use metrics::lunar::*;
pub use metrics::riseset::riseset;
pub use metrics::solar::*;
pub use metrics::wind::*;

pub use types::band::*;
pub use types::compass::*;
pub use types::moon_phase::*;
pub use types::reading::*;
pub use types::snapshot::*;
pub use types::solar::*;
