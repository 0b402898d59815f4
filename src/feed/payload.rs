//! Parsing of the weather source's JSON payload into a [`Reading`].
//!
//! The source is a spreadsheet export: `data` is a list of rows, newest first,
//! each holding the columns below as numbers or strings. Cells are parsed
//! leniently; anything unreadable becomes `0` (or north for the wind
//! direction) instead of failing the whole refresh.

use crate::feed::error::FeedError;
use crate::types::reading::{Reading, WindHeading};
use log::debug;
use serde::Deserialize;
use serde_json::Value;

/// Number of rows plotted on the temperature chart.
pub const CHART_ROWS: usize = 24;

const STATUS_SUCCESS: &str = "success";

/// Column positions within one data row.
mod column {
    pub const TEMPERATURE: usize = 0;
    pub const HUMIDITY: usize = 1;
    pub const HIGH_TEMPERATURE: usize = 2;
    pub const LOW_TEMPERATURE: usize = 3;
    pub const PRESSURE: usize = 4;
    pub const UV_INDEX: usize = 5;
    pub const PM25: usize = 6;
    pub const PM10: usize = 7;
    pub const CO: usize = 8;
    pub const WIND_SPEED: usize = 9;
    pub const WIND_DIRECTION: usize = 10;
    pub const RAINFALL: usize = 11;
}

/// The response envelope as sent by the source.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherPayload {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub data: Vec<Vec<Value>>,
    #[serde(default)]
    pub message: Option<String>,
}

/// The current reading and the recent temperature history from one fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSnapshot {
    pub reading: Reading,
    /// Temperatures of up to the first [`CHART_ROWS`] rows, newest first.
    pub temperature_series: Vec<f64>,
}

impl WeatherPayload {
    /// Extracts the current reading from the first row.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Unsuccessful`] when the status is not `"success"`
    /// or there are no rows, carrying the source's message if it sent one.
    pub fn into_snapshot(self) -> Result<FeedSnapshot, FeedError> {
        if self.status != STATUS_SUCCESS || self.data.is_empty() {
            return Err(FeedError::Unsuccessful {
                message: self
                    .message
                    .unwrap_or_else(|| "No data available".to_string()),
            });
        }

        let temperature_series = self
            .data
            .iter()
            .take(CHART_ROWS)
            .map(|row| number_cell(row, column::TEMPERATURE))
            .collect();
        let reading = reading_from_row(&self.data[0]);
        debug!("Parsed reading from {} data rows: {:?}", self.data.len(), reading);

        Ok(FeedSnapshot {
            reading,
            temperature_series,
        })
    }
}

/// Parses a raw response body.
///
/// # Errors
///
/// Returns [`FeedError::JsonParse`] for bodies that are not a payload object,
/// or [`FeedError::Unsuccessful`] as described on
/// [`WeatherPayload::into_snapshot`].
pub fn parse_payload(body: &[u8]) -> Result<FeedSnapshot, FeedError> {
    serde_json::from_slice::<WeatherPayload>(body)?.into_snapshot()
}

pub fn reading_from_row(row: &[Value]) -> Reading {
    Reading {
        temperature: number_cell(row, column::TEMPERATURE),
        humidity: number_cell(row, column::HUMIDITY),
        high_temperature: number_cell(row, column::HIGH_TEMPERATURE),
        low_temperature: number_cell(row, column::LOW_TEMPERATURE),
        pressure: number_cell(row, column::PRESSURE),
        uv_index: number_cell(row, column::UV_INDEX),
        pm25: number_cell(row, column::PM25),
        pm10: number_cell(row, column::PM10),
        co: number_cell(row, column::CO),
        wind_speed: number_cell(row, column::WIND_SPEED),
        wind_direction: heading_cell(row.get(column::WIND_DIRECTION)),
        rainfall: number_cell(row, column::RAINFALL),
    }
}

fn number_cell(row: &[Value], index: usize) -> f64 {
    row.get(index).map_or(0.0, lenient_number)
}

/// Reads a cell as a number: JSON numbers as they are, strings by their
/// leading numeric prefix (`"21.4 °C"` is 21.4). Everything else, and any
/// non-finite result, is 0.
pub fn lenient_number(value: &Value) -> f64 {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => numeric_prefix(s),
        _ => None,
    };
    number.filter(|n| n.is_finite()).unwrap_or(0.0)
}

fn numeric_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let integer_end = digits_from(end);
    let mut seen_digits = integer_end > end;
    end = integer_end;

    if bytes.get(end) == Some(&b'.') {
        let fraction_end = digits_from(end + 1);
        if fraction_end > end + 1 || seen_digits {
            seen_digits |= fraction_end > end + 1;
            end = fraction_end;
        }
    }
    if !seen_digits {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_end = digits_from(exponent);
        if exponent_end > exponent {
            end = exponent_end;
        }
    }

    text[..end].parse().ok()
}

fn heading_cell(value: Option<&Value>) -> WindHeading {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => WindHeading::default(),
        Some(Value::String(s)) if s.is_empty() => WindHeading::default(),
        Some(Value::String(s)) => WindHeading::parse(s),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(degrees) if degrees != 0.0 && degrees.is_finite() => WindHeading::Degrees(degrees),
            _ => WindHeading::default(),
        },
        // arrays, objects and `true` never name a direction
        Some(other) => WindHeading::Label(other.to_string()),
    }
}
