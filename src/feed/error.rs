use crate::metrics::error::SolarError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {0}")]
    ResponseBody(String, #[source] reqwest::Error),

    #[error("Failed to parse JSON data")]
    JsonParse(#[from] serde_json::Error),

    // The source answered, but without usable data
    #[error("Weather source reported failure: {message}")]
    Unsuccessful { message: String },

    #[error("Sunrise-sunset service returned status '{status}'")]
    SunTimesStatus { status: String },

    #[error("Failed to parse timestamp '{value}' from sunrise-sunset service")]
    TimestampParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error(transparent)]
    Solar(#[from] SolarError),
}
