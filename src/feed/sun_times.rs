//! Client for a sunrise-sunset.org style service.
//!
//! Requests look like `<base>?lat=..&lng=..&date=YYYY-MM-DD&formatted=0` and
//! the answer carries ISO 8601 timestamps in UTC:
//!
//! ```json
//! {"results": {"sunrise": "2024-06-01T00:53:10+00:00", "sunset": "..."}, "status": "OK"}
//! ```

use crate::config::Location;
use crate::feed::error::FeedError;
use crate::feed::weather_feed::get_body;
use crate::types::solar::SolarWindow;
use chrono::{DateTime, NaiveDate, Utc};
use log::info;
use reqwest::Client;
use serde::Deserialize;

const STATUS_OK: &str = "OK";

#[derive(Debug, Deserialize)]
struct SunTimesResponse {
    #[serde(default)]
    results: Option<SunTimesResults>,
    #[serde(default)]
    status: String,
}

#[derive(Debug, Deserialize)]
struct SunTimesResults {
    sunrise: String,
    sunset: String,
}

#[derive(Debug, Clone)]
pub struct SunTimesClient {
    client: Client,
    base_url: String,
    location: Location,
}

impl SunTimesClient {
    pub fn new(client: Client, base_url: impl Into<String>, location: Location) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            location,
        }
    }

    fn request_url(&self, date: NaiveDate) -> String {
        format!(
            "{}?lat={}&lng={}&date={}&formatted=0",
            self.base_url,
            self.location.latitude,
            self.location.longitude,
            date.format("%Y-%m-%d")
        )
    }

    /// Fetches sunrise and sunset for `date` at the configured location.
    ///
    /// # Errors
    ///
    /// Transport and status errors, [`FeedError::SunTimesStatus`] when the
    /// service doesn't answer `"OK"`, [`FeedError::TimestampParse`] for
    /// unreadable times, and [`FeedError::Solar`] if sunset isn't after
    /// sunrise (polar day or night).
    pub async fn fetch(&self, date: NaiveDate) -> Result<SolarWindow, FeedError> {
        let url = self.request_url(date);
        info!("Fetching sun times from {}", url);
        let body = get_body(&self.client, &url).await?;
        let window = parse_sun_times(&body)?;
        info!(
            "Sun times for {}: sunrise {}, sunset {}",
            date,
            window.sunrise(),
            window.sunset()
        );
        Ok(window)
    }
}

pub fn parse_sun_times(body: &[u8]) -> Result<SolarWindow, FeedError> {
    let response: SunTimesResponse = serde_json::from_slice(body)?;
    let results = match response.results {
        Some(results) if response.status == STATUS_OK => results,
        _ => {
            return Err(FeedError::SunTimesStatus {
                status: response.status,
            })
        }
    };
    let sunrise = parse_timestamp(&results.sunrise)?;
    let sunset = parse_timestamp(&results.sunset)?;
    Ok(SolarWindow::new(sunrise, sunset)?)
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, FeedError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| FeedError::TimestampParse {
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::test_server::{serve, Response};
    use crate::metrics::error::SolarError;
    use chrono::TimeZone;

    const DELHI_JUNE: &str = r#"{
        "results": {
            "sunrise": "2024-06-01T23:53:10+00:00",
            "sunset": "2024-06-02T13:48:00+00:00",
            "solar_noon": "2024-06-02T06:50:35+00:00",
            "day_length": 50090
        },
        "status": "OK"
    }"#;

    #[test]
    fn test_parse_ok_response() -> Result<(), FeedError> {
        let window = parse_sun_times(DELHI_JUNE.as_bytes())?;
        assert_eq!(
            window.sunrise(),
            Utc.with_ymd_and_hms(2024, 6, 1, 23, 53, 10).unwrap()
        );
        assert_eq!(
            window.sunset(),
            Utc.with_ymd_and_hms(2024, 6, 2, 13, 48, 0).unwrap()
        );
        Ok(())
    }

    #[test]
    fn test_parse_offset_timestamps_to_utc() -> Result<(), FeedError> {
        let body = br#"{"results":{"sunrise":"2024-06-02T05:23:10+05:30","sunset":"2024-06-02T19:18:00+05:30"},"status":"OK"}"#;
        let window = parse_sun_times(body)?;
        assert_eq!(
            window.sunrise(),
            Utc.with_ymd_and_hms(2024, 6, 1, 23, 53, 10).unwrap()
        );
        Ok(())
    }

    #[test]
    fn test_parse_failures() {
        assert!(matches!(
            parse_sun_times(br#"{"results":"","status":"INVALID_DATE"}"#),
            Err(FeedError::JsonParse(_))
        ));
        assert!(matches!(
            parse_sun_times(br#"{"status":"INVALID_REQUEST"}"#),
            Err(FeedError::SunTimesStatus { ref status }) if status == "INVALID_REQUEST"
        ));
        assert!(matches!(
            parse_sun_times(br#"{"results":{"sunrise":"5:23 AM","sunset":"7:18 PM"},"status":"OK"}"#),
            Err(FeedError::TimestampParse { ref value, .. }) if value == "5:23 AM"
        ));
        // Polar night: the service reports both times as the epoch.
        assert!(matches!(
            parse_sun_times(br#"{"results":{"sunrise":"1970-01-01T00:00:01+00:00","sunset":"1970-01-01T00:00:01+00:00"},"status":"OK"}"#),
            Err(FeedError::Solar(SolarError::InvertedWindow { .. }))
        ));
    }

    #[tokio::test]
    async fn test_fetch_sends_location_and_date() -> Result<(), FeedError> {
        let base = serve(|target| {
            if target == "/json?lat=28.5&lng=77.25&date=2024-06-02&formatted=0" {
                Response::ok(DELHI_JUNE)
            } else {
                Response::status(400, r#"{"status":"INVALID_REQUEST"}"#)
            }
        })
        .await;
        let location = Location {
            latitude: 28.5,
            longitude: 77.25,
        };
        let client = SunTimesClient::new(Client::new(), format!("{}/json", base), location);

        let date = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let window = client.fetch(date).await?;
        assert_eq!(window.day_length().num_seconds(), 50090);
        Ok(())
    }
}
