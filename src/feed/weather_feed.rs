use crate::feed::error::FeedError;
use crate::feed::payload::{parse_payload, FeedSnapshot};
use log::{info, warn};
use reqwest::Client;

/// GETs `url` and returns the body of a 2xx response.
pub(crate) async fn get_body(client: &Client, url: &str) -> Result<Vec<u8>, FeedError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FeedError::NetworkRequest(url.to_string(), e))?;

    let response = match response.error_for_status() {
        Ok(resp) => resp,
        Err(e) => {
            warn!("HTTP error for {}: {:?}", url, e);
            return Err(if let Some(status) = e.status() {
                FeedError::HttpStatus {
                    url: url.to_string(),
                    status,
                    source: e,
                }
            } else {
                FeedError::NetworkRequest(url.to_string(), e)
            });
        }
    };

    let body = response
        .bytes()
        .await
        .map_err(|e| FeedError::ResponseBody(url.to_string(), e))?;
    Ok(body.to_vec())
}

/// Client for the spreadsheet-backed weather source.
#[derive(Debug, Clone)]
pub struct WeatherFeed {
    client: Client,
    url: String,
}

impl WeatherFeed {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches the latest reading and temperature history.
    ///
    /// # Errors
    ///
    /// Any transport failure, non-2xx status, malformed body, or a payload
    /// that reports failure. See [`FeedError`].
    pub async fn fetch(&self) -> Result<FeedSnapshot, FeedError> {
        info!("Fetching weather data from {}", self.url);
        let body = get_body(&self.client, &self.url).await?;
        let snapshot = parse_payload(&body)?;
        info!(
            "Received weather data ({} bytes, {} chart points)",
            body.len(),
            snapshot.temperature_series.len()
        );
        Ok(snapshot)
    }
}
