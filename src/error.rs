use crate::config::error::ConfigError;
use crate::feed::error::FeedError;
use crate::metrics::error::{SolarError, TableError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Solar(#[from] SolarError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}
