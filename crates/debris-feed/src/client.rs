//! Feed client seam and the blocking NeoWs implementation.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::{debug, info, warn};

use debris_core::neo::{FeedOutcome, NeoDescriptor};

use crate::config::FeedConfig;
use crate::fallback;
use crate::parse;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    #[error("client build failed: {message}")]
    BuildClient { message: String },
    #[error("http request failed: {message}")]
    Http { message: String },
    #[error("http status {code}: {message}")]
    HttpStatus { code: u16, message: String },
    #[error("decode response failed: {message}")]
    DecodeResponse { message: String },
}

/// Anything that can produce a batch of near-earth objects.
///
/// Implementations run on a worker thread, hence `Send + Sync`.
pub trait NeoFeedClient: Send + Sync {
    fn fetch(&self) -> Result<Vec<NeoDescriptor>, FeedError>;
}

/// Blocking client for the NeoWs `feed` endpoint.
#[derive(Debug, Clone)]
pub struct NeoWsClient {
    url: String,
    api_key: String,
    start_date: String,
    end_date: String,
    client: Client,
}

impl NeoWsClient {
    pub fn from_config(config: &FeedConfig) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms.max(1)))
            .build()
            .map_err(|err| FeedError::BuildClient {
                message: err.to_string(),
            })?;

        Ok(Self {
            url: config.feed_url(),
            api_key: config.api_key.clone(),
            start_date: config.start_date.clone(),
            end_date: config.end_date.clone(),
            client,
        })
    }
}

impl NeoFeedClient for NeoWsClient {
    fn fetch(&self) -> Result<Vec<NeoDescriptor>, FeedError> {
        debug!(url = %self.url, start = %self.start_date, end = %self.end_date, "requesting NEO feed");

        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("start_date", self.start_date.as_str()),
                ("end_date", self.end_date.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .map_err(|err| FeedError::Http {
                message: err.to_string(),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let message = response.text().unwrap_or_else(|_| "<no body>".to_string());
            return Err(FeedError::HttpStatus {
                code: status.as_u16(),
                message,
            });
        }

        let body = response.text().map_err(|err| FeedError::Http {
            message: err.to_string(),
        })?;
        parse::parse_feed(&body).map_err(|err| FeedError::DecodeResponse {
            message: err.to_string(),
        })
    }
}

/// Fetch once; on any failure log it and serve the archived list.
pub fn fetch_with_fallback(client: &dyn NeoFeedClient) -> FeedOutcome {
    match client.fetch() {
        Ok(objects) => {
            info!(count = objects.len(), "NEO feed loaded");
            FeedOutcome::Live(objects)
        }
        Err(err) => {
            warn!(error = %err, "NEO feed unavailable, using archived objects");
            FeedOutcome::Fallback(fallback::archived_objects())
        }
    }
}
