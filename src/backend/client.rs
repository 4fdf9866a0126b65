//! HTTP client for the scraper-trigger endpoint.
//!
//! One call, no timeout, no retry. Once a request is on the wire it runs to
//! completion or failure.

use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use super::types::{BackendError, ScrapeReply, ScrapeRequest};

pub const RUN_SCRAPER_PATH: &str = "/run-scraper";

/// Something that can start a scrape for a city and report back.
///
/// The TUI and headless mode only talk to this trait, so tests can swap in
/// a stub without a network.
#[async_trait]
pub trait ScraperBackend: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Issue exactly one request carrying `request` as its body.
    async fn run_scraper(&self, request: &ScrapeRequest) -> Result<ScrapeReply, BackendError>;
}

/// reqwest-backed implementation talking to the real backend.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), RUN_SCRAPER_PATH)
    }
}

#[async_trait]
impl ScraperBackend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn run_scraper(&self, request: &ScrapeRequest) -> Result<ScrapeReply, BackendError> {
        let url = self.endpoint();
        info!("POST {} (city={:?})", url, request.city);

        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let http_status = response.status().as_u16();
        debug!("Backend answered HTTP {}", http_status);

        let body = response
            .bytes()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let reply = ScrapeReply::from_body(http_status, &body)?;

        if let Some(details) = &reply.details {
            debug!("Scraper details: {}", details.trim());
        }

        Ok(reply)
    }
}

/// Runs one request on its own task so that a panic inside the backend
/// still settles as an error instead of leaving the caller waiting.
pub async fn run_supervised(
    backend: Arc<dyn ScraperBackend>,
    city: String,
) -> Result<ScrapeReply, BackendError> {
    let name = backend.name().to_string();
    let handle = tokio::spawn(async move {
        let request = ScrapeRequest::new(city);
        backend.run_scraper(&request).await
    });
    match handle.await {
        Ok(result) => result,
        Err(e) => {
            debug!("{} request task did not complete: {}", name, e);
            Err(BackendError::Task(e.to_string()))
        }
    }
}
