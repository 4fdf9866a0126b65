//! # Scraper Backend
//!
//! The outbound side of the app: one `POST /run-scraper` call per activation.
//! What the backend does with the request (the scraping itself) is not our
//! concern. We only care about the envelope that comes back.

pub mod client;
pub mod types;

pub use client::{HttpBackend, ScraperBackend, run_supervised};
pub use types::{BackendError, ScrapeReply, ScrapeRequest, SUCCESS_MARKER};
