use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// The only `status` value the backend uses to signal success.
pub const SUCCESS_MARKER: &str = "success";

/// Request body for `POST /run-scraper`.
///
/// Serializes to exactly `{"city": "<value>"}`. The value is whatever the
/// selection control held at activation time; it is never validated here.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRequest {
    pub city: String,
}

impl ScrapeRequest {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }
}

/// Response envelope returned by the backend.
///
/// The shape is a contract we assume, not one we enforce: any JSON value
/// other than `null` is accepted, and fields that are missing or not
/// strings simply read as `None`. `http_status` comes from the HTTP layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeReply {
    pub http_status: u16,
    pub status: Option<String>,
    pub message: Option<String>,
    /// Raw scraper output, if the backend chose to include it.
    pub details: Option<String>,
}

impl ScrapeReply {
    /// Reads an envelope out of a raw response body.
    ///
    /// Only a body that is not JSON at all, or is JSON `null`, is an error.
    pub fn from_body(http_status: u16, body: &[u8]) -> Result<Self, BackendError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| BackendError::Parse(e.to_string()))?;
        if value.is_null() {
            return Err(BackendError::Parse("response body is null".to_string()));
        }

        let field = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_string);
        Ok(Self {
            http_status,
            status: field("status"),
            message: field("message"),
            details: field("details"),
        })
    }

    /// A reply only counts as success when the HTTP layer agrees (2xx)
    /// and the body carries the success marker.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.http_status) && self.status.as_deref() == Some(SUCCESS_MARKER)
    }
}

/// Failures where no usable reply was obtained.
///
/// All variants are shown to the user the same way ("cannot connect");
/// the distinction only matters for the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Connection refused, DNS failure, reset mid-body, etc.
    Network(String),
    /// The body arrived but was not JSON, or was JSON `null`.
    Parse(String),
    /// The request task panicked or was aborted before it reported back.
    Task(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Network(msg) => write!(f, "network error: {msg}"),
            BackendError::Parse(msg) => write!(f, "parse error: {msg}"),
            BackendError::Task(msg) => write!(f, "request task failed: {msg}"),
        }
    }
}

impl std::error::Error for BackendError {}
