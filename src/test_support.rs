//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, Once};
use std::thread::{self, ThreadId};

use crate::backend::{BackendError, ScrapeReply, ScrapeRequest, ScraperBackend};
use crate::core::config::{CityEntry, DEFAULT_CITIES};
use crate::core::state::App;

/// A backend that replays a canned result and records every request.
pub struct StubBackend {
    result: Result<ScrapeReply, BackendError>,
    pub requests: Mutex<Vec<ScrapeRequest>>,
}

impl StubBackend {
    pub fn new(result: Result<ScrapeReply, BackendError>) -> Self {
        Self {
            result,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ScraperBackend for StubBackend {
    fn name(&self) -> &str {
        "stub"
    }

    async fn run_scraper(&self, request: &ScrapeRequest) -> Result<ScrapeReply, BackendError> {
        self.requests.lock().unwrap().push(request.clone());
        self.result.clone()
    }
}

/// A backend whose request task panics before it can answer.
pub struct PanickingBackend;

#[async_trait]
impl ScraperBackend for PanickingBackend {
    fn name(&self) -> &str {
        "panicking"
    }

    async fn run_scraper(&self, _request: &ScrapeRequest) -> Result<ScrapeReply, BackendError> {
        panic!("backend blew up");
    }
}

/// Process-wide logger that keeps every record, tagged with the thread
/// that emitted it so parallel tests don't see each other's output.
struct CaptureLogger;

static CAPTURED: Mutex<Vec<(ThreadId, Level, String)>> = Mutex::new(Vec::new());
static CAPTURE_INIT: Once = Once::new();
static LOGGER: CaptureLogger = CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut captured) = CAPTURED.lock() {
            captured.push((thread::current().id(), record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

/// Installs the capturing logger (once) and drops anything this thread
/// logged so far.
pub fn start_log_capture() {
    CAPTURE_INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });
    let me = thread::current().id();
    CAPTURED.lock().unwrap().retain(|(id, _, _)| *id != me);
}

/// Messages this thread logged at `level` since `start_log_capture`.
pub fn captured_logs(level: Level) -> Vec<String> {
    let me = thread::current().id();
    CAPTURED
        .lock()
        .unwrap()
        .iter()
        .filter(|(id, lvl, _)| *id == me && *lvl == level)
        .map(|(_, _, msg)| msg.clone())
        .collect()
}

/// Creates a test App with the built-in city list.
pub fn test_app() -> App {
    let cities = DEFAULT_CITIES.iter().map(|c| CityEntry::new(*c)).collect();
    App::new(cities, "http://test.invalid".to_string())
}
