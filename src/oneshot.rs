//! Headless mode: one activation, no terminal UI.
//!
//! Drives the same reducer the TUI uses, so the trigger goes through
//! Idle → Loading → Idle exactly as it would on screen.

use log::info;
use std::sync::Arc;

use crate::backend::{ScraperBackend, run_supervised};
use crate::core::action::{Action, Effect, update};
use crate::core::state::{App, StatusView};

/// Activates the trigger once and waits for the request to settle.
///
/// Returns the resulting status. If the trigger was not enabled the status
/// is returned untouched and no request is made.
pub async fn activate(app: &mut App, backend: Arc<dyn ScraperBackend>) -> StatusView {
    if let Effect::SpawnScrape { city } = update(app, Action::Trigger) {
        let result = run_supervised(backend, city).await;
        update(app, Action::ScrapeFinished(result));
    }
    app.status.clone()
}

/// Formats a status the way headless mode prints it.
pub fn status_line(status: &StatusView) -> String {
    match status {
        StatusView::Hidden => String::new(),
        StatusView::Success(msg) => format!("[success] {msg}"),
        StatusView::Error(msg) => format!("[error] {msg}"),
    }
}

/// Runs a single activation and prints the outcome to stdout.
///
/// Returns `true` when the backend reported success.
pub async fn run(mut app: App, backend: Arc<dyn ScraperBackend>) -> bool {
    info!(
        "Headless run against {} (backend={}, city={:?})",
        app.server_url,
        backend.name(),
        app.selected_value()
    );
    let status = activate(&mut app, backend).await;
    println!("{}", status_line(&status));
    matches!(status, StatusView::Success(_))
}
