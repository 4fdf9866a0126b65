//! # Actions
//!
//! Everything that can happen in Scout becomes an `Action`.
//! User presses Enter? That's `Action::Trigger`.
//! Backend answers (or doesn't)? That's `Action::ScrapeFinished(result)`.
//!
//! `update()` mutates the state and returns an `Effect` describing the I/O
//! the caller should perform. No I/O happens here.
//!
//! ```text
//! Idle ──Trigger──▶ Loading ──ScrapeFinished──▶ Idle
//!                      │
//!                      └──Trigger──▶ (ignored)
//! ```

use chrono::Local;
use log::{error, info, warn};

use crate::backend::{BackendError, ScrapeReply};
use crate::core::state::{
    App, CONNECT_ERROR_MESSAGE, StatusView, TriggerState, UNKNOWN_ERROR_MESSAGE,
};

#[derive(Debug)]
pub enum Action {
    /// User activated the trigger.
    Trigger,
    /// The single in-flight request settled.
    ScrapeFinished(Result<ScrapeReply, BackendError>),
    SelectNext,
    SelectPrev,
    Quit,
}

/// I/O the event loop must perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start the request. `city` is the selection value at activation time.
    SpawnScrape { city: String },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Trigger => {
            if !app.trigger.is_enabled() {
                warn!("Trigger ignored: request already in flight");
                return Effect::None;
            }
            app.trigger = TriggerState::Loading;
            app.status = StatusView::Hidden;
            let city = app.selected_value().to_string();
            info!("Trigger activated (city={:?})", city);
            Effect::SpawnScrape { city }
        }
        Action::ScrapeFinished(result) => {
            app.status = interpret(result);
            app.trigger = TriggerState::Idle;
            app.last_completed = Some(Local::now());
            Effect::None
        }
        Action::SelectNext => {
            if !app.cities.is_empty() {
                app.selected = (app.selected + 1) % app.cities.len();
            }
            Effect::None
        }
        Action::SelectPrev => {
            if !app.cities.is_empty() {
                app.selected = app
                    .selected
                    .checked_sub(1)
                    .unwrap_or(app.cities.len() - 1);
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Maps a settled request onto what the status surface should show.
fn interpret(result: Result<ScrapeReply, BackendError>) -> StatusView {
    match result {
        Ok(reply) if reply.is_success() => {
            info!("Scrape succeeded (HTTP {})", reply.http_status);
            StatusView::Success(reply.message.unwrap_or_default())
        }
        Ok(reply) => {
            info!(
                "Scrape failed (HTTP {}, status={:?})",
                reply.http_status, reply.status
            );
            let message = reply
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());
            StatusView::Error(message)
        }
        Err(e) => {
            error!("Network Error: {}", e);
            StatusView::Error(CONNECT_ERROR_MESSAGE.to_string())
        }
    }
}
