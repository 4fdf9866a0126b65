//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard/mouse events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.
//!
//! ## Request lifecycle
//!
//! `update()` returns `Effect::SpawnScrape` on activation. The loop spawns
//! the request on the tokio runtime and keeps drawing; the task reports back
//! through an `mpsc` channel with `Action::ScrapeFinished`, which is the only
//! way the trigger leaves `Loading`.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use ratatui::layout::Rect;
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::backend::{ScraperBackend, run_supervised};
use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{CityPickerEvent, CityPickerState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub city_picker: CityPickerState,
    /// Where the trigger button was last drawn
    pub button_area: Option<Rect>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            city_picker: CityPickerState::default(),
            button_area: None,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Restores the terminal however `run` exits, including early `?` returns.
struct TerminalModeGuard {
    mouse_captured: bool,
    restore: fn(),
}

impl TerminalModeGuard {
    fn new() -> Self {
        let mouse_captured = match execute!(stdout(), EnableMouseCapture) {
            Ok(()) => {
                info!("Terminal modes enabled (mouse)");
                true
            }
            Err(e) => {
                warn!("Failed to enable mouse capture: {}", e);
                false
            }
        };
        Self {
            mouse_captured,
            restore: ratatui::restore,
        }
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        if self.mouse_captured {
            let _ = execute!(stdout(), DisableMouseCapture);
        }
        (self.restore)();
    }
}

pub fn run(mut app: App, backend: Arc<dyn ScraperBackend>) -> std::io::Result<()> {
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.trigger.busy();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Drain all pending events before the next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = match event {
                TuiEvent::Resize => continue,
                TuiEvent::ForceQuit | TuiEvent::Quit => Action::Quit,
                TuiEvent::Activate => Action::Trigger,
                TuiEvent::MouseClick(column, row) => {
                    if !ui::hit_test_button(column, row, tui.button_area) {
                        continue;
                    }
                    Action::Trigger
                }
                TuiEvent::CursorUp | TuiEvent::CursorDown => {
                    match tui.city_picker.handle_event(&event) {
                        Some(CityPickerEvent::Previous) => Action::SelectPrev,
                        Some(CityPickerEvent::Next) => Action::SelectNext,
                        None => continue,
                    }
                }
            };

            match update(&mut app, action) {
                Effect::Quit => should_quit = true,
                Effect::SpawnScrape { city } => {
                    spawn_scrape(backend.clone(), city, tx.clone());
                }
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(&mut app, action) == Effect::Quit {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    Ok(())
}

/// Runs the request in the background and reports the result as an action.
fn spawn_scrape(backend: Arc<dyn ScraperBackend>, city: String, tx: mpsc::Sender<Action>) {
    info!("Spawning scrape request via {} (city={:?})", backend.name(), city);
    tokio::spawn(async move {
        let result = run_supervised(backend, city).await;
        if tx.send(Action::ScrapeFinished(result)).is_err() {
            warn!("Failed to send ScrapeFinished: receiver dropped");
        }
    });
}
