//! # Application State
//!
//! Everything the Action Trigger needs, in one struct. No TUI types here.
//!
//! ```text
//! App
//! ├── cities: Vec<CityEntry>     // selection control options
//! ├── selected: usize            // index into cities
//! ├── trigger: TriggerState      // Idle | Loading
//! ├── status: StatusView         // Hidden | Success(msg) | Error(msg)
//! ├── server_url: String         // shown in the title bar
//! └── last_completed: Option<DateTime<Local>>
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.

use chrono::{DateTime, Local};

use crate::core::config::{CityEntry, ResolvedConfig};

pub const IDLE_LABEL: &str = "Fetch / Update Events";
pub const LOADING_LABEL: &str = "Processing...";

/// Shown when the backend reports failure without a message.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";
/// Shown when no reply could be obtained at all.
pub const CONNECT_ERROR_MESSAGE: &str = "Failed to connect to server. Is the backend running?";

/// Whether the trigger accepts activations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerState {
    #[default]
    Idle,
    Loading,
}

impl TriggerState {
    pub fn is_enabled(self) -> bool {
        self == TriggerState::Idle
    }

    pub fn label(self) -> &'static str {
        match self {
            TriggerState::Idle => IDLE_LABEL,
            TriggerState::Loading => LOADING_LABEL,
        }
    }

    /// The busy indicator is visible only while loading.
    pub fn busy(self) -> bool {
        self == TriggerState::Loading
    }
}

/// What the status surface currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusView {
    #[default]
    Hidden,
    Success(String),
    Error(String),
}

impl StatusView {
    pub fn is_visible(&self) -> bool {
        !matches!(self, StatusView::Hidden)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            StatusView::Hidden => None,
            StatusView::Success(msg) | StatusView::Error(msg) => Some(msg),
        }
    }
}

pub struct App {
    pub cities: Vec<CityEntry>,
    pub selected: usize,
    pub trigger: TriggerState,
    pub status: StatusView,
    pub server_url: String,
    pub last_completed: Option<DateTime<Local>>,
}

impl App {
    pub fn new(cities: Vec<CityEntry>, server_url: String) -> Self {
        Self {
            cities,
            selected: 0,
            trigger: TriggerState::Idle,
            status: StatusView::Hidden,
            server_url,
            last_completed: None,
        }
    }

    /// Builds the app from resolved config, preselecting the configured city.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(config.cities.clone(), config.server_url.clone());
        app.selected = config
            .cities
            .iter()
            .position(|c| c.value == config.default_city)
            .unwrap_or(0);
        app
    }

    /// The selection value as it stands right now. Empty if there are no options.
    pub fn selected_value(&self) -> &str {
        self.cities
            .get(self.selected)
            .map(|c| c.value.as_str())
            .unwrap_or("")
    }
}
