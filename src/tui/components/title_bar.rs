//! # TitleBar Component
//!
//! Top line of the screen: app name, backend address, and when the last
//! activation completed.
//!
//! Purely presentational. It receives all data as props and has no
//! internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.server_url.clone(), app.last_completed);
//! title_bar.render(frame, area);
//! ```
//!
//! The text changes based on state:
//!
//! 1. **After a run**: `"Scout (server: http://127.0.0.1:5000) | Last run: 14:02:11"`
//! 2. **Default**: `"Scout (server: http://127.0.0.1:5000)"`

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct TitleBar {
    /// Backend base URL
    pub server_url: String,
    /// Local time the last request settled, if any
    pub last_completed: Option<DateTime<Local>>,
}

impl TitleBar {
    pub fn new(server_url: String, last_completed: Option<DateTime<Local>>) -> Self {
        Self {
            server_url,
            last_completed,
        }
    }

    fn text(&self) -> String {
        match self.last_completed {
            Some(at) => format!(
                "Scout (server: {}) | Last run: {}",
                self.server_url,
                at.format("%H:%M:%S")
            ),
            None => format!("Scout (server: {})", self.server_url),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}
