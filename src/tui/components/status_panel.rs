//! # StatusPanel Component
//!
//! The status container + message. Renders nothing at all while the core
//! status is `Hidden`; otherwise a bordered box tagged success or error.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::core::state::StatusView;
use crate::tui::component::Component;

pub struct StatusPanel {
    pub status: StatusView,
}

impl StatusPanel {
    pub fn new(status: StatusView) -> Self {
        Self { status }
    }
}

impl Component for StatusPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (title, color, message) = match &self.status {
            StatusView::Hidden => return,
            StatusView::Success(msg) => (" Success ", Color::Green, msg),
            StatusView::Error(msg) => (" Error ", Color::Red, msg),
        };

        let paragraph = Paragraph::new(message.as_str())
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(title),
            );
        frame.render_widget(paragraph, area);
    }
}
