//! # TriggerButton Component
//!
//! The trigger, its label, and the busy indicator in one bordered box.
//!
//! | state   | label                   | spinner | border   |
//! |---------|-------------------------|---------|----------|
//! | Idle    | `Fetch / Update Events` | hidden  | cyan     |
//! | Loading | `Processing...`         | shown   | dim gray |
//!
//! The button never decides whether it is enabled. It renders what the
//! core `TriggerState` says.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::state::TriggerState;
use crate::tui::component::Component;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct TriggerButton {
    pub trigger: TriggerState,
    /// Animation tick, only used while busy
    pub spinner_frame: usize,
}

impl TriggerButton {
    pub fn new(trigger: TriggerState, spinner_frame: usize) -> Self {
        Self {
            trigger,
            spinner_frame,
        }
    }

    fn content(&self) -> Line<'static> {
        let label = self.trigger.label();
        if self.trigger.busy() {
            let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            Line::from(vec![
                Span::styled(spinner, Style::default().fg(Color::Yellow)),
                Span::raw(" "),
                Span::raw(label),
            ])
        } else {
            Line::from(Span::styled(label, Style::default().add_modifier(Modifier::BOLD)))
        }
    }
}

impl Component for TriggerButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.trigger.is_enabled() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };

        let hint = if self.trigger.is_enabled() {
            " Enter "
        } else {
            ""
        };

        let paragraph = Paragraph::new(self.content())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title_bottom(Line::from(hint).centered()),
            );
        frame.render_widget(paragraph, area);
    }
}
