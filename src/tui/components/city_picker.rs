//! # City Picker Component
//!
//! The selection control. Shows every configured city and highlights the
//! one that will be sent on the next activation.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CityPickerState` lives in `TuiState` (owns the ratatui `ListState`)
//! - `CityPicker` is created each frame with borrowed state
//!
//! The selected index itself belongs to the core `App`; the picker only
//! mirrors it for scrolling.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};

use crate::core::config::CityEntry;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent state for the city list.
#[derive(Default)]
pub struct CityPickerState {
    pub list_state: ListState,
}

/// Events emitted by the city picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CityPickerEvent {
    Previous,
    Next,
}

impl EventHandler for CityPickerState {
    type Event = CityPickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<CityPickerEvent> {
        match event {
            TuiEvent::CursorUp => Some(CityPickerEvent::Previous),
            TuiEvent::CursorDown => Some(CityPickerEvent::Next),
            _ => None,
        }
    }
}

/// Transient render wrapper for the city list.
pub struct CityPicker<'a> {
    state: &'a mut CityPickerState,
    cities: &'a [CityEntry],
    selected: usize,
}

impl<'a> CityPicker<'a> {
    pub fn new(state: &'a mut CityPickerState, cities: &'a [CityEntry], selected: usize) -> Self {
        Self {
            state,
            cities,
            selected,
        }
    }
}

impl Component for CityPicker<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" City ")
            .title_bottom(Line::from(" ↑↓ Select ").centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = self
            .cities
            .iter()
            .enumerate()
            .map(|(i, city)| {
                let style = if i == self.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::styled(city.display_label(), style))
            })
            .collect();

        let selected = (!self.cities.is_empty()).then_some(self.selected);
        self.state.list_state.select(selected);

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
