use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::Line;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CityPicker, StatusPanel, TitleBar, TriggerButton};

const BUTTON_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 4;
const HELP_TEXT: &str = "Enter/Space Fetch  ↑↓ City  Esc Quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([
        Length(1),
        Min(3),
        Length(BUTTON_HEIGHT),
        Length(STATUS_HEIGHT),
        Length(1),
    ]);
    let [title_area, picker_area, button_area, status_area, help_area] =
        layout.areas(frame.area());

    TitleBar::new(app.server_url.clone(), app.last_completed).render(frame, title_area);

    CityPicker::new(&mut tui.city_picker, &app.cities, app.selected).render(frame, picker_area);

    TriggerButton::new(app.trigger, spinner_frame).render(frame, button_area);
    // Cached for mouse hit testing
    tui.button_area = Some(button_area);

    StatusPanel::new(app.status.clone()).render(frame, status_area);

    frame.render_widget(Line::from(HELP_TEXT).centered(), help_area);
}

/// Hit test: is the screen cell at (column, row) inside the trigger button?
pub fn hit_test_button(column: u16, row: u16, button_area: Option<Rect>) -> bool {
    button_area.is_some_and(|area| area.contains(Position::new(column, row)))
}
