//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: server address and last completion time
//! - `TriggerButton`: trigger label plus busy spinner
//! - `StatusPanel`: success/error message, or nothing
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `CityPicker`: the selection control; emits previous/next events
//!
//! Components receive external data as props, never by reaching into the
//! core `App`. The loop in `tui/mod.rs` decides what each one gets.

pub mod city_picker;
pub mod status_panel;
pub mod title_bar;
pub mod trigger_button;

pub use city_picker::{CityPicker, CityPickerEvent, CityPickerState};
pub use status_panel::StatusPanel;
pub use title_bar::TitleBar;
pub use trigger_button::TriggerButton;
