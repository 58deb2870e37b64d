//! TUI (Terminal User Interface) logic for caderno.
//!
//! Exposes ratatui elements and the state required to run `caderno-tui`.

pub mod app;
pub mod input;
pub mod render;

pub use app::{AppState, Focus, Status};
pub use input::{handle_key_event, UiAction};
pub use render::draw_ui;
