//! Keyboard Input Handler
//!
//! Processes crossterm events (Key, Char, Enter) and updates `AppState`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{AppState, Focus};

/// What the event loop must do on behalf of the UI after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    None,
    StartExtraction,
}

/// Handles a single synchronous keyboard event.
pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> UiAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.should_quit = true;
        }
        KeyCode::Esc => {
            state.should_quit = true;
        }
        KeyCode::Tab => {
            state.focus = match state.focus {
                Focus::ImagePath => Focus::Prompt,
                Focus::Prompt => Focus::ImagePath,
            };
        }
        KeyCode::Enter => {
            // Ignored while an extraction is in flight or after a hard
            // failure with no new image selected.
            if state.can_generate() {
                return UiAction::StartExtraction;
            }
        }
        KeyCode::Backspace => state.backspace_focused(),
        KeyCode::Char(c) => state.push_to_focused(c),
        _ => {}
    }
    UiAction::None
}
