//! TUI Rendering
//!
//! Translates `AppState` into Ratatui `Widget`s and draws to the terminal frame.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{AppState, Focus, Status};

const HELP_TEXT: &str =
    "Tab: switch field | Enter: generate document | Esc: quit | Images: *.jpg *.jpeg *.png";

/// Main draw loop function.
pub fn draw_ui(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Image path
            Constraint::Length(3), // Prompt
            Constraint::Min(1),    // Help
            Constraint::Length(3), // Status
        ])
        .split(f.size());

    let field_style = |focus: Focus| {
        if state.focus == focus {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        }
    };

    let image_widget = Paragraph::new(state.image_path.as_str())
        .style(field_style(Focus::ImagePath))
        .block(Block::default().title("Image file").borders(Borders::ALL));
    f.render_widget(image_widget, chunks[0]);

    let prompt_widget = Paragraph::new(state.prompt.as_str())
        .style(field_style(Focus::Prompt))
        .block(Block::default().title("Prompt").borders(Borders::ALL));
    f.render_widget(prompt_widget, chunks[1]);

    let help_widget = Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help_widget, chunks[2]);

    let (status_text, status_color) = match &state.status {
        Status::Idle => ("Select an image and press Enter.".to_string(), Color::Gray),
        Status::Processing => ("Processing, please wait...".to_string(), Color::Blue),
        Status::Saved(msg) => (msg.clone(), Color::Green),
        Status::Soft(msg) => (msg.clone(), Color::Yellow),
        Status::Hard(msg) => (msg.clone(), Color::Red),
    };
    let status_widget = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .block(Block::default().title("Status").borders(Borders::ALL));
    f.render_widget(status_widget, chunks[3]);
}
