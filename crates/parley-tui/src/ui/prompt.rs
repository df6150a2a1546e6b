//! Input-prompt view
//!
//! One entry widget under the caller's label, with the transform error (if
//! any) inline below.

use parley_app::InputPrompt;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

const TITLE_HEIGHT: u16 = 2;
const FIELD_HEIGHT: u16 = 3;
const MESSAGE_HEIGHT: u16 = 1;

/// Render the input prompt.
pub fn render(frame: &mut Frame, prompt: &InputPrompt, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(MESSAGE_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    let [title_area, field_area, message_area, _] = chunks.as_ref() else {
        return;
    };

    let title = Paragraph::new(format!(" Enter {}", prompt.label()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(title, *title_area);

    frame.render_widget(prompt.widget(), *field_area);

    let message = prompt.error().map_or_else(
        || Paragraph::new(" enter: submit").style(Style::default().fg(Color::DarkGray)),
        |error| Paragraph::new(format!(" {error}")).style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(message, *message_area);
}
