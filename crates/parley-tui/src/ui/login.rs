//! Login view
//!
//! Two stacked entry widgets with an inline error line. The focused widget
//! carries the visible cursor; the password widget renders masked.

use parley_app::LoginForm;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

const TITLE_HEIGHT: u16 = 2;
const FIELD_HEIGHT: u16 = 3;
const MESSAGE_HEIGHT: u16 = 1;

/// Render the login form.
pub fn render(frame: &mut Frame, form: &LoginForm, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(MESSAGE_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    let [title_area, email_area, password_area, message_area, _] = chunks.as_ref() else {
        return;
    };

    let title = Paragraph::new(" Sign in to parley")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(title, *title_area);

    frame.render_widget(form.email(), *email_area);
    frame.render_widget(form.password(), *password_area);

    let message = form.error().map_or_else(
        || {
            Paragraph::new(" tab: switch field | enter: submit | esc: quit")
                .style(Style::default().fg(Color::DarkGray))
        },
        |error| Paragraph::new(format!(" {error}")).style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(message, *message_area);
}
