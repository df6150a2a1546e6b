//! Request-menu view
//!
//! The choice list with cursor and selection markers, the memoized response
//! buffer underneath, and a key-hint footer. A pure projection: every
//! response shown here was computed in the update path.

use parley_app::RequestMenu;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

const HEADER_HEIGHT: u16 = 2;
const FOOTER_HEIGHT: u16 = 1;
/// Choice rows plus the list block's border.
const LIST_BORDER: u16 = 2;

/// Render the request menu.
pub fn render(frame: &mut Frame, menu: &RequestMenu, area: Rect) {
    let list_height = menu.choices().len() as u16 + LIST_BORDER;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(list_height),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    let [header_area, list_area, response_area, footer_area] = chunks.as_ref() else {
        return;
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " What information would you like to request?",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  (signed in as {})", menu.user().name),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(header, *header_area);

    let items: Vec<ListItem> = menu
        .choices()
        .iter()
        .enumerate()
        .map(|(i, choice)| {
            let cursor = if menu.cursor() == i { ">" } else { " " };
            let checked = if menu.is_selected(i) { "x" } else { " " };

            let style = if menu.cursor() == i {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(Span::styled(
                format!("{cursor} [{checked}] {choice}"),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Requests "));
    frame.render_widget(list, *list_area);

    let response = Paragraph::new(menu.response().unwrap_or_default())
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Response "));
    frame.render_widget(response, *response_area);

    let footer = Paragraph::new(" up/down: move | enter/space: toggle | q: quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, *footer_area);
}
