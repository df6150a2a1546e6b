//! UI rendering
//!
//! Rendering functions that project App state into terminal output using
//! ratatui widgets. All functions are pure: state in, widget tree out.
//! Only the active view is drawn; inactive sub-models stay alive in memory
//! but are never rendered.

mod login;
mod menu;
mod prompt;

use parley_app::{App, View};
use ratatui::Frame;

/// Render the active view.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match app.view() {
        View::Login => login::render(frame, app.login(), area),
        View::RequestMenu => {
            if let Some(menu) = app.menu() {
                menu::render(frame, menu, area);
            }
        },
        View::InputPrompt => {
            if let Some(prompt) = app.prompt() {
                prompt::render(frame, prompt, area);
            }
        },
    }
}
