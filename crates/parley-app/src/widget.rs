//! Single-line text-entry widget contract.
//!
//! The widget itself is [`tui_textarea::TextArea`], an external capability.
//! This module pins down the narrow contract the sub-models rely on
//! (construction, focus/blur, value, keystroke forwarding) and keeps the
//! widget single-line by never forwarding structural keys (Enter, Tab).

use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{Input, Key, TextArea};

use crate::input::KeyInput;

/// Mask character for secret fields.
const MASK: char = '\u{2022}';

/// Build a blurred single-line widget with a titled border.
pub fn single_line(title: &str) -> TextArea<'static> {
    let mut widget = TextArea::default();
    widget.set_cursor_line_style(Style::default());
    widget.set_block(Block::default().borders(Borders::ALL).title(format!(" {title} ")));
    blur(&mut widget);
    widget
}

/// Build a blurred single-line widget that renders its value masked.
pub fn masked(title: &str) -> TextArea<'static> {
    let mut widget = single_line(title);
    widget.set_mask_char(MASK);
    widget
}

/// Give the widget the visible cursor.
pub fn focus(widget: &mut TextArea<'_>) {
    widget.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
}

/// Take the visible cursor away from the widget.
pub fn blur(widget: &mut TextArea<'_>) {
    widget.set_cursor_style(Style::default());
}

/// Current value of the widget (its single line).
pub fn value(widget: &TextArea<'_>) -> String {
    widget.lines().first().cloned().unwrap_or_default()
}

/// Forward a keystroke to the widget's own edit contract.
///
/// Structural keys (Enter, Tab, Esc, ...) belong to the sub-models and are
/// not forwarded; returns whether the widget consumed the key.
pub fn apply_key(widget: &mut TextArea<'_>, key: KeyInput) -> bool {
    let input = match key {
        KeyInput::Char(c) => Input { key: Key::Char(c), ..Input::default() },
        KeyInput::Backspace => Input { key: Key::Backspace, ..Input::default() },
        KeyInput::Delete => Input { key: Key::Delete, ..Input::default() },
        KeyInput::Left => Input { key: Key::Left, ..Input::default() },
        KeyInput::Right => Input { key: Key::Right, ..Input::default() },
        KeyInput::Home => Input { key: Key::Home, ..Input::default() },
        KeyInput::End => Input { key: Key::End, ..Input::default() },
        KeyInput::Enter
        | KeyInput::Tab
        | KeyInput::BackTab
        | KeyInput::Esc
        | KeyInput::Up
        | KeyInput::Down
        | KeyInput::CtrlC => return false,
    };
    widget.input(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_chars_become_the_value() {
        let mut widget = single_line("field");
        for c in "hello".chars() {
            apply_key(&mut widget, KeyInput::Char(c));
        }
        assert_eq!(value(&widget), "hello");
    }

    #[test]
    fn backspace_edits_at_cursor() {
        let mut widget = single_line("field");
        apply_key(&mut widget, KeyInput::Char('a'));
        apply_key(&mut widget, KeyInput::Char('b'));
        apply_key(&mut widget, KeyInput::Backspace);
        assert_eq!(value(&widget), "a");
    }

    #[test]
    fn structural_keys_are_not_forwarded() {
        let mut widget = single_line("field");
        assert!(!apply_key(&mut widget, KeyInput::Enter));
        assert!(!apply_key(&mut widget, KeyInput::Tab));
        assert_eq!(value(&widget), "");
    }

    #[test]
    fn masked_widget_still_exposes_cleartext_value() {
        let mut widget = masked("secret");
        for c in "hunter2".chars() {
            apply_key(&mut widget, KeyInput::Char(c));
        }
        // The mask applies to rendering only; submission needs the cleartext.
        assert_eq!(value(&widget), "hunter2");
        assert_eq!(widget.mask_char(), Some(MASK));
    }
}
