//! Input-prompt sub-model.
//!
//! A generic "collect one value" view: one widget, a caller-supplied label,
//! and a caller-supplied transform. On Enter the transform runs; failure is
//! displayed inline and the prompt stays active, success emits exactly one
//! [`AppEvent::InputCollected`] back through the orchestrator. The prompt
//! itself never decides what the value means.

use tui_textarea::TextArea;

use crate::{action::AppAction, event::AppEvent, input::KeyInput, widget};

/// Validation/transform applied to the raw widget value on submit.
pub type Transform = fn(&str) -> Result<String, String>;

/// The identity transform: accepts the raw value unchanged.
pub fn identity(raw: &str) -> Result<String, String> {
    Ok(raw.to_owned())
}

/// Single-value prompt. Constructed fresh each time it is entered and
/// discarded by the orchestrator once the value is collected.
pub struct InputPrompt {
    widget: TextArea<'static>,
    label: String,
    transform: Transform,
    error: Option<String>,
}

impl InputPrompt {
    /// Create a prompt with the widget focused.
    pub fn new(label: impl Into<String>, transform: Transform) -> Self {
        let label = label.into();
        let mut widget = widget::single_line(&label);
        widget::focus(&mut widget);
        Self { widget, label, transform, error: None }
    }

    /// Process an event and return actions.
    pub fn update(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(KeyInput::Enter) => self.submit(),
            AppEvent::Key(key) => {
                widget::apply_key(&mut self.widget, key);
                vec![AppAction::Render]
            },
            _ => vec![],
        }
    }

    fn submit(&mut self) -> Vec<AppAction> {
        match (self.transform)(&widget::value(&self.widget)) {
            Ok(value) => vec![AppAction::Dispatch(AppEvent::InputCollected { value })],
            Err(message) => {
                self.error = Some(message);
                vec![AppAction::Render]
            },
        }
    }

    /// The caller-supplied label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The entry widget, for rendering.
    pub fn widget(&self) -> &TextArea<'static> {
        &self.widget
    }

    /// Inline transform error. `None` until a submit fails.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
