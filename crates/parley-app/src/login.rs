//! Login sub-model.
//!
//! Two widgets (email, masked password) with tab-cycled focus. Submission is
//! gated on focus position: Enter while the password widget is focused
//! returns a deferred [`AppAction::SubmitLogin`]; field content is never part
//! of the gate. Failures come back as [`AppEvent::LoginFailed`] and are shown
//! inline; the form stays put and never retries on its own.

use tui_textarea::TextArea;

use crate::{action::AppAction, event::AppEvent, input::KeyInput, widget};

/// Number of focusable fields.
const FIELDS: usize = 2;
/// Focus index of the email widget.
const FIELD_EMAIL: usize = 0;
/// Focus index of the password widget, the submitting field.
const FIELD_PASSWORD: usize = 1;

/// Credential entry form.
///
/// Abandoned in place (not destroyed) once login succeeds; the typed
/// credentials are only superseded by a later attempt.
pub struct LoginForm {
    email: TextArea<'static>,
    password: TextArea<'static>,
    focus: usize,
    error: Option<String>,
}

impl LoginForm {
    /// Create the form with the email widget focused.
    pub fn new() -> Self {
        let mut email = widget::single_line("Email");
        widget::focus(&mut email);
        Self {
            email,
            password: widget::masked("Password"),
            focus: FIELD_EMAIL,
            error: None,
        }
    }

    /// Process an event and return actions.
    pub fn update(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::LoginFailed { message } => {
                self.error = Some(message);
                vec![AppAction::Render]
            },
            _ => vec![],
        }
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Esc => vec![AppAction::Quit],
            KeyInput::Tab | KeyInput::Down => self.cycle_focus(1),
            KeyInput::BackTab | KeyInput::Up => self.cycle_focus(FIELDS - 1),
            KeyInput::Enter => {
                if self.focus == FIELD_PASSWORD {
                    self.submit()
                } else {
                    self.cycle_focus(1)
                }
            },
            other => {
                widget::apply_key(self.focused_widget(), other);
                vec![AppAction::Render]
            },
        }
    }

    /// Issue the deferred login call. Not guarded against a still-pending
    /// earlier submission; the later completion wins.
    fn submit(&mut self) -> Vec<AppAction> {
        self.error = None;
        vec![
            AppAction::SubmitLogin {
                email: widget::value(&self.email),
                password: widget::value(&self.password),
            },
            AppAction::Render,
        ]
    }

    /// Move focus by `step` with wrap-around and reassign the cursor.
    fn cycle_focus(&mut self, step: usize) -> Vec<AppAction> {
        self.focus = (self.focus + step) % FIELDS;
        if self.focus == FIELD_EMAIL {
            widget::focus(&mut self.email);
            widget::blur(&mut self.password);
        } else {
            widget::blur(&mut self.email);
            widget::focus(&mut self.password);
        }
        vec![AppAction::Render]
    }

    fn focused_widget(&mut self) -> &mut TextArea<'static> {
        if self.focus == FIELD_EMAIL { &mut self.email } else { &mut self.password }
    }

    /// Email widget, for rendering.
    pub fn email(&self) -> &TextArea<'static> {
        &self.email
    }

    /// Password widget, for rendering. Masked; render never sees cleartext.
    pub fn password(&self) -> &TextArea<'static> {
        &self.password
    }

    /// Inline error from the last failed submission. `None` if no error.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Index of the focused field (0 = email, 1 = password).
    pub fn focus(&self) -> usize {
        self.focus
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}
