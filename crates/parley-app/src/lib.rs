//! Application layer for the parley terminal client
//!
//! Pure state machines, completely decoupled from I/O. Every sub-model obeys
//! the same contract: it consumes [`AppEvent`] inputs and produces
//! [`AppAction`] instructions for the runtime to execute. Network calls are
//! never performed here; they are returned as deferred actions and their
//! completions come back in as new events on the same queue.
//!
//! # Components
//!
//! - [`App`]: orchestrator owning the active [`View`] and routing events
//! - [`LoginForm`]: credential entry with tab-cycled focus and submit effect
//! - [`RequestMenu`]: selectable request list with memoized responses
//! - [`InputPrompt`]: generic single-value prompt with a caller transform

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod event;
mod input;
mod login;
mod menu;
mod prompt;
pub mod widget;

pub use action::AppAction;
pub use app::{App, View};
pub use event::AppEvent;
pub use input::KeyInput;
pub use login::LoginForm;
pub use menu::{CHOICE_ALL_USERS, CHOICE_CURRENT_USER, CHOICE_REFRESH_TOKEN, CHOICE_TOKEN, CHOICE_USER_BY_ID, RequestMenu};
pub use prompt::{InputPrompt, Transform, identity};
