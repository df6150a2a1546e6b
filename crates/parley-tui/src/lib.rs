//! Terminal UI for parley
//!
//! A thin shell over the [`parley_app`] state machines that provides
//! terminal-specific I/O: crossterm events in, ratatui frames out, and an
//! effect runner that resolves the deferred network actions against the
//! [`parley_api::ApiClient`].
//!
//! This crate only handles terminal I/O and rendering; all interaction
//! logic lives in `parley-app`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod runtime;
pub mod ui;

pub use runtime::{Runtime, RuntimeError};
