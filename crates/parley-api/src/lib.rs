//! HTTP client for the parley backend
//!
//! The backend is an external collaborator consumed over plain HTTP/JSON.
//! This crate owns the wire types, the [`ApiClient`] that speaks the
//! contract, and the error taxonomy surfaced to the terminal client.
//!
//! The backend base URL is explicit configuration passed into
//! [`ApiClient::new`]; nothing in this crate reads ambient process state.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{LoginRequest, LoginResponse, Session, User};
