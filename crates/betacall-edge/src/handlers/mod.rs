//! HTTP request handlers.
//!
//! This module contains all the endpoint handlers for the edge API.

pub mod auth;
pub mod health;
pub mod pages;
pub mod password;

use serde::Serialize;

/// Minimal acknowledgement body for operations with nothing to return.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// What happened, as a short machine-readable word.
    pub status: &'static str,
}
