//! The read-only request descriptor the gate evaluates.

use std::collections::HashMap;

/// A snapshot of the parts of an inbound request the gate inspects.
///
/// This is a plain value type: the gate never mutates it, and its lifetime is
/// exactly one evaluation. The hosting runtime builds one per request from
/// whatever platform request object it holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteRequest {
    /// Normalized URL path, starting with `/`.
    pub path: String,
    /// Raw query string, without the leading `?` (empty when absent).
    pub query: String,
    /// Request cookies by name.
    pub cookies: HashMap<String, String>,
}

impl RouteRequest {
    /// Create a descriptor for a bare path with no query and no cookies.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Set the query string. A leading `?` is tolerated and stripped.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.query = match query.strip_prefix('?') {
            Some(rest) => rest.to_string(),
            None => query,
        };
        self
    }

    /// Add a cookie.
    #[must_use]
    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }
}
