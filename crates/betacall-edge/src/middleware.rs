//! The gate middleware.
//!
//! This module hosts the route gate: it builds a [`RouteRequest`] descriptor
//! from the inbound request and translates the verdict into a response. It is
//! the only place that knows both the platform request type and the gate.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use betacall_auth::AuthBackend;
use betacall_gate::{RouteRequest, RouteVerdict};

use crate::error::ApiError;
use crate::state::EdgeState;

/// Evaluate the gate for one inbound request.
///
/// Paths under a configured bypass prefix (the platform matcher) skip the
/// gate entirely. Redirect verdicts answer with 307 so the method and body
/// survive the hop, matching the platform redirects the web client expects.
pub async fn route_gate<B>(
    State(state): State<Arc<EdgeState<B>>>,
    request: Request,
    next: Next,
) -> Response
where
    B: AuthBackend + 'static,
{
    let path = request.uri().path().to_string();

    if state.config.bypasses_gate(&path) {
        return next.run(request).await;
    }

    let descriptor = RouteRequest {
        path,
        query: request.uri().query().unwrap_or_default().to_string(),
        cookies: parse_cookie_header(request.headers()),
    };

    match state.gate.evaluate(&descriptor) {
        Ok(RouteVerdict::Proceed) => next.run(request).await,
        Ok(RouteVerdict::Redirect { target } | RouteVerdict::StripQuery { target }) => {
            tracing::debug!(path = %descriptor.path, target = %target, "gate redirect");
            Redirect::temporary(&target).into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "malformed request descriptor");
            ApiError::BadRequest("malformed request path".to_string()).into_response()
        }
    }
}

/// Parse the `Cookie` header(s) into a name/value map.
///
/// Malformed pairs (no `=`) are skipped; on a duplicate name the last
/// occurrence wins.
fn parse_cookie_header(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
