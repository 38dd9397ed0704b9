//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware,
//! including the gate.

use std::sync::Arc;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use betacall_auth::AuthBackend;

use crate::handlers::{auth, health, pages, password};
use crate::middleware::route_gate;
use crate::state::EdgeState;

/// Create the edge router with all routes and middleware.
///
/// # Routes
///
/// ## Ungated (under gate-bypass prefixes)
/// - `GET  /health` - Health check
/// - `POST /api/auth/signIn` - Email/password sign-in
/// - `POST /api/auth/social` - Identity-provider sign-in
/// - `POST /api/auth/signOut` - Expire session cookies
/// - `POST /api/password/recover` - Request a reset email
/// - `POST /api/password/reset/{token}` - Reset under an emailed token
/// - `POST /api/verify/{token}` - Consume a verification token
///
/// ## Gated
/// - Everything else resolves to the application shell after the gate
///   passes it.
pub fn create_router<B>(state: EdgeState<B>) -> Router
where
    B: AuthBackend + 'static,
{
    // Extract config values before moving state
    let cors_origins = state.config.cors_origins.clone();
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout = state.config.request_timeout();

    // Build CORS layer
    let cors = build_cors_layer(&cors_origins);

    // Build the router
    let state = Arc::new(state);

    Router::new()
        // Health (ungated)
        .route("/health", get(health::health))
        // Auth
        .route("/api/auth/signIn", post(auth::sign_in::<B>))
        .route("/api/auth/social", post(auth::social_sign_in::<B>))
        .route("/api/auth/signOut", post(auth::sign_out::<B>))
        // Password recovery
        .route("/api/password/recover", post(password::recover::<B>))
        .route("/api/password/reset/{token}", post(password::reset::<B>))
        // Email verification
        .route("/api/verify/{token}", post(auth::verify_email::<B>))
        // Page routes
        .fallback(pages::app_shell)
        // Middleware; the gate is outermost so it sees every request first.
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            route_gate::<B>,
        ))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // For specific origins, parse them
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
