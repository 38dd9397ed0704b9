//! Page-route fallback.
//!
//! Every page route that passes the gate resolves to the application shell;
//! the client bundle takes over rendering from there.

use axum::response::{Html, IntoResponse};

const SHELL: &str = "<!doctype html>\
<html lang=\"en\">\
<head><meta charset=\"utf-8\"><title>BetaCall</title></head>\
<body><div id=\"root\"></div></body>\
</html>";

/// Serve the application shell.
pub async fn app_shell() -> impl IntoResponse {
    Html(SHELL)
}
