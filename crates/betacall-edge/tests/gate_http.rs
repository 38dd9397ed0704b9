//! In-process HTTP tests: the gate middleware and the auth endpoints,
//! exercised over real requests against the full router.

use std::sync::Arc;

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use betacall_auth::MockAuthBackend;
use betacall_edge::{create_router, EdgeConfig, EdgeState};

fn server_with(backend: MockAuthBackend) -> TestServer {
    let state = EdgeState::new(Arc::new(backend), EdgeConfig::default());
    TestServer::new(create_router(state)).expect("router must build")
}

fn server() -> TestServer {
    server_with(MockAuthBackend::new())
}

fn session_cookie() -> HeaderValue {
    HeaderValue::from_static("accessToken=xyz")
}

// =============================================================================
// Gate middleware
// =============================================================================

#[tokio::test]
async fn sign_up_noise_query_redirects_to_clean_sign_up() {
    let response = server()
        .get("/signUp")
        .add_query_param("foo", "bar")
        .await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location").to_str().unwrap(), "/signUp");
}

#[tokio::test]
async fn sign_up_mid_social_flow_is_served() {
    let response = server()
        .get("/signUp")
        .add_query_param("socialMedia", "google")
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("id=\"root\""));
}

#[tokio::test]
async fn asset_paths_are_never_gated() {
    let response = server().get("/images/logo.png").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn verify_links_pass_without_a_session() {
    let response = server().get("/verify/abc123").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn reset_links_pass_with_a_session() {
    let response = server()
        .get("/resetPassword/tok")
        .add_header(COOKIE, session_cookie())
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn private_routes_redirect_to_sign_in_without_a_session() {
    let response = server().get("/private-route").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location").to_str().unwrap(), "/signIn");
}

#[tokio::test]
async fn public_routes_redirect_home_with_a_session() {
    let response = server()
        .get("/signUp")
        .add_header(COOKIE, session_cookie())
        .await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location").to_str().unwrap(), "/");
}

#[tokio::test]
async fn private_routes_are_served_with_a_session() {
    let response = server()
        .get("/profile")
        .add_header(COOKIE, session_cookie())
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn empty_session_cookie_counts_as_signed_out() {
    let response = server()
        .get("/profile")
        .add_header(COOKIE, HeaderValue::from_static("accessToken="))
        .await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location").to_str().unwrap(), "/signIn");
}

#[tokio::test]
async fn health_bypasses_the_gate() {
    let response = server().get("/health").await;
    response.assert_status_ok();
}

// =============================================================================
// Auth endpoints (under the /api/ bypass prefix, reachable signed out)
// =============================================================================

#[tokio::test]
async fn sign_in_sets_session_cookies_and_returns_the_user() {
    let server = server_with(MockAuthBackend::new().with_user("ada@example.com", "Secur3!pw"));

    let response = server
        .post("/api/auth/signIn")
        .json(&json!({ "email": "ada@example.com", "password": "Secur3!pw" }))
        .await;

    response.assert_status_ok();

    let cookies: Vec<String> = response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    assert_eq!(cookies.len(), 2);
    assert!(cookies[0].starts_with("accessToken=mock-access-"));
    assert!(cookies[1].starts_with("refreshToken=mock-refresh-"));
    assert!(cookies.iter().all(|c| c.contains("SameSite=Strict")));

    let user: Value = response.json();
    assert_eq!(user["email"], "ada@example.com");
}

#[tokio::test]
async fn sign_in_rejects_bad_credentials() {
    let server = server_with(MockAuthBackend::new().with_user("ada@example.com", "Secur3!pw"));

    let response = server
        .post("/api/auth/signIn")
        .json(&json!({ "email": "ada@example.com", "password": "wrong" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "unauthorized");
}

#[tokio::test]
async fn sign_in_surfaces_unverified_accounts() {
    let server =
        server_with(MockAuthBackend::new().with_unverified_user("ada@example.com", "Secur3!pw"));

    let response = server
        .post("/api/auth/signIn")
        .json(&json!({ "email": "ada@example.com", "password": "Secur3!pw" }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "verification_required");
}

#[tokio::test]
async fn social_sign_in_hands_unregistered_accounts_to_sign_up() {
    let response = server()
        .post("/api/auth/social")
        .json(&json!({
            "provider": "google",
            "email": "new@example.com",
            "appwriteId": "aw-9",
            "name": "New User"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "resumeSignUp");

    let redirect = body["redirectTo"].as_str().unwrap();
    assert!(redirect.starts_with("/signUp?socialMedia=google"));
    assert!(redirect.contains("firstName=New"));
    assert!(redirect.contains("lastName=User"));
}

#[tokio::test]
async fn social_sign_in_signs_in_known_accounts() {
    let server = server_with(MockAuthBackend::new().with_social_user("ada@example.com", "aw-1"));

    let response = server
        .post("/api/auth/social")
        .json(&json!({
            "provider": "facebook",
            "email": "ada@example.com",
            "appwriteId": "aw-1",
            "name": "Ada Lovelace"
        }))
        .await;

    response.assert_status_ok();
    let user: Value = response.json();
    assert_eq!(user["email"], "ada@example.com");
}

#[tokio::test]
async fn sign_out_expires_both_cookies() {
    let response = server().post("/api/auth/signOut").await;

    response.assert_status_ok();
    let cookies: Vec<String> = response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    assert_eq!(cookies.len(), 2);
    assert!(cookies.iter().all(|c| c.contains("Max-Age=0")));
}

// =============================================================================
// Password recovery and verification
// =============================================================================

#[tokio::test]
async fn recover_accepts_any_address() {
    let response = server()
        .post("/api/password/recover")
        .json(&json!({ "email": "whoever@example.com" }))
        .await;

    response.assert_status(StatusCode::ACCEPTED);
}

#[tokio::test]
async fn reset_enforces_the_password_policy() {
    let server = server_with(MockAuthBackend::new().with_reset_token("tok-1"));

    let response = server
        .post("/api/password/reset/tok-1")
        .json(&json!({ "newPassword": "weak" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn reset_happy_path() {
    let server = server_with(MockAuthBackend::new().with_reset_token("tok-1"));

    let response = server
        .post("/api/password/reset/tok-1")
        .json(&json!({ "newPassword": "Secur3!pw" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "passwordReset");
}

#[tokio::test]
async fn reset_rejects_unknown_tokens() {
    let response = server()
        .post("/api/password/reset/tok-unknown")
        .json(&json!({ "newPassword": "Secur3!pw" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn verify_consumes_a_valid_token() {
    let server = server_with(MockAuthBackend::new().with_verify_token("vt-1"));

    let response = server.post("/api/verify/vt-1").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "verified");
}

#[tokio::test]
async fn verify_rejects_unknown_tokens() {
    let response = server().post("/api/verify/vt-unknown").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}
