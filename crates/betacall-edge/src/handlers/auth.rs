//! Sign-in, sign-out, and verification endpoints.
//!
//! A successful sign-in sets the session cookies the gate later reads; the
//! edge never stores the session anywhere else.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use betacall_auth::{AuthBackend, AuthError, SignInRequest, SignInResponse, SocialSignInRequest};
use betacall_core::{SocialHandoff, SocialProvider, UserProfile};

use crate::error::ApiError;
use crate::state::EdgeState;

use super::StatusResponse;

/// Cookie holding the refresh token, set alongside the session cookie.
const REFRESH_COOKIE: &str = "refreshToken";

// =============================================================================
// Request/Response Types
// =============================================================================

/// Request body for email/password sign-in.
#[derive(Debug, Deserialize)]
pub struct SignInBody {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Request body for identity-provider sign-in.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialSignInBody {
    /// Which provider authenticated the user.
    pub provider: SocialProvider,
    /// Email address reported by the provider.
    pub email: String,
    /// The provider-side account ID.
    pub appwrite_id: String,
    /// Display name reported by the provider ("First Last").
    pub name: String,
}

/// Outcome of a social sign-in.
#[derive(Debug, Serialize)]
#[serde(tag = "status")]
pub enum SocialOutcome {
    /// The account exists; the user is signed in.
    #[serde(rename = "signedIn")]
    SignedIn {
        /// The signed-in user's profile.
        user: UserProfile,
    },
    /// No matching account; the client should resume sign-up at the returned
    /// URL with the provider profile pre-filled.
    #[serde(rename = "resumeSignUp")]
    ResumeSignUp {
        /// The sign-up resume deep link.
        #[serde(rename = "redirectTo")]
        redirect_to: String,
    },
}

// =============================================================================
// Handlers
// =============================================================================

/// Sign in with email and password.
///
/// On success the response carries `Set-Cookie` headers for the session and
/// refresh tokens, plus the user profile as JSON.
///
/// # Errors
///
/// 401 on rejected credentials, 403 when the account's email is unverified.
pub async fn sign_in<B>(
    State(state): State<Arc<EdgeState<B>>>,
    Json(body): Json<SignInBody>,
) -> Result<Response, ApiError>
where
    B: AuthBackend,
{
    let response = state
        .backend
        .sign_in(SignInRequest {
            email: body.email,
            password: body.password,
        })
        .await?;

    tracing::info!(user = %response.user.id, "user signed in");
    Ok(signed_in_response(&state, response))
}

/// Sign in with an identity-provider profile.
///
/// An unknown account is not an error here: the handler answers with the
/// sign-up resume URL so the client can finish registration.
///
/// # Errors
///
/// 403 when the account's email is unverified; upstream errors otherwise.
pub async fn social_sign_in<B>(
    State(state): State<Arc<EdgeState<B>>>,
    Json(body): Json<SocialSignInBody>,
) -> Result<Response, ApiError>
where
    B: AuthBackend,
{
    let result = state
        .backend
        .social_sign_in(SocialSignInRequest {
            email: body.email.clone(),
            appwrite_id: body.appwrite_id.clone(),
        })
        .await;

    match result {
        Ok(response) => {
            tracing::info!(user = %response.user.id, provider = %body.provider, "social sign-in");
            Ok(signed_in_response(&state, response))
        }
        Err(AuthError::NotRegistered) => {
            let (first_name, last_name) = split_display_name(&body.name);
            let handoff = SocialHandoff {
                provider: body.provider,
                email: body.email,
                first_name,
                last_name,
                social_id: body.appwrite_id,
            };
            let redirect_to = handoff.sign_up_url(&state.gate.config().sign_up_path);
            tracing::info!(provider = %handoff.provider, "social account not registered, handing off to sign-up");
            Ok(Json(SocialOutcome::ResumeSignUp { redirect_to }).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// Sign out by expiring both session cookies.
pub async fn sign_out<B>(State(state): State<Arc<EdgeState<B>>>) -> Response
where
    B: AuthBackend,
{
    let session_cookie = &state.gate.config().session_cookie;
    (
        AppendHeaders([
            (SET_COOKIE, expire_cookie(session_cookie)),
            (SET_COOKIE, expire_cookie(REFRESH_COOKIE)),
        ]),
        Json(StatusResponse {
            status: "signedOut",
        }),
    )
        .into_response()
}

/// Consume an emailed verification token.
///
/// Always reachable: the matching page route is a token-consuming route the
/// gate never blocks.
///
/// # Errors
///
/// 400 when the token is invalid or expired.
pub async fn verify_email<B>(
    State(state): State<Arc<EdgeState<B>>>,
    Path(token): Path<String>,
) -> Result<Json<StatusResponse>, ApiError>
where
    B: AuthBackend,
{
    state.backend.verify_email(&token).await?;
    Ok(Json(StatusResponse { status: "verified" }))
}

// =============================================================================
// Helpers
// =============================================================================

/// Build the signed-in response: session cookies plus the user profile.
fn signed_in_response<B>(state: &EdgeState<B>, response: SignInResponse) -> Response
where
    B: AuthBackend,
{
    let session_cookie = &state.gate.config().session_cookie;
    (
        AppendHeaders([
            (
                SET_COOKIE,
                set_cookie(session_cookie, &response.access_token),
            ),
            (SET_COOKIE, set_cookie(REFRESH_COOKIE, &response.refresh_token)),
        ]),
        Json(response.user),
    )
        .into_response()
}

/// Format a session cookie the way the web client expects.
fn set_cookie(name: &str, value: &str) -> String {
    format!("{name}={value}; Path=/; Secure; SameSite=Strict")
}

/// Format an expired cookie that clears the browser's copy.
fn expire_cookie(name: &str) -> String {
    format!("{name}=; Path=/; Secure; SameSite=Strict; Max-Age=0")
}

/// Split a provider display name into given and family name.
///
/// Everything after the first space is the family name; a single-word name
/// leaves it empty.
fn split_display_name(name: &str) -> (String, String) {
    match name.split_once(' ') {
        Some((first, last)) => (first.to_string(), last.to_string()),
        None => (name.to_string(), String::new()),
    }
}
