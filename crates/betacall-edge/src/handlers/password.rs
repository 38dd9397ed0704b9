//! Password-recovery endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use betacall_auth::AuthBackend;
use betacall_core::validate_password;

use crate::error::ApiError;
use crate::state::EdgeState;

use super::StatusResponse;

/// Request body for a password-reset email.
#[derive(Debug, Deserialize)]
pub struct RecoverBody {
    /// Address to send the reset link to.
    pub email: String,
}

/// Request body for a token-bearing password reset.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetBody {
    /// The replacement password.
    pub new_password: String,
}

/// Request a password-reset email.
///
/// The response never discloses whether the address has an account.
///
/// # Errors
///
/// Upstream errors only.
pub async fn recover<B>(
    State(state): State<Arc<EdgeState<B>>>,
    Json(body): Json<RecoverBody>,
) -> Result<impl IntoResponse, ApiError>
where
    B: AuthBackend,
{
    state.backend.request_password_reset(&body.email).await?;
    Ok((
        StatusCode::ACCEPTED,
        Json(StatusResponse { status: "sent" }),
    ))
}

/// Reset a password under an emailed token.
///
/// The new password is checked against the shared policy before the token is
/// spent; a policy failure never consumes the token.
///
/// # Errors
///
/// 400 on a policy violation or a rejected token.
pub async fn reset<B>(
    State(state): State<Arc<EdgeState<B>>>,
    Path(token): Path<String>,
    Json(body): Json<ResetBody>,
) -> Result<Json<StatusResponse>, ApiError>
where
    B: AuthBackend,
{
    validate_password(&body.new_password)?;
    state
        .backend
        .reset_password(&token, &body.new_password)
        .await?;
    Ok(Json(StatusResponse {
        status: "passwordReset",
    }))
}
