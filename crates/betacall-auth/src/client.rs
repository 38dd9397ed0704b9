//! Reqwest implementation of [`AuthBackend`].
//!
//! This module talks to the remote BetaCall user API. It maps the backend's
//! status conventions onto typed errors; it never inspects token contents.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use betacall_core::UserProfile;

use crate::backend::{AuthBackend, SignInRequest, SignInResponse, SocialSignInRequest};
use crate::error::{AuthError, Result};
use crate::AuthConfig;

/// Wire shape of a successful sign-in response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSignInResponse {
    access_token: String,
    refresh_token: String,
    user: UserProfile,
}

/// Client for the BetaCall user API.
pub struct BetacallClient {
    config: AuthConfig,
    client: reqwest::Client,
}

impl BetacallClient {
    /// Create a new client with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created (should never happen with
    /// default TLS).
    #[must_use]
    pub fn new(config: AuthConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("failed to create HTTP client");

        Self { config, client }
    }

    async fn post_json<T: serde::Serialize>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<reqwest::Response> {
        self.client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))
    }

    /// Parse a sign-in response, mapping rejection statuses.
    ///
    /// `not_registered_on_404` distinguishes the social flow, where a 404
    /// means "hand off to sign-up", from plain sign-in, where the backend
    /// does not disclose whether the email exists.
    async fn handle_sign_in(
        response: reqwest::Response,
        not_registered_on_404: bool,
    ) -> Result<SignInResponse> {
        let status = response.status();

        if status.is_success() {
            let raw: RawSignInResponse = response
                .json()
                .await
                .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;
            return Ok(SignInResponse {
                access_token: raw.access_token,
                refresh_token: raw.refresh_token,
                user: raw.user,
            });
        }

        Err(match status.as_u16() {
            403 => AuthError::VerificationRequired,
            404 if not_registered_on_404 => AuthError::NotRegistered,
            400 | 401 | 404 => AuthError::InvalidCredentials,
            429 => AuthError::RateLimited,
            code => AuthError::UnexpectedStatus(code),
        })
    }

    /// Map a token-bearing operation's response (reset, verify).
    fn handle_token_op(response: &reqwest::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(match status.as_u16() {
            400 | 404 | 410 => AuthError::TokenRejected,
            429 => AuthError::RateLimited,
            code => AuthError::UnexpectedStatus(code),
        })
    }
}

#[async_trait]
impl AuthBackend for BetacallClient {
    async fn sign_in(&self, request: SignInRequest) -> Result<SignInResponse> {
        let response = self
            .post_json(&self.config.sign_in_url(), &request)
            .await?;
        Self::handle_sign_in(response, false).await
    }

    async fn social_sign_in(&self, request: SocialSignInRequest) -> Result<SignInResponse> {
        let response = self
            .post_json(&self.config.social_sign_in_url(), &request)
            .await?;
        Self::handle_sign_in(response, true).await
    }

    async fn request_password_reset(&self, email: &str) -> Result<()> {
        let body = serde_json::json!({ "email": email });
        let response = self
            .post_json(&self.config.password_reset_url(), &body)
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        tracing::warn!(status = %status, "password reset request rejected");
        Err(match status.as_u16() {
            429 => AuthError::RateLimited,
            code => AuthError::UnexpectedStatus(code),
        })
    }

    async fn reset_password(&self, token: &str, new_password: &str) -> Result<()> {
        let body = serde_json::json!({ "newPassword": new_password });
        let response = self
            .post_json(&self.config.password_reset_token_url(token), &body)
            .await?;
        Self::handle_token_op(&response)
    }

    async fn verify_email(&self, token: &str) -> Result<()> {
        let body = serde_json::json!({});
        let response = self.post_json(&self.config.verify_url(token), &body).await?;
        Self::handle_token_op(&response)
    }
}
