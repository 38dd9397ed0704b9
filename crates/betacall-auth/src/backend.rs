//! The backend seam the edge handlers depend on.
//!
//! Handlers are generic over [`AuthBackend`] so tests can run against
//! [`MockAuthBackend`] with no network.

use async_trait::async_trait;
use serde::Serialize;

use betacall_core::UserProfile;

use crate::error::Result;

/// Request payload for email/password sign-in.
#[derive(Debug, Clone, Serialize)]
pub struct SignInRequest {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Request payload for identity-provider sign-in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialSignInRequest {
    /// Email address reported by the provider.
    pub email: String,
    /// The provider-side account ID.
    pub appwrite_id: String,
}

/// A successful sign-in: the session tokens plus the signed-in user.
#[derive(Debug, Clone)]
pub struct SignInResponse {
    /// Bearer token the client presents as the session cookie.
    pub access_token: String,
    /// Token for minting fresh access tokens.
    pub refresh_token: String,
    /// The signed-in user's profile.
    pub user: UserProfile,
}

/// Operations the BetaCall user API exposes to the edge.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Authenticate with email and password.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` on a rejected pair, `VerificationRequired` when
    /// the account's email is unverified, transport/response errors otherwise.
    async fn sign_in(&self, request: SignInRequest) -> Result<SignInResponse>;

    /// Authenticate with an identity-provider profile.
    ///
    /// # Errors
    ///
    /// `NotRegistered` when no account matches the provider profile (the
    /// caller hands off to sign-up), `VerificationRequired` when unverified.
    async fn social_sign_in(&self, request: SocialSignInRequest) -> Result<SignInResponse>;

    /// Ask the backend to email a password-reset link.
    ///
    /// # Errors
    ///
    /// Transport errors only; whether the address exists is not disclosed.
    async fn request_password_reset(&self, email: &str) -> Result<()>;

    /// Submit a new password under an emailed reset token.
    ///
    /// # Errors
    ///
    /// `TokenRejected` when the token is invalid or expired.
    async fn reset_password(&self, token: &str, new_password: &str) -> Result<()>;

    /// Consume an emailed email-verification token.
    ///
    /// # Errors
    ///
    /// `TokenRejected` when the token is invalid or expired.
    async fn verify_email(&self, token: &str) -> Result<()>;
}

#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockAuthBackend;

#[cfg(any(test, feature = "test-utils"))]
mod mock {
    use std::collections::HashSet;

    use async_trait::async_trait;
    use chrono::{DateTime, Utc};

    use betacall_core::UserProfile;

    use super::{AuthBackend, SignInRequest, SignInResponse, SocialSignInRequest};
    use crate::error::{AuthError, Result};

    /// An in-memory account the mock backend knows about.
    #[derive(Debug, Clone)]
    struct MockAccount {
        email: String,
        password: String,
        appwrite_id: Option<String>,
        verified: bool,
    }

    /// A canned [`AuthBackend`] for tests: no network, deterministic tokens.
    #[derive(Debug, Default)]
    pub struct MockAuthBackend {
        accounts: Vec<MockAccount>,
        reset_tokens: HashSet<String>,
        verify_tokens: HashSet<String>,
    }

    impl MockAuthBackend {
        /// Create an empty mock backend.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Register a verified email/password account.
        #[must_use]
        pub fn with_user(mut self, email: &str, password: &str) -> Self {
            self.accounts.push(MockAccount {
                email: email.to_string(),
                password: password.to_string(),
                appwrite_id: None,
                verified: true,
            });
            self
        }

        /// Register an account whose email is not verified yet.
        #[must_use]
        pub fn with_unverified_user(mut self, email: &str, password: &str) -> Self {
            self.accounts.push(MockAccount {
                email: email.to_string(),
                password: password.to_string(),
                appwrite_id: None,
                verified: false,
            });
            self
        }

        /// Register a verified account linked to an identity provider.
        #[must_use]
        pub fn with_social_user(mut self, email: &str, appwrite_id: &str) -> Self {
            self.accounts.push(MockAccount {
                email: email.to_string(),
                password: String::new(),
                appwrite_id: Some(appwrite_id.to_string()),
                verified: true,
            });
            self
        }

        /// Mark a reset token as valid.
        #[must_use]
        pub fn with_reset_token(mut self, token: &str) -> Self {
            self.reset_tokens.insert(token.to_string());
            self
        }

        /// Mark a verification token as valid.
        #[must_use]
        pub fn with_verify_token(mut self, token: &str) -> Self {
            self.verify_tokens.insert(token.to_string());
            self
        }

        fn response_for(account: &MockAccount) -> SignInResponse {
            SignInResponse {
                access_token: format!("mock-access-{}", account.email),
                refresh_token: format!("mock-refresh-{}", account.email),
                user: UserProfile {
                    id: format!("mock-{}", account.email),
                    email: account.email.clone(),
                    first_name: "Mock".to_string(),
                    last_name: "User".to_string(),
                    role: "user".to_string(),
                    appwrite_id: account.appwrite_id.clone().unwrap_or_default(),
                    verified: account.verified,
                    created_at: DateTime::<Utc>::UNIX_EPOCH,
                    updated_at: DateTime::<Utc>::UNIX_EPOCH,
                },
            }
        }
    }

    #[async_trait]
    impl AuthBackend for MockAuthBackend {
        async fn sign_in(&self, request: SignInRequest) -> Result<SignInResponse> {
            let account = self
                .accounts
                .iter()
                .find(|a| a.email == request.email && a.password == request.password)
                .ok_or(AuthError::InvalidCredentials)?;
            if !account.verified {
                return Err(AuthError::VerificationRequired);
            }
            Ok(Self::response_for(account))
        }

        async fn social_sign_in(&self, request: SocialSignInRequest) -> Result<SignInResponse> {
            let account = self
                .accounts
                .iter()
                .find(|a| {
                    a.email == request.email
                        && a.appwrite_id.as_deref() == Some(request.appwrite_id.as_str())
                })
                .ok_or(AuthError::NotRegistered)?;
            if !account.verified {
                return Err(AuthError::VerificationRequired);
            }
            Ok(Self::response_for(account))
        }

        async fn request_password_reset(&self, _email: &str) -> Result<()> {
            // Existence of the address is never disclosed.
            Ok(())
        }

        async fn reset_password(&self, token: &str, _new_password: &str) -> Result<()> {
            if self.reset_tokens.contains(token) {
                Ok(())
            } else {
                Err(AuthError::TokenRejected)
            }
        }

        async fn verify_email(&self, token: &str) -> Result<()> {
            if self.verify_tokens.contains(token) {
                Ok(())
            } else {
                Err(AuthError::TokenRejected)
            }
        }
    }
}
