//! Typed client for the BetaCall user API.
//!
//! The remote backend owns accounts, sessions, and emailed tokens; this crate
//! is its client surface for the edge:
//!
//! - [`AuthBackend`]: the async trait the edge handlers call
//! - [`BetacallClient`]: the reqwest implementation
//! - [`MockAuthBackend`]: a canned implementation behind the `test-utils`
//!   feature
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐
//! │   Edge handlers  │────▶│   AuthBackend    │
//! │   (HTTP)         │     │   (trait)        │
//! └──────────────────┘     └────────┬─────────┘
//!                                   │
//!                          ┌────────▼─────────┐
//!                          │  BetacallClient  │
//!                          │  (reqwest)       │
//!                          └────────┬─────────┘
//!                                   │ HTTPS
//!                          ┌────────▼─────────┐
//!                          │   BetaCall       │
//!                          │   user API       │
//!                          └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use betacall_auth::{AuthBackend, AuthConfig, BetacallClient, SignInRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = BetacallClient::new(AuthConfig::default());
//!
//! let response = client
//!     .sign_in(SignInRequest {
//!         email: "ada@example.com".to_string(),
//!         password: "Secur3!pw".to_string(),
//!     })
//!     .await?;
//!
//! println!("signed in as {}", response.user.full_name());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod backend;
pub mod client;
pub mod error;

pub use backend::{AuthBackend, SignInRequest, SignInResponse, SocialSignInRequest};
pub use client::BetacallClient;
pub use error::{AuthError, Result};

#[cfg(any(test, feature = "test-utils"))]
pub use backend::MockAuthBackend;

/// Configuration for reaching the BetaCall user API.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Base URL of the backend (no trailing slash).
    pub base_url: String,
    /// Request timeout, in seconds.
    pub timeout_seconds: u64,
}

impl AuthConfig {
    /// Email/password sign-in endpoint.
    #[must_use]
    pub fn sign_in_url(&self) -> String {
        format!("{}/api/users", self.base_url)
    }

    /// Identity-provider sign-in endpoint.
    #[must_use]
    pub fn social_sign_in_url(&self) -> String {
        format!("{}/api/users/appwrite", self.base_url)
    }

    /// Password-reset request endpoint.
    #[must_use]
    pub fn password_reset_url(&self) -> String {
        format!("{}/api/users/request-reset-password", self.base_url)
    }

    /// Token-bearing password-reset endpoint.
    #[must_use]
    pub fn password_reset_token_url(&self, token: &str) -> String {
        format!("{}/{token}", self.password_reset_url())
    }

    /// Email-verification endpoint.
    #[must_use]
    pub fn verify_url(&self, token: &str) -> String {
        format!("{}/api/users/verify/{token}", self.base_url)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: "https://betacall-backend.onrender.com".to_string(),
            timeout_seconds: 30,
        }
    }
}
