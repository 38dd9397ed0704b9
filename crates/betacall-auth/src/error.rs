//! Authentication error types.

use thiserror::Error;

/// A result type using `AuthError`.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors that can occur talking to the BetaCall user API.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The email/password pair was rejected.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The account exists but its email address is not verified yet.
    #[error("email verification required")]
    VerificationRequired,

    /// No account matches the identity-provider profile.
    #[error("account not registered")]
    NotRegistered,

    /// An emailed token (reset or verification) was rejected as invalid or
    /// expired.
    #[error("token invalid or expired")]
    TokenRejected,

    /// Too many requests, rate limited by the backend.
    #[error("rate limited")]
    RateLimited,

    /// The backend answered with a status we have no mapping for.
    #[error("backend returned HTTP {0}")]
    UnexpectedStatus(u16),

    /// The request never completed (DNS, TLS, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered 2xx but the body did not parse.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl AuthError {
    /// Returns `true` if the caller may retry the same request later.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::Transport(_))
    }

    /// The HTTP status the edge should answer with for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidCredentials => 401,
            Self::VerificationRequired => 403,
            Self::NotRegistered => 404,
            Self::TokenRejected => 400,
            Self::RateLimited => 429,
            Self::UnexpectedStatus(_) | Self::InvalidResponse(_) => 500,
            Self::Transport(_) => 502,
        }
    }
}
