//! Password policy shared by the sign-up and password-reset flows.

use thiserror::Error;

/// Minimum password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Characters that satisfy the special-character requirement.
pub const SPECIAL_CHARS: &str = "!@#$%^&*";

/// Reasons a candidate password fails the policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Shorter than [`MIN_PASSWORD_LEN`] characters.
    #[error("password must be at least {MIN_PASSWORD_LEN} characters")]
    TooShort,

    /// No ASCII uppercase letter present.
    #[error("password must contain at least one uppercase letter")]
    MissingUppercase,

    /// None of [`SPECIAL_CHARS`] present.
    #[error("password must contain at least one special character")]
    MissingSpecialChar,
}

/// Check a candidate password against the account password policy.
///
/// Rules are checked in order and the first failure is returned, so the
/// caller can surface a single actionable message.
///
/// # Errors
///
/// Returns the first [`ValidationError`] the candidate violates.
pub fn validate_password(candidate: &str) -> Result<(), ValidationError> {
    if candidate.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort);
    }
    if !candidate.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::MissingUppercase);
    }
    if !candidate.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Err(ValidationError::MissingSpecialChar);
    }
    Ok(())
}
