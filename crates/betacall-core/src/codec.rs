//! Opaque encoding for form state carried through URLs.
//!
//! The multi-step sign-up stashes partial form state in the URL so a page
//! reload or a social-login round trip can restore it. The encoding is plain
//! base64, not encryption: it keeps values out of casual sight, nothing more.

use base64::prelude::*;
use thiserror::Error;

/// Errors from decoding URL-carried form state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The input is not valid base64.
    #[error("invalid base64: {0}")]
    InvalidBase64(String),

    /// The decoded bytes are not valid UTF-8.
    #[error("decoded state is not valid UTF-8")]
    InvalidUtf8,
}

/// Encode form state for embedding in a URL.
#[must_use]
pub fn encode(state: &str) -> String {
    BASE64_STANDARD.encode(state)
}

/// Decode form state previously produced by [`encode`].
///
/// # Errors
///
/// Returns a [`CodecError`] if the input is not base64 or does not decode to
/// UTF-8. Callers must treat a failure as absent state, never as state.
pub fn decode(state: &str) -> Result<String, CodecError> {
    let bytes = BASE64_STANDARD
        .decode(state)
        .map_err(|e| CodecError::InvalidBase64(e.to_string()))?;
    String::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)
}
