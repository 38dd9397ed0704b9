//! Gate evaluation error types.

use thiserror::Error;

/// A result type using `GateError`.
pub type Result<T> = std::result::Result<T, GateError>;

/// Errors from evaluating a malformed request descriptor.
///
/// The gate refuses to guess on a bad descriptor: silently proceeding could
/// leak a private route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// The request path is empty.
    #[error("request path is empty")]
    EmptyPath,

    /// The request path does not start with `/`.
    #[error("request path is not absolute: {0}")]
    RelativePath(String),
}
