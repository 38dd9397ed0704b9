//! Path classification.
//!
//! Every path falls into exactly one class, recomputed per request from the
//! path and the routing table alone. Order matters and mirrors the rule
//! order: a static asset nested under `/verify/` is still an asset.

use crate::config::GateConfig;

/// The access class of a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// A file request (`/images/logo.png`); never gated.
    StaticAsset,
    /// An emailed-token route (`/verify/…`, `/resetPassword/…`); always
    /// reachable regardless of auth state.
    TokenConsuming,
    /// Reachable only while NOT authenticated.
    PublicOnly,
    /// Everything else; requires authentication.
    Private,
}

/// Classify a path against the routing table.
#[must_use]
pub fn classify(path: &str, config: &GateConfig) -> RouteClass {
    if has_file_extension(path) {
        RouteClass::StaticAsset
    } else if config.is_token_consuming(path) {
        RouteClass::TokenConsuming
    } else if config.is_public_only(path) {
        RouteClass::PublicOnly
    } else {
        RouteClass::Private
    }
}

/// Whether the final path segment carries a file extension.
///
/// Matches a `.` followed by at least one non-`/` character at the end of the
/// path, so `/app.v2/page` is not an asset but `/fonts/inter.woff2` is.
#[must_use]
pub fn has_file_extension(path: &str) -> bool {
    let segment = path.rsplit('/').next().unwrap_or(path).as_bytes();
    segment.len() >= 2 && segment[..segment.len() - 1].contains(&b'.')
}
