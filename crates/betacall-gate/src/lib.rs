//! Route-access decisions for the BetaCall edge.
//!
//! This crate implements the gate: a pure, synchronous function invoked once
//! per inbound request, before any page resolution, that decides whether the
//! request passes through, gets redirected, or gets its query string
//! canonicalized away.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐
//! │   Edge runtime   │────▶│    RouteGate     │
//! │  (middleware)    │     │   evaluate()     │
//! └──────────────────┘     └────────┬─────────┘
//!                                   │
//!                          ┌────────▼─────────┐
//!                          │    GateConfig    │
//!                          │ (routing table)  │
//!                          └──────────────────┘
//! ```
//!
//! The gate reads only the [`RouteRequest`] passed to it: no I/O, no clocks,
//! no shared state. Identical inputs always produce the identical
//! [`RouteVerdict`].
//!
//! # Rule order
//!
//! Rules are evaluated top to bottom and the first match wins:
//!
//! 1. Sign-up query canonicalization (strip incidental query noise unless the
//!    social hand-off key is present)
//! 2. Static asset bypass
//! 3. Token-consuming route bypass (`/verify/…`, `/resetPassword/…`)
//! 4. Unauthenticated request for a private route → redirect to sign-in
//! 5. Authenticated request for a public-only route → redirect home
//! 6. Proceed
//!
//! Rule 1 must stay ahead of 4/5: an unauthenticated `/signUp?foo=bar` is
//! canonicalized, never bounced to sign-in.
//!
//! # Example
//!
//! ```
//! use betacall_gate::{GateConfig, RouteGate, RouteRequest, RouteVerdict};
//!
//! let gate = RouteGate::new(GateConfig::default());
//!
//! let request = RouteRequest::new("/profile");
//! let verdict = gate.evaluate(&request).unwrap();
//! assert_eq!(
//!     verdict,
//!     RouteVerdict::Redirect { target: "/signIn".to_string() }
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod classify;
pub mod config;
pub mod error;
pub mod request;
pub mod verdict;

pub use classify::{classify, has_file_extension, RouteClass};
pub use config::GateConfig;
pub use error::{GateError, Result};
pub use request::RouteRequest;
pub use verdict::RouteVerdict;

use url::form_urlencoded;

/// The route-access decision function, closed over its routing table.
#[derive(Debug, Clone, Default)]
pub struct RouteGate {
    config: GateConfig,
}

impl RouteGate {
    /// Create a gate over the given routing table.
    #[must_use]
    pub const fn new(config: GateConfig) -> Self {
        Self { config }
    }

    /// The routing table this gate evaluates against.
    #[must_use]
    pub const fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Decide the fate of one request.
    ///
    /// # Errors
    ///
    /// Returns a [`GateError`] when the descriptor is malformed (empty or
    /// relative path). The caller must fail the request rather than guess a
    /// default.
    pub fn evaluate(&self, request: &RouteRequest) -> Result<RouteVerdict> {
        if request.path.is_empty() {
            return Err(GateError::EmptyPath);
        }
        if !request.path.starts_with('/') {
            return Err(GateError::RelativePath(request.path.clone()));
        }

        let query = request.query.strip_prefix('?').unwrap_or(&request.query);

        // Rule 1: scrub incidental query noise off the sign-up page, unless
        // the request is mid-social-flow.
        if request.path == self.config.sign_up_path
            && !query.is_empty()
            && !query_has_key(query, &self.config.social_query_key)
        {
            let verdict = RouteVerdict::StripQuery {
                target: request.path.clone(),
            };
            tracing::debug!(path = %request.path, "canonicalizing sign-up query");
            return Ok(verdict);
        }

        // Empty-string cookie value counts as no session. Confirmed policy,
        // not an accident.
        let authenticated = request
            .cookies
            .get(&self.config.session_cookie)
            .is_some_and(|value| !value.is_empty());

        let verdict = match classify(&request.path, &self.config) {
            // Rules 2 and 3.
            RouteClass::StaticAsset | RouteClass::TokenConsuming => RouteVerdict::Proceed,
            // Rule 4.
            RouteClass::Private if !authenticated => RouteVerdict::Redirect {
                target: self.config.sign_in_path.clone(),
            },
            // Rule 5.
            RouteClass::PublicOnly if authenticated => RouteVerdict::Redirect {
                target: self.config.authenticated_home.clone(),
            },
            // Rule 6.
            RouteClass::Private | RouteClass::PublicOnly => RouteVerdict::Proceed,
        };

        tracing::trace!(
            path = %request.path,
            authenticated,
            verdict = ?verdict,
            "route gate verdict"
        );
        Ok(verdict)
    }
}

/// Whether the query string contains `key`, compared by exact key equality
/// after form-urlencoded decoding. Unparseable fragments degrade to "absent";
/// they can trigger an extra canonicalization but never a policy violation.
fn query_has_key(query: &str, key: &str) -> bool {
    form_urlencoded::parse(query.as_bytes()).any(|(k, _)| k == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> RouteGate {
        RouteGate::new(GateConfig::default())
    }

    fn authed(path: &str) -> RouteRequest {
        RouteRequest::new(path).with_cookie("accessToken", "xyz")
    }

    // =========================================================================
    // Rule 1: sign-up query canonicalization
    // =========================================================================

    #[test]
    fn sign_up_with_noise_query_is_stripped() {
        let request = RouteRequest::new("/signUp").with_query("?foo=bar");
        assert_eq!(
            gate().evaluate(&request).unwrap(),
            RouteVerdict::StripQuery {
                target: "/signUp".to_string()
            }
        );
    }

    #[test]
    fn sign_up_with_social_key_proceeds() {
        let request = RouteRequest::new("/signUp").with_query("?socialMedia=google");
        assert_eq!(gate().evaluate(&request).unwrap(), RouteVerdict::Proceed);
    }

    #[test]
    fn social_key_among_other_keys_still_exempts() {
        let request =
            RouteRequest::new("/signUp").with_query("step=2&socialMedia=google&email=a%40b.c");
        assert_eq!(gate().evaluate(&request).unwrap(), RouteVerdict::Proceed);
    }

    #[test]
    fn social_key_without_value_still_exempts() {
        let request = RouteRequest::new("/signUp").with_query("socialMedia");
        assert_eq!(gate().evaluate(&request).unwrap(), RouteVerdict::Proceed);
    }

    #[test]
    fn social_key_match_is_exact_not_substring() {
        // A key merely containing the social key is still noise.
        let request = RouteRequest::new("/signUp").with_query("notSocialMediaX=1");
        assert_eq!(
            gate().evaluate(&request).unwrap(),
            RouteVerdict::StripQuery {
                target: "/signUp".to_string()
            }
        );
    }

    #[test]
    fn canonicalization_outranks_authenticated_redirect() {
        // Rule 1 fires before rule 5 even with a session cookie present.
        let request = authed("/signUp").with_query("foo=bar");
        assert_eq!(
            gate().evaluate(&request).unwrap(),
            RouteVerdict::StripQuery {
                target: "/signUp".to_string()
            }
        );
    }

    #[test]
    fn sign_up_without_query_is_not_canonicalized() {
        let request = RouteRequest::new("/signUp");
        assert_eq!(gate().evaluate(&request).unwrap(), RouteVerdict::Proceed);
    }

    // =========================================================================
    // Rules 2 and 3: bypasses
    // =========================================================================

    #[test]
    fn assets_proceed_regardless_of_auth_and_query() {
        for request in [
            RouteRequest::new("/images/logo.png"),
            authed("/images/logo.png"),
            RouteRequest::new("/images/logo.png").with_query("v=3"),
        ] {
            assert_eq!(gate().evaluate(&request).unwrap(), RouteVerdict::Proceed);
        }
    }

    #[test]
    fn token_routes_proceed_regardless_of_auth() {
        assert_eq!(
            gate()
                .evaluate(&RouteRequest::new("/verify/abc123"))
                .unwrap(),
            RouteVerdict::Proceed
        );
        assert_eq!(
            gate().evaluate(&authed("/resetPassword/tok")).unwrap(),
            RouteVerdict::Proceed
        );
    }

    #[test]
    fn asset_under_token_prefix_resolved_by_asset_rule() {
        assert_eq!(
            gate()
                .evaluate(&RouteRequest::new("/verify/icon.svg"))
                .unwrap(),
            RouteVerdict::Proceed
        );
    }

    // =========================================================================
    // Rules 4 and 5: auth enforcement
    // =========================================================================

    #[test]
    fn unauthenticated_private_route_redirects_to_sign_in() {
        let verdict = gate()
            .evaluate(&RouteRequest::new("/private-route"))
            .unwrap();
        assert_eq!(
            verdict,
            RouteVerdict::Redirect {
                target: "/signIn".to_string()
            }
        );
    }

    #[test]
    fn authenticated_public_route_redirects_home() {
        let verdict = gate().evaluate(&authed("/signUp")).unwrap();
        assert_eq!(
            verdict,
            RouteVerdict::Redirect {
                target: "/".to_string()
            }
        );
    }

    #[test]
    fn authenticated_private_route_proceeds() {
        assert_eq!(
            gate().evaluate(&authed("/profile")).unwrap(),
            RouteVerdict::Proceed
        );
    }

    #[test]
    fn unauthenticated_public_route_proceeds() {
        assert_eq!(
            gate().evaluate(&RouteRequest::new("/signIn")).unwrap(),
            RouteVerdict::Proceed
        );
    }

    #[test]
    fn empty_cookie_value_is_not_a_session() {
        let request = RouteRequest::new("/profile").with_cookie("accessToken", "");
        assert_eq!(
            gate().evaluate(&request).unwrap(),
            RouteVerdict::Redirect {
                target: "/signIn".to_string()
            }
        );
    }

    #[test]
    fn cookie_value_is_not_validated_only_present() {
        // A stale or garbage token still counts as a session at this layer.
        let request = RouteRequest::new("/profile").with_cookie("accessToken", "not-a-jwt");
        assert_eq!(gate().evaluate(&request).unwrap(), RouteVerdict::Proceed);
    }

    #[test]
    fn home_is_private() {
        assert_eq!(
            gate().evaluate(&RouteRequest::new("/")).unwrap(),
            RouteVerdict::Redirect {
                target: "/signIn".to_string()
            }
        );
        assert_eq!(gate().evaluate(&authed("/")).unwrap(), RouteVerdict::Proceed);
    }

    // =========================================================================
    // Malformed descriptors
    // =========================================================================

    #[test]
    fn empty_path_is_rejected() {
        let request = RouteRequest::new("");
        assert_eq!(gate().evaluate(&request), Err(GateError::EmptyPath));
    }

    #[test]
    fn relative_path_is_rejected() {
        let request = RouteRequest::new("profile");
        assert_eq!(
            gate().evaluate(&request),
            Err(GateError::RelativePath("profile".to_string()))
        );
    }

    #[test]
    fn percent_encoded_path_is_treated_opaquely() {
        // No decoding: the encoded form is compared as-is and lands private.
        let request = RouteRequest::new("/sign%55p");
        assert_eq!(
            gate().evaluate(&request).unwrap(),
            RouteVerdict::Redirect {
                target: "/signIn".to_string()
            }
        );
    }

    // =========================================================================
    // Extended routing table
    // =========================================================================

    #[test]
    fn extra_public_route_is_honored_without_reordering() {
        let mut config = GateConfig::default();
        config.public_routes.push("/pricing".to_string());
        let gate = RouteGate::new(config);

        assert_eq!(
            gate.evaluate(&RouteRequest::new("/pricing")).unwrap(),
            RouteVerdict::Proceed
        );
        assert_eq!(
            gate.evaluate(&authed("/pricing")).unwrap(),
            RouteVerdict::Redirect {
                target: "/".to_string()
            }
        );
    }
}
