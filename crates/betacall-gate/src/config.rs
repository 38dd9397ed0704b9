//! The gate's routing table.
//!
//! Everything here is data, not logic: the rule order lives in the evaluator,
//! and extending the public-route list or renaming the session cookie never
//! touches it.

use serde::Deserialize;

/// Routing-table configuration for the gate.
#[derive(Debug, Clone, Deserialize)]
pub struct GateConfig {
    /// Routes reachable only while NOT authenticated (exact path match).
    #[serde(default = "GateConfig::default_public_routes")]
    pub public_routes: Vec<String>,

    /// The sign-up path, target of query canonicalization.
    #[serde(default = "GateConfig::default_sign_up_path")]
    pub sign_up_path: String,

    /// Where unauthenticated requests for private routes are sent.
    #[serde(default = "GateConfig::default_sign_in_path")]
    pub sign_in_path: String,

    /// Where authenticated requests for public-only routes are sent.
    #[serde(default = "GateConfig::default_authenticated_home")]
    pub authenticated_home: String,

    /// Cookie whose presence marks a session (value is never inspected).
    #[serde(default = "GateConfig::default_session_cookie")]
    pub session_cookie: String,

    /// Query key that exempts a sign-up URL from canonicalization.
    #[serde(default = "GateConfig::default_social_query_key")]
    pub social_query_key: String,

    /// Path prefixes of token-consuming routes (emailed verification and
    /// reset links), always reachable regardless of auth state.
    #[serde(default = "GateConfig::default_token_route_prefixes")]
    pub token_route_prefixes: Vec<String>,
}

impl GateConfig {
    fn default_public_routes() -> Vec<String> {
        vec![
            "/signUp".to_string(),
            "/signIn".to_string(),
            "/recoverPassword".to_string(),
        ]
    }

    fn default_sign_up_path() -> String {
        "/signUp".to_string()
    }

    fn default_sign_in_path() -> String {
        "/signIn".to_string()
    }

    fn default_authenticated_home() -> String {
        "/".to_string()
    }

    fn default_session_cookie() -> String {
        "accessToken".to_string()
    }

    fn default_social_query_key() -> String {
        "socialMedia".to_string()
    }

    fn default_token_route_prefixes() -> Vec<String> {
        vec!["/verify/".to_string(), "/resetPassword/".to_string()]
    }

    /// Whether `path` is one of the designated public-only routes.
    #[must_use]
    pub fn is_public_only(&self, path: &str) -> bool {
        self.public_routes.iter().any(|route| route == path)
    }

    /// Whether `path` is under a token-consuming prefix.
    #[must_use]
    pub fn is_token_consuming(&self, path: &str) -> bool {
        self.token_route_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            public_routes: Self::default_public_routes(),
            sign_up_path: Self::default_sign_up_path(),
            sign_in_path: Self::default_sign_in_path(),
            authenticated_home: Self::default_authenticated_home(),
            session_cookie: Self::default_session_cookie(),
            social_query_key: Self::default_social_query_key(),
            token_route_prefixes: Self::default_token_route_prefixes(),
        }
    }
}
