//! Social sign-up hand-off.
//!
//! When a third-party login completes for an account that does not exist yet,
//! the client is sent back to the sign-up page with the identity-provider
//! profile pre-filled. The `socialMedia` query key marks that URL as a
//! legitimate mid-flow deep link; the edge gate whitelists the same key when
//! it canonicalizes sign-up URLs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::form_urlencoded;

/// Supported third-party identity providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    /// Google OAuth.
    Google,
    /// Facebook OAuth.
    Facebook,
}

impl SocialProvider {
    /// The provider name as it appears in URLs and API payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Facebook => "facebook",
        }
    }
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialProvider {
    type Err = HandoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(Self::Google),
            "facebook" => Ok(Self::Facebook),
            other => Err(HandoffError::UnknownProvider(other.to_string())),
        }
    }
}

/// Errors from parsing a hand-off out of a query string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandoffError {
    /// The provider name is not one we integrate with.
    #[error("unknown identity provider: {0}")]
    UnknownProvider(String),

    /// A required hand-off field is absent from the query.
    #[error("missing hand-off field: {0}")]
    MissingField(&'static str),
}

/// Identity-provider profile carried through the sign-up resume deep link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialHandoff {
    /// Which provider authenticated the user.
    pub provider: SocialProvider,
    /// Email address reported by the provider.
    pub email: String,
    /// Given name reported by the provider.
    pub first_name: String,
    /// Family name reported by the provider.
    pub last_name: String,
    /// The provider-side account ID.
    pub social_id: String,
}

impl SocialHandoff {
    /// Query key that marks a sign-up URL as mid-social-flow.
    pub const QUERY_KEY: &'static str = "socialMedia";

    /// Serialize to the sign-up resume query string (no leading `?`).
    ///
    /// The resume always lands on step 2: step 1 collects the credentials the
    /// provider already vouched for.
    #[must_use]
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair(Self::QUERY_KEY, self.provider.as_str())
            .append_pair("step", "2")
            .append_pair("email", &self.email)
            .append_pair("firstName", &self.first_name)
            .append_pair("lastName", &self.last_name)
            .append_pair("socialId", &self.social_id)
            .finish()
    }

    /// Build the full sign-up resume URL under the given sign-up path.
    #[must_use]
    pub fn sign_up_url(&self, sign_up_path: &str) -> String {
        format!("{sign_up_path}?{}", self.to_query())
    }

    /// Parse a hand-off back out of a query string (leading `?` accepted).
    ///
    /// Duplicate keys resolve to the last occurrence.
    ///
    /// # Errors
    ///
    /// Returns a [`HandoffError`] if the provider is unknown or a required
    /// field is missing. The `step` key is ignored on input.
    pub fn from_query(query: &str) -> Result<Self, HandoffError> {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut provider = None;
        let mut email = None;
        let mut first_name = None;
        let mut last_name = None;
        let mut social_id = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                Self::QUERY_KEY => provider = Some(SocialProvider::from_str(&value)?),
                "email" => email = Some(value.into_owned()),
                "firstName" => first_name = Some(value.into_owned()),
                "lastName" => last_name = Some(value.into_owned()),
                "socialId" => social_id = Some(value.into_owned()),
                _ => {}
            }
        }

        Ok(Self {
            provider: provider.ok_or(HandoffError::MissingField(Self::QUERY_KEY))?,
            email: email.ok_or(HandoffError::MissingField("email"))?,
            first_name: first_name.ok_or(HandoffError::MissingField("firstName"))?,
            last_name: last_name.ok_or(HandoffError::MissingField("lastName"))?,
            social_id: social_id.ok_or(HandoffError::MissingField("socialId"))?,
        })
    }
}
