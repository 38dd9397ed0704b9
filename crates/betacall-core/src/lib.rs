//! Core domain types for the BetaCall edge.
//!
//! This crate provides the foundational types shared across the edge crates:
//!
//! - **User profile**: the wire type the user API returns
//! - **Password policy**: the validation rule shared by sign-up and reset
//! - **URL-state codec**: opaque encoding for form state carried in URLs
//! - **Social hand-off**: the deep-link payload that resumes an interrupted
//!   third-party sign-up
//!
//! # Example
//!
//! ```
//! use betacall_core::{validate_password, SocialHandoff, SocialProvider};
//!
//! validate_password("Secur3!pw").unwrap();
//!
//! let handoff = SocialHandoff {
//!     provider: SocialProvider::Google,
//!     email: "ada@example.com".to_string(),
//!     first_name: "Ada".to_string(),
//!     last_name: "Lovelace".to_string(),
//!     social_id: "g-123".to_string(),
//! };
//! let url = handoff.sign_up_url("/signUp");
//! assert!(url.starts_with("/signUp?socialMedia=google"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod codec;
pub mod handoff;
pub mod user;
pub mod validation;

pub use codec::CodecError;
pub use handoff::{HandoffError, SocialHandoff, SocialProvider};
pub use user::UserProfile;
pub use validation::{validate_password, ValidationError};
