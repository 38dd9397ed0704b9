//! User profile types returned by the BetaCall user API.
//!
//! The backend serializes user records in camelCase with a Mongo-style `_id`;
//! this module mirrors that wire format exactly so responses deserialize
//! without a translation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A BetaCall user record as the backend API serializes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Backend document ID.
    #[serde(rename = "_id")]
    pub id: String,
    /// Account email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Account role (e.g. `"user"`).
    pub role: String,
    /// Linked identity-provider account ID; empty when no provider is linked.
    #[serde(default)]
    pub appwrite_id: String,
    /// Whether the email address has been verified.
    pub verified: bool,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// The user's full display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend_json() -> &'static str {
        r#"{
            "_id": "64f1c0ffee0000aa00bb00cc",
            "email": "ada@example.com",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "role": "user",
            "appwriteId": "67b999f8-aaaa",
            "verified": true,
            "createdAt": "2025-03-01T12:00:00Z",
            "updatedAt": "2025-03-02T08:30:00Z"
        }"#
    }

    #[test]
    fn deserializes_backend_shape() {
        let user: UserProfile = serde_json::from_str(backend_json()).unwrap();
        assert_eq!(user.id, "64f1c0ffee0000aa00bb00cc");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.first_name, "Ada");
        assert!(user.verified);
    }

    #[test]
    fn appwrite_id_defaults_to_empty() {
        let json = r#"{
            "_id": "64f1c0ffee0000aa00bb00cc",
            "email": "ada@example.com",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "role": "user",
            "verified": false,
            "createdAt": "2025-03-01T12:00:00Z",
            "updatedAt": "2025-03-01T12:00:00Z"
        }"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert!(user.appwrite_id.is_empty());
    }

    #[test]
    fn serializes_camel_case() {
        let user: UserProfile = serde_json::from_str(backend_json()).unwrap();
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"_id\""));
        assert!(json.contains("\"firstName\""));
        assert!(json.contains("\"appwriteId\""));
        assert!(!json.contains("first_name"));
    }

    #[test]
    fn full_name_joins_names() {
        let user: UserProfile = serde_json::from_str(backend_json()).unwrap();
        assert_eq!(user.full_name(), "Ada Lovelace");
    }
}
