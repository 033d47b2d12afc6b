//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the marketplace REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, signup, password reset
//! - [`user`] - User records and profile updates
//! - [`cooperative`] - Cooperatives, memberships and appointments
//! - [`crop`] - Crop listings
//! - [`order`] - Orders
//! - [`transaction`] - Payment ledger entries
//! - [`messaging`] - Direct messages
//! - [`organization`] - API keys and usage
//!
//! ## Identifiers
//!
//! The backend mixes numeric and string identifiers between endpoints. Every
//! identifier is read into [`Id`], which accepts both and always writes a string.
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! {
//!   "email": "wanjiru@example.com",
//!   "password": "MyPassword123!"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "user": {
//!     "id": 12,
//!     "full_name": "Wanjiru Kamau",
//!     "email": "wanjiru@example.com",
//!     "role": "farmer"
//!   },
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
//! }
//! ```

pub mod auth;
pub mod cooperative;
pub mod crop;
pub mod messaging;
pub mod order;
pub mod organization;
pub mod transaction;
pub mod user;

pub use auth::*;
pub use cooperative::*;
pub use crop::*;
pub use messaging::*;
pub use order::*;
pub use organization::*;
pub use transaction::*;
pub use user::*;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a backend resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Id(pub String);

impl Id {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Id(value.to_string())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Id(value)
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Id(value.to_string())
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Id(s),
            RawId::Signed(n) => Id(n.to_string()),
            RawId::Unsigned(n) => Id(n.to_string()),
        })
    }
}

/// Error body returned by the backend on non-2xx responses.
///
/// Older endpoints use `message`, newer ones `error`; both are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// The most specific text the backend gave.
    pub fn text(&self) -> Option<&str> {
        let present = |s: &&str| !s.trim().is_empty();
        self.error
            .as_deref()
            .filter(present)
            .or_else(|| self.message.as_deref().filter(present))
    }
}

/// Acknowledgement body for endpoints that return no resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_accepts_numbers_and_strings() {
        let ids: Vec<Id> = serde_json::from_str(r#"[42, "abc-1", 18446744073709551615]"#).unwrap();
        assert_eq!(ids[0].as_str(), "42");
        assert_eq!(ids[1].as_str(), "abc-1");
        assert_eq!(ids[2].as_str(), "18446744073709551615");
        assert_eq!(serde_json::to_string(&ids[0]).unwrap(), "\"42\"");
    }

    #[test]
    fn test_error_response_prefers_error_field() {
        let both: ErrorResponse =
            serde_json::from_str(r#"{"error": "Invalid credentials", "message": "ignored"}"#).unwrap();
        assert_eq!(both.text(), Some("Invalid credentials"));

        let legacy: ErrorResponse = serde_json::from_str(r#"{"message": "Email taken"}"#).unwrap();
        assert_eq!(legacy.text(), Some("Email taken"));

        let blank: ErrorResponse = serde_json::from_str(r#"{"error": "  "}"#).unwrap();
        assert_eq!(blank.text(), None);
    }
}
