//! # User DTOs
//!
//! [`UserRecord`] mirrors whatever the backend returns for a user. Depending on
//! the endpoint and the account's age, the name may arrive as `full_name`, as
//! `first_name`/`last_name`, or only as `username`, and the role under one of
//! three keys. Every field is optional here; [`crate::normalize::normalize_user`]
//! picks the winner.

use serde::{Deserialize, Serialize};

use super::Id;

/// Raw user record as sent by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UserRecord {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooperative_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Profile form submission. Omitted fields are left unchanged server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl UpdateProfileRequest {
    /// Build a request from raw form text, dropping blank fields.
    pub fn from_form(full_name: &str, phone: &str, location: &str, bio: &str) -> Self {
        let keep = |s: &str| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        Self {
            full_name: keep(full_name),
            phone: keep(phone),
            location: keep(location),
            bio: keep(bio),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.phone.is_none() && self.location.is_none() && self.bio.is_none()
    }

    /// Apply the submitted fields to a local copy of the record, as the backend would.
    pub fn apply_to(&self, record: &mut UserRecord) {
        if let Some(name) = &self.full_name {
            record.full_name = Some(name.clone());
        }
        if let Some(phone) = &self.phone {
            record.phone = Some(phone.clone());
        }
        if let Some(location) = &self.location {
            record.location = Some(location.clone());
        }
        if let Some(bio) = &self.bio {
            record.bio = Some(bio.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_record_tolerates_sparse_payload() {
        let record: UserRecord = serde_json::from_str(r#"{"id": 3, "username": "otieno"}"#).unwrap();
        assert_eq!(record.id.as_str(), "3");
        assert_eq!(record.username.as_deref(), Some("otieno"));
        assert!(record.full_name.is_none());
    }

    #[test]
    fn test_update_profile_drops_blank_fields() {
        let request = UpdateProfileRequest::from_form("  Achieng Odhiambo ", "", "Kisumu", "   ");
        assert_eq!(request.full_name.as_deref(), Some("Achieng Odhiambo"));
        assert_eq!(request.phone, None);
        assert_eq!(request.location.as_deref(), Some("Kisumu"));
        assert_eq!(request.bio, None);

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("phone").is_none());

        assert!(UpdateProfileRequest::from_form("", " ", "", "").is_empty());
    }

    #[test]
    fn test_apply_to_keeps_untouched_fields() {
        let mut record = UserRecord {
            id: Id::from(1),
            full_name: Some("Old Name".into()),
            phone: Some("0700000000".into()),
            ..Default::default()
        };
        UpdateProfileRequest::from_form("New Name", "", "", "").apply_to(&mut record);
        assert_eq!(record.full_name.as_deref(), Some("New Name"));
        assert_eq!(record.phone.as_deref(), Some("0700000000"));
    }
}
