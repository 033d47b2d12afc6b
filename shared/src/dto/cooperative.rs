//! # Cooperative DTOs
//!
//! Cooperatives, their memberships and the appointments an owner schedules
//! with members.

use serde::{Deserialize, Serialize};

use super::Id;

/// A cooperative as listed by `GET /api/cooperatives`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cooperative {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Present on newer endpoints only.
    #[serde(default, alias = "members_count")]
    pub member_count: Option<u32>,
    /// Embedded by the detail endpoint.
    #[serde(default)]
    pub members: Option<Vec<Member>>,
    #[serde(default)]
    pub owner_id: Option<Id>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Membership state of a user in a cooperative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum MembershipStatus {
    Pending,
    Active,
    Suspended,
    Unknown,
}

impl From<String> for MembershipStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" | "requested" => MembershipStatus::Pending,
            "active" | "approved" | "accepted" => MembershipStatus::Active,
            "suspended" | "rejected" | "inactive" => MembershipStatus::Suspended,
            _ => MembershipStatus::Unknown,
        }
    }
}

impl MembershipStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MembershipStatus::Pending => "Pending",
            MembershipStatus::Active => "Active",
            MembershipStatus::Suspended => "Suspended",
            MembershipStatus::Unknown => "Unknown",
        }
    }
}

/// A member row on the owner's members page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
    pub id: Id,
    #[serde(default)]
    pub user_id: Option<Id>,
    #[serde(default, alias = "name")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub status: MembershipStatus,
    #[serde(default)]
    pub joined_at: Option<String>,
}

/// Owner decision on a pending membership.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MembershipDecision {
    pub status: MembershipStatus,
}

/// Buyer request to join a cooperative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct JoinCooperativeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// State of an appointment between an owner and a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    Unknown,
}

impl From<String> for AppointmentStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "scheduled" | "upcoming" | "booked" => AppointmentStatus::Scheduled,
            "completed" | "done" => AppointmentStatus::Completed,
            "cancelled" | "canceled" => AppointmentStatus::Cancelled,
            _ => AppointmentStatus::Unknown,
        }
    }
}

/// A scheduled visit, collection or training session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: Id,
    pub title: String,
    #[serde(default)]
    pub member_name: Option<String>,
    pub scheduled_for: String,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// New appointment form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewAppointmentRequest {
    pub title: String,
    pub member_id: Id,
    pub scheduled_for: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
