//! # Cooperative Endpoints

use shared::dto::{
    Appointment, Cooperative, Id, JoinCooperativeRequest, Member, MembershipDecision,
    MembershipStatus, MessageResponse, NewAppointmentRequest,
};

use super::client::{segment, ApiClient};
use crate::error::{AppError, Result};

pub async fn list_cooperatives(client: &ApiClient) -> Result<Vec<Cooperative>> {
    client.get("/api/cooperatives").await
}

/// The cooperative owned by the logged-in user.
pub async fn my_cooperative(client: &ApiClient) -> Result<Cooperative> {
    client.get("/api/cooperatives/mine").await
}

pub async fn list_members(client: &ApiClient, coop_id: &Id) -> Result<Vec<Member>> {
    client
        .get(&format!("/api/cooperatives/{}/members", segment(coop_id.as_str())))
        .await
}

pub async fn decide_membership(
    client: &ApiClient,
    coop_id: &Id,
    member_id: &Id,
    status: MembershipStatus,
) -> Result<Member> {
    if !matches!(status, MembershipStatus::Active | MembershipStatus::Suspended) {
        return Err(AppError::Validation("A membership can only be approved or suspended".to_string()));
    }
    client
        .put(
            &format!(
                "/api/cooperatives/{}/members/{}",
                segment(coop_id.as_str()),
                segment(member_id.as_str())
            ),
            &MembershipDecision { status },
        )
        .await
}

pub async fn join_cooperative(
    client: &ApiClient,
    coop_id: &Id,
    request: &JoinCooperativeRequest,
) -> Result<MessageResponse> {
    client
        .post(&format!("/api/cooperatives/{}/join", segment(coop_id.as_str())), request)
        .await
}

pub async fn list_appointments(client: &ApiClient, coop_id: &Id) -> Result<Vec<Appointment>> {
    client
        .get(&format!("/api/cooperatives/{}/appointments", segment(coop_id.as_str())))
        .await
}

pub async fn create_appointment(
    client: &ApiClient,
    coop_id: &Id,
    request: &NewAppointmentRequest,
) -> Result<Appointment> {
    if request.title.trim().is_empty() || request.scheduled_for.trim().is_empty() {
        return Err(AppError::Validation("Title and date are required".to_string()));
    }
    client
        .post(&format!("/api/cooperatives/{}/appointments", segment(coop_id.as_str())), request)
        .await
}
