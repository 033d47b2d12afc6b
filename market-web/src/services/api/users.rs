//! # User Endpoints

use shared::dto::{Id, UpdateProfileRequest, UserRecord};

use super::client::{segment, ApiClient};
use crate::error::{AppError, Result};

pub async fn get_user(client: &ApiClient, id: &Id) -> Result<UserRecord> {
    client.get(&format!("/api/users/{}", segment(id.as_str()))).await
}

pub async fn update_profile(
    client: &ApiClient,
    id: &Id,
    request: &UpdateProfileRequest,
) -> Result<UserRecord> {
    if request.is_empty() {
        return Err(AppError::Validation("Nothing to update".to_string()));
    }
    client
        .put(&format!("/api/users/{}", segment(id.as_str())), request)
        .await
}
