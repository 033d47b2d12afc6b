//! # Organization Endpoints

use shared::dto::{ApiKey, CreateApiKeyRequest, CreatedApiKey, Id, UsageSummary};

use super::client::{segment, ApiClient};
use crate::error::{AppError, Result};

pub async fn list_api_keys(client: &ApiClient) -> Result<Vec<ApiKey>> {
    client.get("/api/organizations/me/keys").await
}

pub async fn create_api_key(client: &ApiClient, label: &str) -> Result<CreatedApiKey> {
    let label = label.trim();
    if label.is_empty() {
        return Err(AppError::Validation("Give the key a label".to_string()));
    }
    let request = CreateApiKeyRequest { label: label.to_string() };
    client.post("/api/organizations/me/keys", &request).await
}

pub async fn revoke_api_key(client: &ApiClient, id: &Id) -> Result<()> {
    client
        .delete(&format!("/api/organizations/me/keys/{}", segment(id.as_str())))
        .await
}

pub async fn usage(client: &ApiClient) -> Result<UsageSummary> {
    client.get("/api/organizations/me/usage").await
}
