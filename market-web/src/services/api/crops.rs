//! # Crop Listing Endpoints

use shared::dto::{CropRecord, Id, NewCropRequest};

use super::client::{segment, ApiClient};
use crate::error::Result;

/// All open listings (marketplace).
pub async fn list_crops(client: &ApiClient) -> Result<Vec<CropRecord>> {
    client.get("/api/crops").await
}

/// Listings of the logged-in farmer, or of the owner's cooperative.
pub async fn my_crops(client: &ApiClient) -> Result<Vec<CropRecord>> {
    client.get("/api/crops/mine").await
}

pub async fn create_crop(client: &ApiClient, request: &NewCropRequest) -> Result<CropRecord> {
    client.post("/api/crops", request).await
}

pub async fn delete_crop(client: &ApiClient, id: &Id) -> Result<()> {
    client.delete(&format!("/api/crops/{}", segment(id.as_str()))).await
}
