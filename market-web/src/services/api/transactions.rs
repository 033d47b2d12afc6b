//! # Transaction Endpoints

use shared::dto::Transaction;

use super::client::ApiClient;
use crate::error::Result;

pub async fn list_transactions(client: &ApiClient) -> Result<Vec<Transaction>> {
    client.get("/api/transactions").await
}
