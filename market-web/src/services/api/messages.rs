//! # Messaging Endpoints

use shared::dto::{Message, SendMessageRequest};

use super::client::ApiClient;
use crate::error::{AppError, Result};

pub const MAX_MESSAGE_LEN: usize = 2000;

pub async fn list_messages(client: &ApiClient) -> Result<Vec<Message>> {
    client.get("/api/messages").await
}

pub async fn send_message(client: &ApiClient, request: &SendMessageRequest) -> Result<Message> {
    let body = request.body.trim();
    if body.is_empty() {
        return Err(AppError::Validation("Message is empty".to_string()));
    }
    if body.chars().count() > MAX_MESSAGE_LEN {
        return Err(AppError::Validation(format!(
            "Messages are limited to {} characters",
            MAX_MESSAGE_LEN
        )));
    }
    client.post("/api/messages", request).await
}
