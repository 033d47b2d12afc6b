//! # API Client
//!
//! Thin HTTP client for the marketplace REST API.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::dto::ErrorResponse;

use crate::config::use_config;
use crate::error::{AppError, Result};
use crate::state::session::use_session_context;

/// HTTP client for communicating with the backend API server.
///
/// Cheap to build; views create one per request batch from context with
/// [`use_api_client`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Absolute URL of an API path such as `/api/orders`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        log::debug!("[api] GET {}", path);
        let response = self.authorize(Request::get(&self.url(path))).send().await?;
        read_json(path, response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        log::debug!("[api] POST {}", path);
        let response = self
            .authorize(Request::post(&self.url(path)))
            .json(body)?
            .send()
            .await?;
        read_json(path, response).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        log::debug!("[api] PUT {}", path);
        let response = self
            .authorize(Request::put(&self.url(path)))
            .json(body)?
            .send()
            .await?;
        read_json(path, response).await
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        log::debug!("[api] DELETE {}", path);
        let response = self.authorize(Request::delete(&self.url(path))).send().await?;
        check_status(path, &response).await
    }
}

async fn read_json<T: DeserializeOwned>(path: &str, response: Response) -> Result<T> {
    check_status(path, &response).await?;
    response.json::<T>().await.map_err(|e| {
        log::error!("[api] {} returned an unexpected body: {}", path, e);
        AppError::from(e)
    })
}

async fn check_status(path: &str, response: &Response) -> Result<()> {
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let parsed = serde_json::from_str::<ErrorResponse>(&body).ok();
    let err = AppError::from_status(status, parsed.as_ref().and_then(ErrorResponse::text));
    log::warn!("[api] {} failed: {}", path, err);
    Err(err)
}

/// Client configured from context: API base from [`crate::config::AppConfig`],
/// bearer token from the current session.
pub fn use_api_client() -> ApiClient {
    let config = use_config();
    let token = use_session_context().token();
    ApiClient::new(config.api_base, token)
}

/// Encode a value for use as one path segment.
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("http://127.0.0.1:5000/", None);
        assert_eq!(client.url("/api/orders"), "http://127.0.0.1:5000/api/orders");
        assert_eq!(client.url("api/orders"), "http://127.0.0.1:5000/api/orders");
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("42"), "42");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }
}
