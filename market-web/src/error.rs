//! # Client Error Types
//!
//! [`AppError`] covers everything that can go wrong in the client: talking to
//! the backend, reading browser storage, and validating forms. Views never
//! show the `Display` text of an error directly; they call
//! [`AppError::user_message`].
//!
//! ## Error Categories
//!
//! - **Network**: the request never got a response (backend down, CORS)
//! - **Http**: the backend answered with a non-2xx status
//! - **Unauthorized**: the backend rejected the session token (401)
//! - **Decode**: a 2xx body did not match the expected shape
//! - **Storage**: localStorage unavailable or full
//! - **Validation**: a form value was rejected before sending

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Map a non-2xx response to an error, keeping the backend's text when it gave one.
    pub fn from_status(status: u16, backend_text: Option<&str>) -> Self {
        let message = backend_text
            .map(str::to_string)
            .unwrap_or_else(|| default_status_text(status).to_string());
        if status == 401 {
            AppError::Unauthorized(message)
        } else {
            AppError::Http { status, message }
        }
    }

    /// Text suitable for showing in the UI.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(_) => {
                "Could not reach the marketplace server. Check your connection and try again.".to_string()
            }
            AppError::Http { status, .. } if *status >= 500 => {
                "The server ran into a problem. Please try again shortly.".to_string()
            }
            AppError::Http { message, .. } => message.clone(),
            AppError::Unauthorized(_) => "Your session has expired. Please log in again.".to_string(),
            AppError::Decode(_) => "Received an unexpected response from the server.".to_string(),
            AppError::Storage(_) => "Your browser blocked local storage; you may be logged out on reload.".to_string(),
            AppError::Validation(message) => message.clone(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Unauthorized(_))
    }
}

fn default_status_text(status: u16) -> &'static str {
    match status {
        400 => "The request was invalid",
        401 => "Not logged in",
        403 => "You do not have access to this resource",
        404 => "Not found",
        409 => "This conflicts with existing data",
        422 => "Some fields are invalid",
        429 => "Too many requests, slow down",
        500..=599 => "Server error",
        _ => "Request failed",
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => AppError::Decode(e.to_string()),
            other => AppError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(
            AppError::from_status(409, Some("Email already registered")),
            AppError::Http { status: 409, message: "Email already registered".into() }
        );
        assert!(AppError::from_status(401, None).is_unauthorized());
        assert_eq!(
            AppError::from_status(404, None),
            AppError::Http { status: 404, message: "Not found".into() }
        );
    }

    #[test]
    fn test_user_message_hides_server_details() {
        let err = AppError::Http { status: 503, message: "upstream pool exhausted".into() };
        assert!(!err.user_message().contains("pool"));

        let err = AppError::Http { status: 400, message: "Password too short".into() };
        assert_eq!(err.user_message(), "Password too short");

        assert_eq!(AppError::Validation("Pick a role".into()).user_message(), "Pick a role");
    }

    #[test]
    fn test_display() {
        let err = AppError::Http { status: 404, message: "Not found".into() };
        assert_eq!(err.to_string(), "HTTP 404: Not found");
        assert_eq!(AppError::Network("refused".into()).to_string(), "Network error: refused");
    }
}
