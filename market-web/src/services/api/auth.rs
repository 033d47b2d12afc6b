//! # Authentication Endpoints

use shared::dto::{
    AuthResponse, ForgotPasswordRequest, LoginRequest, MessageResponse, ResetPasswordRequest,
    SignupRequest,
};

use super::client::ApiClient;
use crate::error::{AppError, Result};

pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<AuthResponse> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(AppError::Validation("Enter your email and password".to_string()));
    }
    log::info!("[auth] logging in {}", request.email);
    client.post("/api/auth/login", request).await
}

pub async fn signup(client: &ApiClient, request: &SignupRequest) -> Result<AuthResponse> {
    validate_signup(request)?;
    log::info!("[auth] signing up {} as {}", request.email, request.role.as_str());
    client.post("/api/auth/signup", request).await
}

pub async fn forgot_password(client: &ApiClient, email: &str) -> Result<MessageResponse> {
    let email = email.trim();
    if !looks_like_email(email) {
        return Err(AppError::Validation("Enter a valid email address".to_string()));
    }
    let request = ForgotPasswordRequest { email: email.to_string() };
    client.post("/api/auth/forgot-password", &request).await
}

pub async fn reset_password(client: &ApiClient, request: &ResetPasswordRequest) -> Result<MessageResponse> {
    if request.token.is_empty() {
        return Err(AppError::Validation("This reset link is missing its token".to_string()));
    }
    validate_password(&request.password)?;
    client.post("/api/auth/reset-password", request).await
}

pub const MIN_PASSWORD_LEN: usize = 8;

pub fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

pub fn validate_signup(request: &SignupRequest) -> Result<()> {
    if request.full_name.trim().is_empty() {
        return Err(AppError::Validation("Enter your full name".to_string()));
    }
    if !looks_like_email(request.email.trim()) {
        return Err(AppError::Validation("Enter a valid email address".to_string()));
    }
    validate_password(&request.password)
}

/// Minimal shape check; the backend does the real validation.
pub fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::role::Role;

    fn signup_request() -> SignupRequest {
        SignupRequest {
            full_name: "Achieng Odhiambo".into(),
            email: "achieng@example.com".into(),
            phone: None,
            password: "harvest2026".into(),
            role: Role::Buyer,
        }
    }

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("ab.co"));
        assert!(!looks_like_email("a@.co"));
    }

    #[test]
    fn test_validate_signup() {
        assert!(validate_signup(&signup_request()).is_ok());

        let mut short = signup_request();
        short.password = "short".into();
        assert!(matches!(validate_signup(&short), Err(AppError::Validation(_))));

        let mut nameless = signup_request();
        nameless.full_name = "  ".into();
        assert!(validate_signup(&nameless).is_err());
    }
}
