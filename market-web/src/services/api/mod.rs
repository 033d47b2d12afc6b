//! # Marketplace API
//!
//! One module per backend resource. Every function takes an [`ApiClient`]
//! and returns [`crate::error::Result`]; views decide how to show failures.

pub mod auth;
pub mod client;
pub mod cooperatives;
pub mod crops;
pub mod messages;
pub mod orders;
pub mod organizations;
pub mod transactions;
pub mod users;

pub use client::{use_api_client, ApiClient};

use crate::error::AppError;
use crate::state::session::SessionContext;

/// Log a failed call and end the session if the backend rejected the token.
/// Returns the message to show.
pub fn report_error(err: &AppError, session: &SessionContext) -> String {
    if err.is_unauthorized() && session.is_authenticated() {
        log::warn!("[api] token rejected, ending session");
        session.clear();
    }
    err.user_message()
}
