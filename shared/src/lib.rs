//! # Shared Marketplace Contract
//!
//! This library defines the contract between the browser client and the
//! marketplace REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, signup and password reset
//!   - **[`dto::user`]**: User records and profile updates
//!   - **[`dto::cooperative`]**: Cooperatives, members, appointments
//!   - **[`dto::crop`]**: Crop listings
//!   - **[`dto::order`]**: Orders and status transitions
//!   - **[`dto::transaction`]**: Payment ledger entries (display only)
//!   - **[`dto::messaging`]**: Direct messages
//!   - **[`dto::organization`]**: API keys and usage for organizations
//! - **[`role`]**: The closed set of marketplace roles
//! - **[`normalize`]**: Turns loosely-shaped backend records into typed display records
//! - **[`utils`]**: Small display helpers
//!
//! ## Wire Format
//!
//! - Field names are **snake_case**, the backend's convention
//! - Optional fields are omitted when `None`
//! - Records the backend returns in several shapes (users, crops) are modeled
//!   with all-optional fields and go through [`normalize`] before display
//!
//! ## Usage in the Frontend
//!
//! ```rust
//! use shared::dto::user::UserRecord;
//! use shared::normalize::normalize_user;
//! use shared::role::Role;
//!
//! let record: UserRecord = serde_json::from_str(
//!     r#"{"id": 7, "first_name": "Wanjiru", "last_name": "Kamau", "user_type": "farmer"}"#,
//! ).unwrap();
//!
//! let profile = normalize_user(&record);
//! assert_eq!(profile.display_name, "Wanjiru Kamau");
//! assert_eq!(profile.role, Role::Farmer);
//! ```

pub mod dto;
pub mod normalize;
pub mod role;
pub mod utils;

pub use dto::*;
pub use role::Role;
pub use utils::*;
