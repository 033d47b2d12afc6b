//! Feature views. Each page fetches its own data through the API client.

pub mod coop;
pub mod farmer;
pub mod listings;
pub mod member;
pub mod messages;
pub mod orders;
pub mod organization;
pub mod public;
pub mod settings;
