//! Pure helpers used across views.

pub mod display;
pub mod format;
pub mod url;
