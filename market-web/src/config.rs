//! Application configuration
//!
//! The client is a static bundle, so configuration is fixed at build time:
//!
//! | Variable          | Default                  |
//! |-------------------|--------------------------|
//! | `AGRO_API_BASE`   | `http://127.0.0.1:5000`  |
//!
//! ```text
//! AGRO_API_BASE=https://api.agro.example trunk build --release
//! ```

use leptos::prelude::*;

use crate::routing::DEFAULT_LANDING;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// localStorage key holding the serialized session user.
pub const USER_STORAGE_KEY: &str = "agro.user";
/// localStorage key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "agro.token";

/// How long success notices stay on screen.
pub const FLASH_TIMEOUT_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub user_storage_key: &'static str,
    pub token_storage_key: &'static str,
    pub default_landing: &'static str,
}

impl AppConfig {
    /// Configuration baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::with_api_base(option_env!("AGRO_API_BASE"))
    }

    fn with_api_base(api_base: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string();

        Self {
            api_base,
            user_storage_key: USER_STORAGE_KEY,
            token_storage_key: TOKEN_STORAGE_KEY,
            default_landing: DEFAULT_LANDING,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_api_base(None)
    }
}

pub fn provide_config(config: AppConfig) {
    provide_context(config);
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.default_landing, "/Home");
        assert!(crate::routing::PublicRoute::ALL
            .iter()
            .any(|r| r.path() == config.default_landing));
    }

    #[test]
    fn test_api_base_is_trimmed() {
        let config = AppConfig::with_api_base(Some(" https://api.agro.example/ "));
        assert_eq!(config.api_base, "https://api.agro.example");

        let blank = AppConfig::with_api_base(Some("   "));
        assert_eq!(blank.api_base, DEFAULT_API_BASE);
    }
}
