//! # Organization DTOs
//!
//! Organizations consume the marketplace programmatically. Their dashboard
//! manages API keys and shows request usage against the plan quota.

use serde::{Deserialize, Serialize};

use super::Id;

/// An API key. The secret is only ever returned once, at creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiKey {
    pub id: Id,
    pub label: String,
    /// First characters of the key, safe to display.
    pub prefix: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_used_at: Option<String>,
    #[serde(default)]
    pub revoked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateApiKeyRequest {
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedApiKey {
    pub key: ApiKey,
    pub secret: String,
}

/// Request counts for the current billing period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UsageSummary {
    pub period: String,
    pub requests: u64,
    #[serde(default)]
    pub quota: Option<u64>,
}

impl UsageSummary {
    /// Share of the quota used, clamped to `0..=100`. `None` for unlimited plans.
    pub fn percent_used(&self) -> Option<u8> {
        let quota = self.quota.filter(|q| *q > 0)?;
        let pct = self.requests.saturating_mul(100) / quota;
        Some(pct.min(100) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_used() {
        let usage = |requests, quota| UsageSummary {
            period: "2026-10".into(),
            requests,
            quota,
        };
        assert_eq!(usage(250, Some(1000)).percent_used(), Some(25));
        assert_eq!(usage(5000, Some(1000)).percent_used(), Some(100));
        assert_eq!(usage(10, None).percent_used(), None);
        assert_eq!(usage(10, Some(0)).percent_used(), None);
    }
}
