//! # Marketplace Roles
//!
//! Every authenticated user holds exactly one [`Role`]. "Not logged in" is not
//! a role; it is the absence of a session and is modeled by the client as
//! `Option<Role>`.
//!
//! The backend has spelled roles several ways over time (`coop_owner`,
//! `cooperativeOwner`, `member`, ...). [`Role::parse`] accepts all of them;
//! serialization always writes the canonical snake_case form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// A marketplace role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Grows and lists produce.
    Farmer,
    /// Buys produce; cooperative members use this role too.
    Buyer,
    /// Administers a cooperative.
    CooperativeOwner,
    /// Consumes the marketplace through API keys.
    Organization,
}

impl Role {
    /// All roles, in the order they appear on the signup form.
    pub const ALL: [Role; 4] = [
        Role::Farmer,
        Role::Buyer,
        Role::CooperativeOwner,
        Role::Organization,
    ];

    /// Parse any spelling of a role the backend is known to send.
    ///
    /// Matching ignores ASCII case, surrounding whitespace, `-`, `_` and spaces.
    ///
    /// ```rust
    /// use shared::role::Role;
    ///
    /// assert_eq!(Role::parse("coop_owner"), Some(Role::CooperativeOwner));
    /// assert_eq!(Role::parse("Cooperative Owner"), Some(Role::CooperativeOwner));
    /// assert_eq!(Role::parse("member"), Some(Role::Buyer));
    /// assert_eq!(Role::parse("admin"), None);
    /// ```
    pub fn parse(raw: &str) -> Option<Role> {
        let key: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "farmer" => Some(Role::Farmer),
            "buyer" | "member" | "coopmember" | "cooperativemember" => Some(Role::Buyer),
            "coopowner" | "cooperativeowner" => Some(Role::CooperativeOwner),
            "organization" | "organisation" | "org" => Some(Role::Organization),
            _ => None,
        }
    }

    /// Canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Farmer => "farmer",
            Role::Buyer => "buyer",
            Role::CooperativeOwner => "cooperative_owner",
            Role::Organization => "organization",
        }
    }

    /// Human readable label for badges and forms.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Farmer => "Farmer",
            Role::Buyer => "Buyer",
            Role::CooperativeOwner => "Cooperative Owner",
            Role::Organization => "Organization",
        }
    }

    /// Path of the dashboard a user with this role lands on after login.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Farmer => "/FarmerDashboard",
            Role::Buyer => "/PetOwnerDashboard",
            Role::CooperativeOwner => "/CoopDashboard",
            Role::Organization => "/OrganizationDashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no known role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {:?}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| UnknownRole(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Role::parse(&raw).ok_or_else(|| serde::de::Error::custom(UnknownRole(raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        let cases = [
            ("farmer", Role::Farmer),
            ("FARMER", Role::Farmer),
            ("buyer", Role::Buyer),
            ("member", Role::Buyer),
            ("coop-member", Role::Buyer),
            ("coop_owner", Role::CooperativeOwner),
            ("cooperative_owner", Role::CooperativeOwner),
            ("cooperativeOwner", Role::CooperativeOwner),
            ("organization", Role::Organization),
            ("organisation", Role::Organization),
            ("org", Role::Organization),
            ("  Farmer  ", Role::Farmer),
        ];
        for (raw, expected) in cases {
            assert_eq!(Role::parse(raw), Some(expected), "alias {raw:?}");
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse("farmers"), None);
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn test_canonical_names_parse_back() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_serde_writes_canonical_and_reads_aliases() {
        let json = serde_json::to_string(&Role::CooperativeOwner).unwrap();
        assert_eq!(json, "\"cooperative_owner\"");

        let role: Role = serde_json::from_str("\"coopOwner\"").unwrap();
        assert_eq!(role, Role::CooperativeOwner);

        assert!(serde_json::from_str::<Role>("\"pirate\"").is_err());
    }

    #[test]
    fn test_home_paths_are_distinct() {
        let mut paths: Vec<_> = Role::ALL.iter().map(|r| r.home_path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), Role::ALL.len());
    }
}
