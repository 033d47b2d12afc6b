//! # Layout Selection
//!
//! Decides which of the three top-level layouts owns a path. The decision is
//! a pure function of the path string: no session, no history, no hidden
//! state. The [`crate::layouts::LayoutSelector`] component re-runs it on
//! every navigation.
//!
//! ```text
//! path starts with /CoopDashboard      ──► CooperativeOwner
//! else path starts with /PetOwnerDashboard ──► MemberDashboard
//! else                                  ──► Public
//! ```
//!
//! Matching is a literal, case-sensitive string prefix test; first match wins.
//! Within each layout, `leptos_router` matches the path against the routes
//! the layout declares (named in [`tables`]) and [`chrome`] decides whether
//! the public navbar and footer are shown.

pub mod chrome;
pub mod guard;
pub mod location;
pub mod tables;

pub use chrome::{chrome_for, Chrome, FOOTER_DENYLIST, NAV_DENYLIST};
pub use guard::{
    check_access, login_redirect, safe_next, Access, Area, AREAS, COOP_OWNER_AREA, FARMER_AREA,
    MEMBER_AREA, ORGANIZATION_AREA,
};
pub use location::RouteLocation;
pub use tables::{decode_param, CoopRoute, MemberRoute, PublicRoute, ID_PARAM};

/// Paths under this prefix belong to the cooperative owner's dashboard.
pub const COOP_OWNER_PREFIX: &str = "/CoopDashboard";

/// Paths under this prefix belong to the buyer / cooperative member dashboard.
pub const MEMBER_DASHBOARD_PREFIX: &str = "/PetOwnerDashboard";

/// Where the public layout sends the root path.
pub const DEFAULT_LANDING: &str = "/Home";

/// The mutually exclusive top-level layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// Cooperative administration; brings its own side and top navigation.
    CooperativeOwner,
    /// Buyer / cooperative member dashboard.
    MemberDashboard,
    /// Everything else: marketing pages, auth, farmer and organization pages.
    Public,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 3] = [
        LayoutMode::CooperativeOwner,
        LayoutMode::MemberDashboard,
        LayoutMode::Public,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LayoutMode::CooperativeOwner => "cooperative-owner",
            LayoutMode::MemberDashboard => "member-dashboard",
            LayoutMode::Public => "public",
        }
    }
}

/// Select the layout for `path`. Total over all strings.
pub fn select_layout(path: &str) -> LayoutMode {
    if path.starts_with(COOP_OWNER_PREFIX) {
        LayoutMode::CooperativeOwner
    } else if path.starts_with(MEMBER_DASHBOARD_PREFIX) {
        LayoutMode::MemberDashboard
    } else {
        LayoutMode::Public
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_prefixes_select_dashboards() {
        assert_eq!(select_layout("/CoopDashboard"), LayoutMode::CooperativeOwner);
        assert_eq!(select_layout("/CoopDashboard/Members"), LayoutMode::CooperativeOwner);
        assert_eq!(select_layout("/PetOwnerDashboard"), LayoutMode::MemberDashboard);
        assert_eq!(
            select_layout("/PetOwnerDashboard/PetProfile/42"),
            LayoutMode::MemberDashboard
        );
    }

    #[test]
    fn test_everything_else_is_public() {
        for path in ["/", "", "/Home", "/Login", "/SomeUnknownPath", "/FarmerDashboard", "CoopDashboard"] {
            assert_eq!(select_layout(path), LayoutMode::Public, "path {path:?}");
        }
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert_eq!(select_layout("/coopdashboard/Members"), LayoutMode::Public);
        assert_eq!(select_layout("/PETOWNERDASHBOARD"), LayoutMode::Public);
    }

    #[test]
    fn test_match_is_a_literal_prefix() {
        assert_eq!(select_layout("/CoopDashboardArchive"), LayoutMode::CooperativeOwner);
    }

    #[test]
    fn test_prefixes_do_not_overlap() {
        assert!(!COOP_OWNER_PREFIX.starts_with(MEMBER_DASHBOARD_PREFIX));
        assert!(!MEMBER_DASHBOARD_PREFIX.starts_with(COOP_OWNER_PREFIX));
        assert_eq!(select_layout(DEFAULT_LANDING), LayoutMode::Public);
    }

    proptest! {
        #[test]
        fn coop_prefix_always_wins(rest in ".*") {
            let path = format!("{COOP_OWNER_PREFIX}{rest}");
            prop_assert_eq!(select_layout(&path), LayoutMode::CooperativeOwner);
        }

        #[test]
        fn member_prefix_selects_member_dashboard(rest in ".*") {
            let path = format!("{MEMBER_DASHBOARD_PREFIX}{rest}");
            prop_assert_eq!(select_layout(&path), LayoutMode::MemberDashboard);
        }

        #[test]
        fn exactly_one_layout_and_stable(path in ".*") {
            let first = select_layout(&path);
            let matching = LayoutMode::ALL.iter().filter(|m| **m == first).count();
            prop_assert_eq!(matching, 1);
            prop_assert_eq!(first, select_layout(&path));

            let expected = if path.starts_with(COOP_OWNER_PREFIX) {
                LayoutMode::CooperativeOwner
            } else if path.starts_with(MEMBER_DASHBOARD_PREFIX) {
                LayoutMode::MemberDashboard
            } else {
                LayoutMode::Public
            };
            prop_assert_eq!(first, expected);
        }
    }
}
