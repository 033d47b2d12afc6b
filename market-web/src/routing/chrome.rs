//! Public layout chrome: whether the top navbar and the footer are shown.
//!
//! Both checks are exact path membership, independent of each other. Auth
//! pages and the flat farmer/organization dashboards bring their own chrome.
//! The marketplace keeps the navbar but drops the footer: its listing grid
//! fills the page.

pub const NAV_DENYLIST: &[&str] = &[
    "/Login",
    "/Signup",
    "/ForgotPassword",
    "/ResetPassword",
    "/FarmerDashboard",
    "/FarmerCrops",
    "/FarmerOrders",
    "/OrganizationDashboard",
    "/OrganizationApiKeys",
];

/// The navbar list plus `/Marketplace`.
pub const FOOTER_DENYLIST: &[&str] = &[
    "/Login",
    "/Signup",
    "/ForgotPassword",
    "/ResetPassword",
    "/Marketplace",
    "/FarmerDashboard",
    "/FarmerCrops",
    "/FarmerOrders",
    "/OrganizationDashboard",
    "/OrganizationApiKeys",
];

/// Visibility of the public layout's chrome for one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub nav: bool,
    pub footer: bool,
}

pub fn chrome_for(path: &str) -> Chrome {
    Chrome {
        nav: !NAV_DENYLIST.iter().any(|p| *p == path),
        footer: !FOOTER_DENYLIST.iter().any(|p| *p == path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{select_layout, LayoutMode};
    use proptest::prelude::*;

    #[test]
    fn test_auth_pages_hide_both() {
        assert_eq!(chrome_for("/Login"), Chrome { nav: false, footer: false });
        assert_eq!(chrome_for("/Signup"), Chrome { nav: false, footer: false });
    }

    #[test]
    fn test_regular_pages_show_both() {
        assert_eq!(chrome_for("/Home"), Chrome { nav: true, footer: true });
        assert_eq!(chrome_for("/SomeUnknownPath"), Chrome { nav: true, footer: true });
    }

    #[test]
    fn test_checks_are_independent() {
        assert_eq!(chrome_for("/Marketplace"), Chrome { nav: true, footer: false });
    }

    #[test]
    fn test_membership_is_exact() {
        assert!(chrome_for("/Login/").nav);
        assert!(chrome_for("/login").nav);
        assert!(chrome_for("/LoginHelp").footer);
    }

    #[test]
    fn test_every_denylisted_path_is_reachable_in_public_layout() {
        for path in NAV_DENYLIST.iter().chain(FOOTER_DENYLIST) {
            assert_eq!(select_layout(path), LayoutMode::Public, "{path} is shadowed by a dashboard prefix");
        }
    }

    #[test]
    fn test_every_entry_suppresses_its_chrome() {
        for path in NAV_DENYLIST {
            assert!(!chrome_for(path).nav);
        }
        for path in FOOTER_DENYLIST {
            assert!(!chrome_for(path).footer);
        }
    }

    #[test]
    fn test_footer_list_is_nav_list_plus_marketplace() {
        let mut expected: Vec<&str> = NAV_DENYLIST.to_vec();
        expected.push("/Marketplace");
        expected.sort();
        let mut footer = FOOTER_DENYLIST.to_vec();
        footer.sort();
        assert_eq!(footer, expected);
    }

    proptest! {
        #[test]
        fn paths_outside_both_lists_show_full_chrome(path in ".*") {
            prop_assume!(!NAV_DENYLIST.contains(&path.as_str()));
            prop_assume!(!FOOTER_DENYLIST.contains(&path.as_str()));
            prop_assert_eq!(chrome_for(&path), Chrome { nav: true, footer: true });
        }

        #[test]
        fn near_misses_of_listed_paths_show_full_chrome(
            listed in prop::sample::select(FOOTER_DENYLIST),
            suffix in "[/A-Za-z0-9?#]{1,8}",
        ) {
            let path = format!("{listed}{suffix}");
            prop_assume!(!FOOTER_DENYLIST.contains(&path.as_str()));
            prop_assert_eq!(chrome_for(&path), Chrome { nav: true, footer: true });
        }

        #[test]
        fn listed_paths_follow_their_own_list(listed in prop::sample::select(FOOTER_DENYLIST)) {
            let chrome = chrome_for(listed);
            prop_assert!(!chrome.footer);
            prop_assert_eq!(chrome.nav, !NAV_DENYLIST.contains(&listed));
        }
    }
}
