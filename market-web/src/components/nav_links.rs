//! Link sets of the dashboard side navigation, one per role.

use shared::role::Role;

use crate::routing::{CoopRoute, MemberRoute, PublicRoute};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
}

impl NavLink {
    fn new(label: &'static str, href: impl Into<String>) -> Self {
        Self { label, href: href.into() }
    }
}

pub fn nav_links(role: Role) -> Vec<NavLink> {
    match role {
        Role::CooperativeOwner => vec![
            NavLink::new("Overview", CoopRoute::Overview.path()),
            NavLink::new("Members", CoopRoute::Members.path()),
            NavLink::new("Appointments", CoopRoute::Appointments.path()),
            NavLink::new("Produce", CoopRoute::Produce.path()),
            NavLink::new("Orders", CoopRoute::Orders.path()),
            NavLink::new("Messages", CoopRoute::Messages.path()),
            NavLink::new("Settings", CoopRoute::Settings.path()),
        ],
        Role::Buyer => vec![
            NavLink::new("Overview", MemberRoute::Overview.path()),
            NavLink::new("Cooperatives", MemberRoute::Cooperatives.path()),
            NavLink::new("Orders", MemberRoute::Orders.path()),
            NavLink::new("Transactions", MemberRoute::Transactions.path()),
            NavLink::new("My profile", MemberRoute::MyProfile.path()),
            NavLink::new("Messages", MemberRoute::Messages.path()),
            NavLink::new("Settings", MemberRoute::Settings.path()),
        ],
        Role::Farmer => vec![
            NavLink::new("Dashboard", PublicRoute::FarmerDashboard.path()),
            NavLink::new("My crops", PublicRoute::FarmerCrops.path()),
            NavLink::new("Orders", PublicRoute::FarmerOrders.path()),
            NavLink::new("Marketplace", PublicRoute::Marketplace.path()),
        ],
        Role::Organization => vec![
            NavLink::new("Dashboard", PublicRoute::OrganizationDashboard.path()),
            NavLink::new("API keys", PublicRoute::OrganizationApiKeys.path()),
            NavLink::new("Marketplace", PublicRoute::Marketplace.path()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::select_layout;

    fn declared_paths() -> Vec<String> {
        PublicRoute::ALL
            .iter()
            .map(|r| r.path().to_string())
            .chain(CoopRoute::ALL.iter().map(CoopRoute::path))
            .chain(
                MemberRoute::ALL
                    .iter()
                    .filter(|r| !r.pattern().contains(':'))
                    .map(MemberRoute::path),
            )
            .collect()
    }

    #[test]
    fn test_every_role_has_links() {
        for role in Role::ALL {
            assert!(!nav_links(role).is_empty(), "{role} has no links");
        }
    }

    #[test]
    fn test_every_link_is_a_declared_route() {
        let declared = declared_paths();
        for role in Role::ALL {
            for link in nav_links(role) {
                assert!(declared.contains(&link.href), "{} -> {} is not routed", link.label, link.href);
            }
        }
    }

    #[test]
    fn test_first_link_is_the_role_home() {
        for role in Role::ALL {
            assert_eq!(nav_links(role)[0].href, role.home_path());
        }
    }

    #[test]
    fn test_dashboard_links_stay_in_their_layout() {
        for role in [Role::CooperativeOwner, Role::Buyer] {
            let home = select_layout(role.home_path());
            for link in nav_links(role) {
                assert_eq!(select_layout(&link.href), home, "{}", link.href);
            }
        }
    }
}
