//! # Route Tables
//!
//! One closed enum per layout, naming every view the layout mounts. Each
//! layout declares its `<Routes>` with `path!` literals equal to
//! [`pattern`](CoopRoute::pattern); `path` builds the concrete link target,
//! so navigation links can only point at views the layout declares.
//!
//! Paths inside a layout that match no route render that layout's
//! `NotFound` fallback; the layout itself stays mounted.

use super::{COOP_OWNER_PREFIX, MEMBER_DASHBOARD_PREFIX};

/// Route parameter name of detail views.
pub const ID_PARAM: &str = "id";

/// Decode a path parameter the router hands over still percent-encoded.
pub fn decode_param(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Views of the public layout. The root path is not a view: the layout
/// redirects it to the default landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicRoute {
    Home,
    Login,
    Signup,
    ForgotPassword,
    ResetPassword,
    About,
    Contact,
    Marketplace,
    FarmerDashboard,
    FarmerCrops,
    FarmerOrders,
    OrganizationDashboard,
    OrganizationApiKeys,
}

impl PublicRoute {
    pub const ALL: [PublicRoute; 13] = [
        PublicRoute::Home,
        PublicRoute::Login,
        PublicRoute::Signup,
        PublicRoute::ForgotPassword,
        PublicRoute::ResetPassword,
        PublicRoute::About,
        PublicRoute::Contact,
        PublicRoute::Marketplace,
        PublicRoute::FarmerDashboard,
        PublicRoute::FarmerCrops,
        PublicRoute::FarmerOrders,
        PublicRoute::OrganizationDashboard,
        PublicRoute::OrganizationApiKeys,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            PublicRoute::Home => "/Home",
            PublicRoute::Login => "/Login",
            PublicRoute::Signup => "/Signup",
            PublicRoute::ForgotPassword => "/ForgotPassword",
            PublicRoute::ResetPassword => "/ResetPassword",
            PublicRoute::About => "/About",
            PublicRoute::Contact => "/Contact",
            PublicRoute::Marketplace => "/Marketplace",
            PublicRoute::FarmerDashboard => "/FarmerDashboard",
            PublicRoute::FarmerCrops => "/FarmerCrops",
            PublicRoute::FarmerOrders => "/FarmerOrders",
            PublicRoute::OrganizationDashboard => "/OrganizationDashboard",
            PublicRoute::OrganizationApiKeys => "/OrganizationApiKeys",
        }
    }

    /// Public routes are all static.
    pub fn pattern(&self) -> &'static str {
        self.path()
    }
}

/// Views of the cooperative owner's dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoopRoute {
    Overview,
    Members,
    Appointments,
    Produce,
    Orders,
    Messages,
    Settings,
}

impl CoopRoute {
    pub const ALL: [CoopRoute; 7] = [
        CoopRoute::Overview,
        CoopRoute::Members,
        CoopRoute::Appointments,
        CoopRoute::Produce,
        CoopRoute::Orders,
        CoopRoute::Messages,
        CoopRoute::Settings,
    ];

    pub fn pattern(&self) -> &'static str {
        match self {
            CoopRoute::Overview => "/CoopDashboard",
            CoopRoute::Members => "/CoopDashboard/Members",
            CoopRoute::Appointments => "/CoopDashboard/Appointments",
            CoopRoute::Produce => "/CoopDashboard/Produce",
            CoopRoute::Orders => "/CoopDashboard/Orders",
            CoopRoute::Messages => "/CoopDashboard/Messages",
            CoopRoute::Settings => "/CoopDashboard/Settings",
        }
    }

    pub fn path(&self) -> String {
        self.pattern().to_string()
    }
}

/// Views of the buyer / cooperative member dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberRoute {
    Overview,
    Cooperatives,
    Orders,
    OrderDetail { id: String },
    MyProfile,
    ProfileDetail { id: String },
    Transactions,
    Messages,
    Settings,
}

impl MemberRoute {
    /// Every view once; detail views carry an empty id.
    pub const ALL: [MemberRoute; 9] = [
        MemberRoute::Overview,
        MemberRoute::Cooperatives,
        MemberRoute::Orders,
        MemberRoute::OrderDetail { id: String::new() },
        MemberRoute::MyProfile,
        MemberRoute::ProfileDetail { id: String::new() },
        MemberRoute::Transactions,
        MemberRoute::Messages,
        MemberRoute::Settings,
    ];

    pub fn pattern(&self) -> &'static str {
        match self {
            MemberRoute::Overview => "/PetOwnerDashboard",
            MemberRoute::Cooperatives => "/PetOwnerDashboard/Cooperatives",
            MemberRoute::Orders => "/PetOwnerDashboard/Orders",
            MemberRoute::OrderDetail { .. } => "/PetOwnerDashboard/Orders/:id",
            MemberRoute::MyProfile => "/PetOwnerDashboard/PetProfile",
            MemberRoute::ProfileDetail { .. } => "/PetOwnerDashboard/PetProfile/:id",
            MemberRoute::Transactions => "/PetOwnerDashboard/Transactions",
            MemberRoute::Messages => "/PetOwnerDashboard/Messages",
            MemberRoute::Settings => "/PetOwnerDashboard/Settings",
        }
    }

    pub fn path(&self) -> String {
        match self {
            MemberRoute::OrderDetail { id } => {
                format!("{MEMBER_DASHBOARD_PREFIX}/Orders/{}", urlencoding::encode(id))
            }
            MemberRoute::ProfileDetail { id } => {
                format!("{MEMBER_DASHBOARD_PREFIX}/PetProfile/{}", urlencoding::encode(id))
            }
            other => other.pattern().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{select_layout, LayoutMode};

    #[test]
    fn test_patterns_live_under_their_prefix() {
        for route in CoopRoute::ALL {
            assert!(route.pattern().starts_with(COOP_OWNER_PREFIX));
            assert_eq!(select_layout(&route.path()), LayoutMode::CooperativeOwner);
        }
        for route in MemberRoute::ALL {
            assert!(route.pattern().starts_with(MEMBER_DASHBOARD_PREFIX));
            assert_eq!(select_layout(&route.path()), LayoutMode::MemberDashboard);
        }
        for route in PublicRoute::ALL {
            assert_eq!(select_layout(route.path()), LayoutMode::Public, "{}", route.path());
        }
    }

    #[test]
    fn test_patterns_are_unique() {
        let mut patterns: Vec<&str> = PublicRoute::ALL
            .iter()
            .map(PublicRoute::pattern)
            .chain(CoopRoute::ALL.iter().map(CoopRoute::pattern))
            .chain(MemberRoute::ALL.iter().map(MemberRoute::pattern))
            .collect();
        let total = patterns.len();
        patterns.sort();
        patterns.dedup();
        assert_eq!(patterns.len(), total);
    }

    #[test]
    fn test_detail_paths_encode_the_id() {
        assert_eq!(
            MemberRoute::ProfileDetail { id: "42".into() }.path(),
            "/PetOwnerDashboard/PetProfile/42"
        );
        assert_eq!(
            MemberRoute::OrderDetail { id: "farm plot/7".into() }.path(),
            "/PetOwnerDashboard/Orders/farm%20plot%2F7"
        );
    }

    #[test]
    fn test_decode_param() {
        assert_eq!(decode_param("farm%20plot%2F7"), "farm plot/7");
        assert_eq!(decode_param("ord-9"), "ord-9");
        // invalid UTF-8 escapes pass through untouched
        assert_eq!(decode_param("%FF"), "%FF");
    }
}
