//! Access checks for session-only views.
//!
//! Layout selection never looks at the session; the views a layout mounts
//! do, through [`check_access`].

use shared::role::Role;

use super::PublicRoute;

/// Outcome of checking the current session against a view's audience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    LoginRequired,
    /// Logged in, but the view belongs to another role.
    WrongRole(Role),
}

/// A guarded group of views: the roles admitted and the role whose
/// dashboard shell frames them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Area {
    pub shell: Role,
    pub allowed: &'static [Role],
}

pub const COOP_OWNER_AREA: Area = Area {
    shell: Role::CooperativeOwner,
    allowed: &[Role::CooperativeOwner],
};

/// Buyers, who join cooperatives and order from them.
pub const MEMBER_AREA: Area = Area {
    shell: Role::Buyer,
    allowed: &[Role::Buyer],
};

pub const FARMER_AREA: Area = Area {
    shell: Role::Farmer,
    allowed: &[Role::Farmer],
};

pub const ORGANIZATION_AREA: Area = Area {
    shell: Role::Organization,
    allowed: &[Role::Organization],
};

pub const AREAS: [Area; 4] = [COOP_OWNER_AREA, MEMBER_AREA, FARMER_AREA, ORGANIZATION_AREA];

pub fn check_access(session_role: Option<Role>, allowed: &[Role]) -> Access {
    match session_role {
        None => Access::LoginRequired,
        Some(role) if allowed.is_empty() || allowed.contains(&role) => Access::Granted,
        Some(role) => Access::WrongRole(role),
    }
}

/// Login path that returns to `current` afterwards.
pub fn login_redirect(current: &str) -> String {
    format!("{}?next={}", PublicRoute::Login.path(), urlencoding::encode(current))
}

/// Accept a `next` target only if it is a local absolute path.
///
/// Browsers drop tabs and newlines from URLs, so `/\t/host` would become the
/// protocol-relative `//host`; any control character or whitespace rejects
/// the target.
pub fn safe_next(next: Option<String>) -> Option<String> {
    next.filter(|n| {
        n.starts_with('/')
            && !n.starts_with("//")
            && !n.contains('\\')
            && !n.chars().any(|c| c.is_control() || c.is_whitespace())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_access() {
        let coop = [Role::CooperativeOwner];
        assert_eq!(check_access(None, &coop), Access::LoginRequired);
        assert_eq!(check_access(Some(Role::CooperativeOwner), &coop), Access::Granted);
        assert_eq!(check_access(Some(Role::Buyer), &coop), Access::WrongRole(Role::Buyer));
        assert_eq!(check_access(Some(Role::Organization), &[]), Access::Granted);
    }

    #[test]
    fn test_login_redirect_round_trip() {
        let target = login_redirect("/CoopDashboard/Members");
        assert_eq!(target, "/Login?next=%2FCoopDashboard%2FMembers");

        let location = crate::routing::RouteLocation::parse(&target);
        assert_eq!(location.pathname, "/Login");
        assert_eq!(
            safe_next(location.query_param("next").map(str::to_string)).as_deref(),
            Some("/CoopDashboard/Members")
        );
    }

    #[test]
    fn test_safe_next_rejects_foreign_targets() {
        assert_eq!(safe_next(None), None);
        assert_eq!(safe_next(Some("https://evil.example".into())), None);
        assert_eq!(safe_next(Some("//evil.example".into())), None);
        assert_eq!(safe_next(Some("/\\evil.example".into())), None);
        assert_eq!(safe_next(Some("/Home".into())).as_deref(), Some("/Home"));
    }

    #[test]
    fn test_safe_next_rejects_stripped_characters() {
        // Arrange: targets a browser would collapse into `//evil.example`
        let encoded = [
            "/Login?next=%2F%09%2Fevil.example",
            "/Login?next=%2F%0A%2Fevil.example",
            "/Login?next=%2F%0D%2Fevil.example",
        ];

        for href in encoded {
            // Act
            let location = crate::routing::RouteLocation::parse(href);
            let next = safe_next(location.query_param("next").map(str::to_string));

            // Assert
            assert_eq!(next, None, "{href}");
        }

        assert_eq!(safe_next(Some("/\t/evil.example".into())), None);
        assert_eq!(safe_next(Some("/\n/evil.example".into())), None);
        assert_eq!(safe_next(Some("/Market place".into())), None);
        assert_eq!(safe_next(Some("/\u{0}x".into())), None);
    }

    #[test]
    fn test_every_admitted_role_sees_its_own_shell() {
        for area in AREAS {
            assert!(!area.allowed.is_empty());
            for role in area.allowed {
                assert_eq!(*role, area.shell, "{role} would be shown the {} shell", area.shell);
            }
        }
    }

    #[test]
    fn test_every_role_has_exactly_one_area() {
        for role in Role::ALL {
            let areas = AREAS.iter().filter(|a| a.allowed.contains(&role)).count();
            assert_eq!(areas, 1, "{role}");
        }
    }
}
