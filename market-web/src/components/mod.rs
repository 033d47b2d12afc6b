//! UI Components

pub mod dashboard_shell;
pub mod flash;
pub mod footer;
pub mod loading;
pub mod nav_links;
pub mod not_found;
pub mod public_navbar;
pub mod require_session;
pub mod role_badge;
pub mod side_nav;
pub mod status_pill;
pub mod top_nav;

pub use dashboard_shell::DashboardShell;
pub use flash::{Flash, Notice};
pub use footer::Footer;
pub use loading::{loaded, ErrorNotice, Loading};
pub use nav_links::{nav_links, NavLink};
pub use not_found::NotFound;
pub use public_navbar::PublicNavbar;
pub use require_session::RequireSession;
pub use role_badge::RoleBadge;
pub use side_nav::SideNav;
pub use status_pill::StatusPill;
pub use top_nav::TopNav;
