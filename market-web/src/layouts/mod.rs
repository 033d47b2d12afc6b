//! # Layouts
//!
//! [`LayoutSelector`] mounts exactly one of the three layouts for the current
//! path. Each layout declares its own `<Routes>` table with a `NotFound`
//! fallback, so unknown paths under a dashboard prefix keep that dashboard.

pub mod coop_owner;
pub mod member_dashboard;
pub mod public;
pub mod selector;

pub use coop_owner::CoopOwnerLayout;
pub use member_dashboard::MemberDashboardLayout;
pub use public::PublicLayout;
pub use selector::LayoutSelector;
