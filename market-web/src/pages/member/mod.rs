//! Member dashboard pages, mounted under `/PetOwnerDashboard`.

pub mod cooperatives;
pub mod order_detail;
pub mod orders;
pub mod overview;
pub mod profile;
pub mod transactions;

pub use cooperatives::MemberCooperativesPage;
pub use order_detail::OrderDetailPage;
pub use orders::MemberOrdersPage;
pub use overview::MemberOverviewPage;
pub use profile::{MyProfilePage, ProfileDetailPage};
pub use transactions::TransactionsPage;
