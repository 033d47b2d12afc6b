//! Cooperative owner dashboard pages, mounted under `/CoopDashboard`.

pub mod appointments;
pub mod members;
pub mod overview;

pub use appointments::CoopAppointmentsPage;
pub use members::CoopMembersPage;
pub use overview::CoopOverviewPage;

use leptos::prelude::*;

use super::listings::MyListings;
use super::orders::SellerOrders;

#[component]
pub fn CoopProducePage() -> impl IntoView {
    view! { <MyListings title="Cooperative produce"/> }
}

#[component]
pub fn CoopOrdersPage() -> impl IntoView {
    view! { <SellerOrders title="Orders received"/> }
}
