use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::{CoopOwnerLayout, MemberDashboardLayout, PublicLayout};
use crate::routing::{select_layout, LayoutMode};

/// Re-evaluates [`select_layout`] on every navigation. The memo only fires
/// when the mode changes, so moving between pages of one layout keeps that
/// layout (and its shell state) mounted.
#[component]
pub fn LayoutSelector() -> impl IntoView {
    let location = use_location();
    let mode = Memo::new(move |_| select_layout(&location.pathname.get()));

    move || {
        let mode = mode.get();
        log::debug!("[router] mounting {} layout", mode.name());
        match mode {
            LayoutMode::CooperativeOwner => view! { <CoopOwnerLayout/> }.into_any(),
            LayoutMode::MemberDashboard => view! { <MemberDashboardLayout/> }.into_any(),
            LayoutMode::Public => view! { <PublicLayout/> }.into_any(),
        }
    }
}
