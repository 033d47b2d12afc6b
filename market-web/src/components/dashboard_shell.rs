//! Side and top navigation around a dashboard view.

use leptos::prelude::*;
use shared::role::Role;

use super::side_nav::SideNav;
use super::top_nav::TopNav;

#[component]
pub fn DashboardShell(role: Role, children: Children) -> impl IntoView {
    let open = RwSignal::new(true);

    view! {
        <div class=move || if open.get() { "dashboard" } else { "dashboard nav-collapsed" }>
            <SideNav role=role open=open/>
            <div class="dashboard-main">
                <TopNav title=format!("{} dashboard", role.label()) open=open/>
                <main class="dashboard-content">{children()}</main>
            </div>
        </div>
    }
}
