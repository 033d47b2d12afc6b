use leptos::prelude::*;
use shared::role::Role;

use crate::utils::display::role_badge;

#[component]
pub fn RoleBadge(role: Role) -> impl IntoView {
    let badge = role_badge(role);
    view! { <span class=badge.class>{badge.label}</span> }
}
