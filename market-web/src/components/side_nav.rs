//! Dashboard side navigation. Collapsed state is owned by the shell.

use leptos::prelude::*;
use leptos_router::components::A;
use shared::role::Role;

use super::nav_links::nav_links;

#[component]
pub fn SideNav(role: Role, open: RwSignal<bool>) -> impl IntoView {
    let links = nav_links(role);

    view! {
        <aside class=move || if open.get() { "side-nav open" } else { "side-nav collapsed" }>
            <div class="side-nav-brand">
                <span class="brand-agro">"Agro"</span>
                <Show when=move || open.get()>
                    <span class="brand-market">"Market"</span>
                </Show>
            </div>
            <ul class="side-nav-links">
                {links
                    .into_iter()
                    .map(|link| {
                        view! {
                            <li>
                                <A href=link.href attr:title=link.label>
                                    <span class="side-nav-label">{link.label}</span>
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}
