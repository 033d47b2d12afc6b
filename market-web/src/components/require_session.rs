//! Gate for views that need a logged-in user of a given role.

use leptos::prelude::*;
use leptos_router::components::{Redirect, A};
use leptos_router::hooks::use_location;
use shared::role::Role;

use crate::routing::{check_access, login_redirect, Access};
use crate::state::session::use_session_context;

/// Renders `children` for a session whose role is in `allowed` (any role
/// when empty). Without a session the user is sent to the login page and
/// brought back afterwards.
#[component]
pub fn RequireSession(
    #[prop(optional)] allowed: &'static [Role],
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session_context();
    let location = use_location();
    let access = Memo::new(move |_| check_access(session.role(), allowed));

    move || match access.get() {
        Access::Granted => children().into_any(),
        Access::LoginRequired => {
            let target = login_redirect(&location.pathname.get_untracked());
            log::info!("[router] no session, redirecting to {}", target);
            view! { <Redirect path=target/> }.into_any()
        }
        Access::WrongRole(role) => view! {
            <div class="not-found">
                <div class="card">
                    <h1>"Not available"</h1>
                    <p>{format!("This area is not part of the {} account.", role.label().to_lowercase())}</p>
                    <A href=role.home_path()>
                        <span class="btn">"Go to my dashboard"</span>
                    </A>
                </div>
            </div>
        }
            .into_any(),
    }
}
