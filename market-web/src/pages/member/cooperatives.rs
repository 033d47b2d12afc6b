//! Browse cooperatives and ask to join one.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::dto::{Cooperative, JoinCooperativeRequest};
use shared::normalize::membership_count;

use crate::components::{loaded, Flash, Notice};
use crate::services::api::{cooperatives, report_error, use_api_client};
use crate::state::session::use_session_context;

#[component]
pub fn MemberCooperativesPage() -> impl IntoView {
    let session = use_session_context();
    let client = use_api_client();
    let notice = RwSignal::new(None::<Notice>);

    let directory = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { cooperatives::list_cooperatives(&client).await }
        }
    });

    let join = move |coop: Cooperative| {
        let client = client.clone();
        spawn_local(async move {
            match cooperatives::join_cooperative(&client, &coop.id, &JoinCooperativeRequest::default()).await {
                Ok(response) => {
                    let text = if response.message.trim().is_empty() {
                        format!("Request sent to {}", coop.name)
                    } else {
                        response.message
                    };
                    notice.set(Some(Notice::success(text)));
                }
                Err(e) => notice.set(Some(Notice::error(report_error(&e, &session)))),
            }
        });
    };

    view! {
        <section class="page cooperatives-page">
            <h1>"Cooperatives"</h1>
            <Flash notice=notice/>
            {move || {
                let join = join.clone();
                let mine = session.profile().and_then(|p| p.cooperative_id);
                loaded(
                    directory.get(),
                    move |list| {
                        if list.is_empty() {
                            return view! { <p class="empty">"No cooperatives registered yet"</p> }.into_any();
                        }
                        view! {
                            <div class="coop-grid">
                                {list
                                    .into_iter()
                                    .map(|coop| {
                                        let member = mine.as_ref() == Some(&coop.id);
                                        let join = join.clone();
                                        let target = coop.clone();
                                        view! {
                                            <article class="card coop-card">
                                                <h3>{coop.name.clone()}</h3>
                                                {coop.location.clone().map(|l| view! { <p class="muted">{l}</p> })}
                                                <p>{format!("{} members", membership_count(&coop))}</p>
                                                {coop.description.clone().map(|d| view! { <p class="description">{d}</p> })}
                                                {if member {
                                                    view! { <span class="badge badge-buyer">"Your cooperative"</span> }.into_any()
                                                } else {
                                                    view! {
                                                        <button class="btn btn-small" on:click=move |_| join(target.clone())>
                                                            "Request to join"
                                                        </button>
                                                    }
                                                        .into_any()
                                                }}
                                            </article>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    },
                )
            }}
        </section>
    }
}
