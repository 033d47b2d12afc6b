use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::dto::ApiKey;

use crate::components::{loaded, Flash, Notice, StatusPill};
use crate::services::api::{organizations, report_error, use_api_client};
use crate::state::session::use_session_context;
use crate::utils::display::Tone;
use crate::utils::format::format_date;

#[component]
pub fn OrganizationApiKeysPage() -> impl IntoView {
    let session = use_session_context();
    let client = use_api_client();
    let notice = RwSignal::new(None::<Notice>);
    let label = RwSignal::new(String::new());
    // shown once, right after creation
    let secret = RwSignal::new(None::<String>);

    let keys = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { organizations::list_api_keys(&client).await }
        }
    });

    let on_create = {
        let client = client.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let requested = label.get_untracked();
            let client = client.clone();
            spawn_local(async move {
                match organizations::create_api_key(&client, &requested).await {
                    Ok(created) => {
                        secret.set(Some(created.secret));
                        label.set(String::new());
                        keys.refetch();
                    }
                    Err(e) => notice.set(Some(Notice::error(report_error(&e, &session)))),
                }
            });
        }
    };

    let revoke = move |key: ApiKey| {
        let client = client.clone();
        spawn_local(async move {
            match organizations::revoke_api_key(&client, &key.id).await {
                Ok(()) => {
                    notice.set(Some(Notice::success(format!("Revoked {}", key.label))));
                    keys.refetch();
                }
                Err(e) => notice.set(Some(Notice::error(report_error(&e, &session)))),
            }
        });
    };

    view! {
        <section class="page api-keys-page">
            <h1>"API keys"</h1>
            <Flash notice=notice/>
            {move || secret.get().map(|s| view! {
                <div class="card secret-card">
                    <p>"Copy this secret now. It will not be shown again."</p>
                    <code class="mono">{s}</code>
                    <button class="btn btn-small" on:click=move |_| secret.set(None)>"Done"</button>
                </div>
            })}
            <form class="card form-inline" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Key label, e.g. reporting"
                    prop:value=move || label.get()
                    on:input=move |ev| label.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Create key"</button>
            </form>
            {move || {
                let revoke = revoke.clone();
                loaded(
                    keys.get(),
                    move |list| {
                        if list.is_empty() {
                            return view! { <p class="empty">"No API keys yet"</p> }.into_any();
                        }
                        view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Label"</th>
                                        <th>"Key"</th>
                                        <th>"Created"</th>
                                        <th>"Last used"</th>
                                        <th>"Status"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|key| {
                                            let revoke = revoke.clone();
                                            let target = key.clone();
                                            let (tone, status) = if key.revoked {
                                                (Tone::Danger, "Revoked")
                                            } else {
                                                (Tone::Success, "Active")
                                            };
                                            view! {
                                                <tr>
                                                    <td>{key.label.clone()}</td>
                                                    <td class="mono">{format!("{}...", key.prefix)}</td>
                                                    <td>{key.created_at.as_deref().map(format_date).unwrap_or_default()}</td>
                                                    <td>
                                                        {key.last_used_at.as_deref().map(format_date).unwrap_or_else(|| "Never".to_string())}
                                                    </td>
                                                    <td><StatusPill tone=tone label=status/></td>
                                                    <td>
                                                        {(!key.revoked).then(move || view! {
                                                            <button class="btn btn-ghost btn-small" on:click=move |_| revoke(target.clone())>
                                                                "Revoke"
                                                            </button>
                                                        })}
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    },
                )
            }}
        </section>
    }
}
