//! Profile settings, shared by every dashboard.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::dto::UpdateProfileRequest;

use crate::components::{Flash, Notice};
use crate::services::api::{report_error, use_api_client, users};
use crate::state::session::use_session_context;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = use_session_context();
    let client = use_api_client();
    let user = session.user().unwrap_or_default();

    let full_name = RwSignal::new(user.full_name.clone().unwrap_or_default());
    let phone = RwSignal::new(user.phone.clone().unwrap_or_default());
    let location = RwSignal::new(user.location.clone().unwrap_or_default());
    let bio = RwSignal::new(user.bio.clone().unwrap_or_default());
    let saving = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let Some(id) = session.user_id() else {
            return;
        };
        let request = UpdateProfileRequest::from_form(
            &full_name.get_untracked(),
            &phone.get_untracked(),
            &location.get_untracked(),
            &bio.get_untracked(),
        );
        let client = client.clone();
        saving.set(true);
        spawn_local(async move {
            match users::update_profile(&client, &id, &request).await {
                Ok(updated) => {
                    let record = if updated.id == id {
                        updated
                    } else {
                        // the backend only acknowledged; apply the change locally
                        let mut record = session.user().unwrap_or_default();
                        request.apply_to(&mut record);
                        record
                    };
                    session.update_user(record);
                    notice.set(Some(Notice::success("Profile updated")));
                }
                Err(e) => notice.set(Some(Notice::error(report_error(&e, &session)))),
            }
            saving.set(false);
        });
    };

    view! {
        <section class="page settings-page">
            <h1>"Settings"</h1>
            <Flash notice=notice/>
            <form class="card form" on:submit=on_submit>
                <label>
                    "Full name"
                    <input
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Phone"
                    <input
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Location"
                    <input
                        type="text"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "About"
                    <textarea
                        rows="4"
                        prop:value=move || bio.get()
                        on:input=move |ev| bio.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="btn" type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save changes" }}
                </button>
            </form>
        </section>
    }
}
