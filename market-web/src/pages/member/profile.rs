//! The member's own profile, and other users' profiles by id.

use leptos::prelude::*;
use leptos_router::components::A;
use shared::dto::Id;
use shared::normalize::{normalize_user, UserProfile};
use shared::utils::initials;

use crate::components::{loaded, RoleBadge};
use crate::error::AppError;
use crate::routing::MemberRoute;
use crate::services::api::{use_api_client, users};
use crate::state::session::use_session_context;

fn profile_card(profile: UserProfile) -> impl IntoView {
    view! {
        <div class="card profile-card">
            <div class="profile-header">
                <span class="avatar avatar-large">{initials(&profile.display_name)}</span>
                <div>
                    <h2>{profile.display_name.clone()}</h2>
                    <RoleBadge role=profile.role/>
                </div>
            </div>
            <dl class="details">
                <dt>"Location"</dt>
                <dd>{profile.location}</dd>
                {profile.email.map(|e| view! { <dt>"Email"</dt><dd>{e}</dd> })}
                {profile.phone.map(|p| view! { <dt>"Phone"</dt><dd>{p}</dd> })}
            </dl>
            {profile.bio.map(|b| view! { <p class="description">{b}</p> })}
        </div>
    }
}

#[component]
pub fn MyProfilePage() -> impl IntoView {
    let session = use_session_context();

    view! {
        <section class="page profile-page">
            <h1>"My profile"</h1>
            {move || session.profile().map(profile_card)}
            <A href=MemberRoute::Settings.path() attr:class="btn">"Edit profile"</A>
        </section>
    }
}

/// `/PetOwnerDashboard/PetProfile/:id`
#[component]
pub fn ProfileDetailPage(#[prop(into)] id: String) -> impl IntoView {
    let client = use_api_client();
    let id = Id::from(id);

    let profile = LocalResource::new({
        let id = id.clone();
        move || {
            let client = client.clone();
            let id = id.clone();
            async move {
                let record = users::get_user(&client, &id).await?;
                Ok::<_, AppError>(normalize_user(&record))
            }
        }
    });

    let message_href = format!("{}?to={}", MemberRoute::Messages.path(), urlencoding::encode(id.as_str()));

    view! {
        <section class="page profile-page">
            <h1>"Profile"</h1>
            {move || loaded(profile.get(), |p| profile_card(p).into_any())}
            <A href=message_href attr:class="btn">"Send a message"</A>
        </section>
    }
}
