use leptos::prelude::*;

use crate::utils::display::Tone;

#[component]
pub fn StatusPill(tone: Tone, #[prop(into)] label: String) -> impl IntoView {
    view! { <span class=tone.class()>{label}</span> }
}
