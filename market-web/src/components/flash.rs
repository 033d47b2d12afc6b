//! Auto-dismissing notice shown above a view's content.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::FLASH_TIMEOUT_MS;
use crate::utils::display::Tone;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub tone: Tone,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { tone: Tone::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { tone: Tone::Danger, text: text.into() }
    }
}

/// Renders `notice` while set and clears it after [`FLASH_TIMEOUT_MS`].
/// A newer notice restarts the timeout; clicking dismisses early.
#[component]
pub fn Flash(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    let generation = StoredValue::new(0u32);

    Effect::new(move || {
        if notice.with(Option::is_none) {
            return;
        }
        generation.update_value(|g| *g = g.wrapping_add(1));
        let Some(mine) = generation.try_get_value() else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(FLASH_TIMEOUT_MS).await;
            // the view may be gone by now
            if generation.try_get_value() == Some(mine) {
                notice.try_set(None);
            }
        });
    });

    move || {
        notice.get().map(|n| {
            view! {
                <div class=format!("flash {}", n.tone.class()) role="status" on:click=move |_| notice.set(None)>
                    {n.text}
                </div>
            }
        })
    }
}
