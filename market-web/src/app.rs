//! Application root: configuration and session context, then the router.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::Router;

use crate::config::{provide_config, AppConfig};
use crate::layouts::LayoutSelector;
use crate::state::session::{provide_session_context, BrowserStorage, SessionPersistence};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    log::info!("[app] api base {}", config.api_base);

    let persistence = SessionPersistence::new(Arc::new(BrowserStorage), &config);
    provide_config(config);
    provide_session_context(persistence);

    view! {
        <Router>
            <div class="app-container">
                <LayoutSelector/>
            </div>
        </Router>
    }
}
