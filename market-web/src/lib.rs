//! AgroMarket web client - Leptos frontend
//!
//! Entry point of the WASM bundle. The app is mounted once; every page below
//! it is picked by [`layouts::LayoutSelector`] from the current path.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod layouts;
pub mod pages;
pub mod routing;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("[app] AgroMarket web starting");

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Remove the static loading placeholder from `index.html`.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("[app] no document, cannot hide loading screen");
        return;
    };
    match document.get_element_by_id("agro-loading") {
        Some(element) => {
            if let Err(e) = element.set_attribute("style", "display: none;") {
                log::warn!("[app] could not hide loading screen: {:?}", e);
            }
        }
        None => log::debug!("[app] no loading screen element"),
    }
}
