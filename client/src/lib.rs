//! Browser client for the school website's admin area.
//!
//! ARCHITECTURE
//! ============
//! `app` builds the session store and route guard once and provides them via
//! context. `components::require_auth` wraps every admin route, `pages` holds
//! the route-level screens, and `net` implements the identity provider and
//! content store against the site's HTTP endpoints.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
