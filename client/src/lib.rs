//! # portal-client
//!
//! Leptos + WASM frontend for the portal: a route table, a shared navbar
//! layout, the session context, and the Home / Login / Admin pages.
//!
//! The same crate is compiled twice. With `ssr` the host server renders it
//! to HTML; with `hydrate` it is built to WASM and attached to the
//! server-rendered markup through [`hydrate`].

pub mod app;
pub mod components;
pub mod mount;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point called by the hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed, which keeps that one.
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(e) = mount::hydrate_root() {
        log::error!("portal failed to mount: {e}");
    }
}
