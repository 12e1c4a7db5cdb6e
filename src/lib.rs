//! # dao-header
//!
//! Leptos + WASM page header for the DAO frontend: brand bar, theme toggle,
//! wallet connection, and role badge.
//!
//! The wallet session and role resolution logic live behind the
//! `WalletProvider` and `ContractReader` seams so they run natively in tests;
//! the browser bindings for both are compiled only with the `hydrate` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod contracts;
pub mod error;
pub mod state;
pub mod util;
pub mod wallet;

/// WASM entrypoint: install console logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
