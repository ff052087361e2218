//! Entry point for the WASM application

use leptos::*;
use team_builder::App;

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Team Builder - Starting Leptos App (backend: {})", team_builder::API_BASE);

    mount_to_body(|| view! { <App/> })
}
