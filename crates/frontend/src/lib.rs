pub mod app;
pub mod domain;
pub mod shared;

use app::App;
use leptos::prelude::*;
use shared::config::AppConfig;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.level().unwrap_or(log::Level::Debug));
    if let Err(err) = loaded {
        log::warn!("Invalid wishlist config, using defaults: {}", err);
    }

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
