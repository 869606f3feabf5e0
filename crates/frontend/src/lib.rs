pub mod app;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use contracts::shared::config::{load_config, AppConfig, DEFAULT_CONFIG};
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

/// Deployment configuration compiled into the bundle
const CONFIG_OVERRIDE: &str = include_str!("../config.toml");

fn app_config() -> AppConfig {
    match load_config(Some(CONFIG_OVERRIDE)) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::error_1(&format!("Invalid config.toml, using defaults: {}", e).into());
            AppConfig::from_toml_str(DEFAULT_CONFIG).expect("embedded default config is valid")
        }
    }
}

#[wasm_bindgen]
pub fn hydrate() {
    let config = app_config();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log.level.into());
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
