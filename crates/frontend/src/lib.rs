//! Class Desk - Yew WASM Frontend
//!
//! This crate provides the web UI for the school dashboard.

mod app;
mod components;
mod config;
mod logging;
mod pages;

pub use app::{App, AppProps};
pub use config::AppConfig;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = config::load_app_config();
    if logging::init(config.level_filter()).is_err() {
        web_sys::console::warn_1(&"Logger already initialised".into());
    }
    if let Some(e) = config_error {
        log::warn!("Falling back to default config: {}", e);
    }
    log::info!("Starting dashboard for {}", config.teacher_name);

    yew::Renderer::<App>::with_props(app::AppProps { config }).render();
}
