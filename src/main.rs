//! Idea Market Frontend Entry Point

mod app;
mod browser;
mod commands;
mod components;
mod config;
mod context;
mod format;
mod navigation;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    if let Err(e) = console_logger::init_logger(config.log_level) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
    config.report();

    mount_to_body(move || view! { <App config=config.clone() /> });
}
