//! Table Admin Console Entry Point

mod models;
mod commands;
mod context;
mod store;
mod logger;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = context::load_config();
    logger::init(config.level_filter().unwrap_or(log::LevelFilter::Info));
    if let Some(e) = config_error {
        log::error!("[config] {}; using defaults", e);
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
