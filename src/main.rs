//! Calorie Tracker Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logger;
mod storage;
mod store;
mod view;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Info);

    let config = config::load_page_config();
    logger::init(config.level_filter());

    mount_to_body(move || view! { <App config=config /> });
}
