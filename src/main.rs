//! CaliPuff Storefront Frontend Entry Point

mod app;
mod basket;
mod bridge;
mod components;
mod config;
mod context;
mod error;
mod logging;
mod models;
mod navigation;
mod persistence;
mod store;

use app::App;
use config::SiteConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);

    let config = SiteConfig::bundled();
    log::set_max_level(config.log_level());

    mount_to_body(move || view! { <App config=config /> });
}
