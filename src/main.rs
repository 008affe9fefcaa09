//! Drink Menu Frontend Entry Point

mod models;
mod config;
mod error;
mod catalog;
mod favorites;
mod view_model;
mod overlay;
mod commands;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    console_log::init_with_level(level).expect("Failed to initialize logger");

    log::info!("[APP] Starting drink menu");
    mount_to_body(App);
}
