//! Cardápio Frontend Entry Point

mod models;
mod error;
mod config;
mod data;
mod categories;
mod filter;
mod price;
mod store;
mod render;
mod components;
mod controls;
mod app;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
    app::run();
}
