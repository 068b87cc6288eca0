mod app;
mod components;
mod core;
mod features;
mod pages;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // Only fails if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("Starting task manager UI");
    mount_to_body(App);
}
