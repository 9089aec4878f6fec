//! Beer Bank Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;
mod store;
mod views;

use app::App;
use browser::ConsoleLogger;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    ConsoleLogger::init(ConsoleLogger::default_level());
    mount_to_body(App);
}
