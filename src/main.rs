//! Todo Widget Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    // Browsers hide debug output by default; replay it at error level on panic.
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        web_sys::console::error_1(&format!("[APP] {}", console_logger::crash_report()).into());
    }));

    let level = log::LevelFilter::Debug;
    if let Err(err) = console_logger::init(level, console_logger::DEFAULT_CAPACITY) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", err).into());
    }
    mount_to_body(App);
}
