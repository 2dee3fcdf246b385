//! Cliff Tower web entry point
//!
//! Installs the panic hook and the console logger, then mounts the Leptos
//! app on the document body.

use wasm_bindgen::prelude::*;

/// Log level for the console: everything with `?debug=1`, info otherwise
fn log_level(debug: bool) -> log::Level {
    if debug {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    cliff_tower_leptos::init_debug_from_url();
    let debug = cliff_tower_leptos::is_debug();
    wasm_logger::init(wasm_logger::Config::new(log_level(debug)));
    log::info!(
        "Starting Cliff Tower site v{} (debug={})",
        env!("CARGO_PKG_VERSION"),
        debug
    );

    leptos::mount::mount_to_body(cliff_tower_leptos::App);
}
