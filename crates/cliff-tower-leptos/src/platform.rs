//! Thin wrappers over browser APIs
//!
//! Every accessor tolerates a missing window or document and falls back to a
//! neutral value, so callers never have to handle absence.

use std::sync::atomic::{AtomicBool, Ordering};

/// Global debug mode flag (set from URL parameter ?debug=1)
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// Check if debug mode is enabled
pub fn is_debug() -> bool {
    DEBUG_MODE.load(Ordering::Relaxed)
}

/// Whether a query string turns debug mode on
fn debug_requested(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == "debug=1" || pair == "debug=true")
}

/// Initialize debug mode from URL parameters
/// Call this once at startup, before the logger is installed
pub fn init_debug_from_url() {
    let enabled = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .is_some_and(|search| debug_requested(&search));
    DEBUG_MODE.store(enabled, Ordering::Relaxed);
}

/// Path part of the current URL, "/" when unavailable
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .filter(|path| !path.is_empty())
        .unwrap_or_else(|| "/".to_string())
}

/// Inner width of the browser window in CSS pixels
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

/// High resolution timestamp on the same clock as animation frame callbacks
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Short haptic pulse; silently skipped where unsupported
pub fn vibrate(millis: u32) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();
    let supported = js_sys::Reflect::has(&navigator, &"vibrate".into()).unwrap_or(false);
    if supported {
        let _ = navigator.vibrate_with_duration(millis);
    }
}
