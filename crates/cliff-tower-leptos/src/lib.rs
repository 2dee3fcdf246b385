//! Cliff Tower Leptos UI
//!
//! Leptos components for the Cliff Tower marketing site: the interactive
//! building diagram, the floor comparison overlay, the image reveal and the
//! story slider. Interaction logic lives in `cliff-tower-model`; this crate
//! wires it to signals and the DOM.

pub mod components;
pub mod platform;
pub mod state;
pub mod utils;

// Re-exports
pub use components::{App, Page};
pub use platform::{init_debug_from_url, is_debug};
pub use state::{
    provide_site_state, use_site_state, ComparisonState, InventoryState, SiteData, SiteState,
};
