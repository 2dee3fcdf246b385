// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cliff Tower Model - floor data and interaction state for the tower site
//!
//! Everything in this crate is plain Rust with no DOM access, so the view
//! layer stays thin and the interaction rules can be tested natively.
//!
//! # Architecture
//!
//! - [`FloorRegistry`] - ordered, immutable floor regions loaded once
//! - [`HitRegionRenderer`] - fill colour and opacity of each region
//! - [`ComparisonSelection`] - up to two apartment types, optionally locked
//! - [`CarouselState`] - floor plan image index per comparison slot
//! - [`RevealGesture`] - pointer-following reveal mask and click transition
//! - [`StoryDeck`] - story slider navigation, with wheel and swipe input
//! - [`SiteConfig`] - colour tables, transforms and animation constants
//!
//! # Example
//!
//! ```ignore
//! use cliff_tower_model::{ComparisonSelection, FloorRegistry, PathId};
//!
//! let registry = FloorRegistry::from_json(floors_json)?;
//! let locked = registry.get(&PathId::from("floor-12")).map(|r| r.snapshot());
//! let mut selection = ComparisonSelection::new(locked);
//! for region in registry.iter() {
//!     selection.toggle(region);
//! }
//! assert!(selection.len() <= 2);
//! ```

pub mod carousel;
pub mod config;
pub mod error;
pub mod registry;
pub mod render;
pub mod reveal;
pub mod selection;
pub mod slider;
pub mod tween;
pub mod types;

// Re-export all public types
pub use carousel::*;
pub use config::*;
pub use error::*;
pub use registry::*;
pub use render::*;
pub use reveal::*;
pub use selection::*;
pub use slider::*;
pub use tween::*;
pub use types::*;
