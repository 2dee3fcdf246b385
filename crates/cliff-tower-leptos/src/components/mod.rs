//! UI components for the Cliff Tower site

mod app;
mod building_diagram;
mod comparison_panel;
mod home;
mod image_reveal;
mod inventory;
mod story_slider;

pub use app::{App, Page};
pub use building_diagram::{BuildingDiagram, DiagramSource};
pub use comparison_panel::FloorComparisonPanel;
pub use home::HomePage;
pub use image_reveal::ImageReveal;
pub use inventory::InventoryPage;
pub use story_slider::{use_slider_controller, SliderController, StorySlider};
