use crate::components::home::HomePage;
use crate::components::inventory::InventoryPage;
use crate::components::story_slider::StorySlider;
use crate::platform;
use crate::state::{provide_site_state, SiteData};
use leptos::prelude::*;

/// Page picked from the URL path
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Home,
    Inventory,
    Gallery,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/floorplan" | "/inventory" => Page::Inventory,
            "/gallery" => Page::Gallery,
            _ => Page::Home,
        }
    }
}

/// Main App component - entry point for the site
#[component]
pub fn App() -> impl IntoView {
    let data = match SiteData::load() {
        Ok(data) => data,
        Err(e) => {
            log::error!("Failed to load site data: {}", e);
            return view! {
                <div class="site-error">
                    <p>"This page is temporarily unavailable."</p>
                </div>
            }
            .into_any();
        }
    };
    provide_site_state(data);

    let page = Page::from_path(&platform::current_path());
    log::debug!("Routing to {:?}", page);

    match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Inventory => view! { <InventoryPage /> }.into_any(),
        Page::Gallery => view! { <StorySlider /> }.into_any(),
    }
}
