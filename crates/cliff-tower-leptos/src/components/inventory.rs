//! Inventory page - the building diagram with the comparison overlay

use crate::components::building_diagram::{BuildingDiagram, DiagramSource};
use crate::components::comparison_panel::FloorComparisonPanel;
use crate::state::use_site_state;
use cliff_tower_model::FloorRegion;
use leptos::prelude::*;

const LOGO: &str = "/images/logo.svg";

#[component]
pub fn InventoryPage() -> impl IntoView {
    let site = use_site_state();
    let inventory = site.inventory;

    let on_select = Callback::new(move |region: FloorRegion| {
        let lockable = site
            .data
            .with_value(|d| d.config.diagram.is_lockable(&region.class_tag));
        inventory.select_region(&region, lockable);
    });

    view! {
        <div class="inventory-page relative w-full h-screen overflow-hidden">
            <a href="/" class="inventory-logo absolute">
                <img src=LOGO alt="Cliff Tower" />
            </a>
            <div class="inventory-diagram absolute inset-0">
                <BuildingDiagram
                    source=DiagramSource::Browse(inventory.selected)
                    hovered=inventory.hovered
                    on_select=on_select
                />
            </div>
            <button
                class="inventory-compare absolute"
                on:click=move |_| inventory.open_unlocked()
            >
                "Compare Floors"
            </button>
            <Show when=move || inventory.comparison_open.get()>
                <FloorComparisonPanel />
            </Show>
        </div>
    }
}
