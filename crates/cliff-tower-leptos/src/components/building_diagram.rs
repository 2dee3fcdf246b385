//! Building diagram - backdrop image with one hit region per floor
//!
//! Shared by the inventory page and the comparison sidebar; only the
//! interaction source and the outer transform differ.

use crate::state::use_site_state;
use cliff_tower_model::{
    ComparisonSelection, FloorRegion, HitRegionRenderer, InteractionState, PathId, RegionStyle,
};
use leptos::prelude::*;

const REGION_STYLE: &str = "cursor: pointer; transition: opacity 120ms ease-out, fill 120ms ease-out";

/// Where a diagram reads its selection from
#[derive(Clone, Copy)]
pub enum DiagramSource {
    /// Inventory page single highlight
    Browse(RwSignal<Option<PathId>>),
    /// Comparison sidebar
    Compare(RwSignal<ComparisonSelection>),
}

/// SVG building diagram
#[component]
pub fn BuildingDiagram(
    source: DiagramSource,
    hovered: RwSignal<Option<PathId>>,
    on_select: Callback<FloorRegion>,
    /// Extra CSS transform of the whole SVG
    #[prop(optional, into)]
    svg_transform: Option<String>,
) -> impl IntoView {
    let site = use_site_state();
    let (view_box, backdrop, width, height, group_transform) = site.data.with_value(|d| {
        let diagram = &d.config.diagram;
        (
            diagram.view_box(),
            diagram.backdrop.clone(),
            diagram.view_box_width.to_string(),
            diagram.view_box_height.to_string(),
            format!("transform: {}", diagram.group_transform),
        )
    });
    let svg_style = match svg_transform {
        Some(t) => format!("shape-rendering: optimizeSpeed; pointer-events: auto; transform: {t}"),
        None => "shape-rendering: optimizeSpeed; pointer-events: auto".to_string(),
    };

    let regions = site
        .registry()
        .iter()
        .cloned()
        .map(|region| {
            view! {
                <HitRegion region=region source=source hovered=hovered on_select=on_select />
            }
        })
        .collect_view();

    view! {
        <svg
            viewBox=view_box
            xmlns="http://www.w3.org/2000/svg"
            class="building-diagram w-full h-full"
            preserveAspectRatio="xMidYMid slice"
            style=svg_style
        >
            <image
                href=backdrop
                x="0"
                y="0"
                width=width
                height=height
                preserveAspectRatio="xMidYMid slice"
            />
            <g style=group_transform>{regions}</g>
        </svg>
    }
}

/// One floor path
#[component]
fn HitRegion(
    region: FloorRegion,
    source: DiagramSource,
    hovered: RwSignal<Option<PathId>>,
    on_select: Callback<FloorRegion>,
) -> impl IntoView {
    let site = use_site_state();
    let id = region.path_id.clone();
    let geometry = region.geometry.clone();

    let style = {
        let region = region.clone();
        Memo::new(move |_| {
            hovered.with(|hovered| {
                let hovered = hovered.as_ref();
                site.data.with_value(|d| {
                    let renderer = HitRegionRenderer::new(&d.config);
                    match source {
                        DiagramSource::Browse(selected) => selected.with(|selected| {
                            let state = InteractionState::Browse {
                                hovered,
                                selected: selected.as_ref(),
                            };
                            renderer.style(&region, &state)
                        }),
                        DiagramSource::Compare(selection) => selection.with(|selection| {
                            let state = InteractionState::Compare { hovered, selection };
                            renderer.style(&region, &state)
                        }),
                    }
                })
            })
        })
    };
    let fill = move || style.with(|s: &RegionStyle| s.fill.clone());
    let opacity = move || style.with(|s: &RegionStyle| s.opacity.to_string());

    let enter_id = id.clone();
    let leave_id = id.clone();

    view! {
        <path
            id=id.to_string()
            d=geometry
            fill=fill
            opacity=opacity
            stroke="none"
            stroke-width="0"
            style=REGION_STYLE
            on:mouseenter=move |_| hovered.set(Some(enter_id.clone()))
            on:mouseleave=move |_| {
                // Ignore a late leave after another region was entered
                hovered.update(|h| {
                    if h.as_ref() == Some(&leave_id) {
                        *h = None;
                    }
                });
            }
            on:click=move |_| on_select.run(region.clone())
        />
    }
}
