//! Floor comparison overlay
//!
//! Left: up to two floor plan panels side by side. Right: the building
//! diagram used to pick floors. The selection lives only as long as the
//! overlay is mounted.

use crate::components::building_diagram::{BuildingDiagram, DiagramSource};
use crate::state::{use_site_state, ComparisonState};
use crate::utils::{panel_scheme, with_alpha, PanelScheme};
use cliff_tower_model::{FloorRegion, FloorSnapshot, SelectionPhase, MAX_COMPARED_TYPES};
use leptos::prelude::*;

const CLOSE_ICON: &str = "M6 18L18 6M6 6l12 12";

/// Comparison overlay, mounted while the inventory page has it open
#[component]
pub fn FloorComparisonPanel() -> impl IntoView {
    let site = use_site_state();
    let inventory = site.inventory;
    let comparison = ComparisonState::new(inventory.locked.get_untracked());
    let compare_transform = site.data.with_value(|d| d.config.diagram.compare_transform.clone());

    // Re-seed when the locked floor changes while open
    Effect::new(move |previous: Option<()>| {
        let locked = inventory.locked.get();
        if previous.is_some() {
            comparison.initialize(locked);
        }
    });

    let locked = Memo::new(move |_| comparison.selection.with(|s| s.locked().cloned()));
    let count = Memo::new(move |_| comparison.selection.with(|s| s.len()));

    let on_select = Callback::new(move |region: FloorRegion| comparison.toggle(&region));

    view! {
        <div class="comparison-overlay fixed inset-0 z-50 flex items-center justify-center">
            <div class="comparison-dialog w-full h-full overflow-hidden flex">
                <button
                    class="comparison-close"
                    title="Close comparison"
                    on:click=move |_| inventory.close_comparison()
                >
                    <CloseIcon />
                </button>

                // Floor plan panels
                <div class="comparison-main w-2/3 overflow-y-auto">
                    <div class="p-6 h-full flex flex-col">
                        <div class="comparison-header flex items-center justify-between mb-6">
                            <div>
                                <h3 class="comparison-title">"Floor Plan Comparison"</h3>
                                {move || {
                                    locked
                                        .get()
                                        .map(|floor| {
                                            view! {
                                                <p class="comparison-subtitle">
                                                    {format!(
                                                        "Comparing with Floor {} - {}",
                                                        floor.floor_number,
                                                        floor.apartment_type,
                                                    )}
                                                </p>
                                            }
                                        })
                                }}
                            </div>
                            <div class="flex items-center space-x-4">
                                <span class="comparison-count">
                                    {move || format!("{}/{} apartment types", count.get(), MAX_COMPARED_TYPES)}
                                </span>
                                {move || {
                                    (count.get() >= MAX_COMPARED_TYPES)
                                        .then(|| {
                                            let label = if locked.get().is_some() {
                                                "Reset"
                                            } else {
                                                "Clear All"
                                            };
                                            view! {
                                                <button
                                                    class="comparison-clear"
                                                    on:click=move |_| comparison.clear_all()
                                                >
                                                    {label}
                                                </button>
                                            }
                                        })
                                }}
                            </div>
                        </div>

                        <div class="flex-1 min-h-0">
                            {move || {
                                let (phase, floors) = comparison
                                    .selection
                                    .with(|s| (s.phase(), s.selected_list().to_vec()));
                                let columns = match phase {
                                    SelectionPhase::Empty => {
                                        return view! {
                                            <EmptyComparison locked=locked.get().is_some() />
                                        }
                                        .into_any();
                                    }
                                    SelectionPhase::OneSelected => {
                                        "comparison-grid grid gap-6 h-full grid-cols-1"
                                    }
                                    SelectionPhase::TwoSelected => {
                                        "comparison-grid grid gap-6 h-full grid-cols-2"
                                    }
                                };
                                let cards = floors
                                    .into_iter()
                                    .enumerate()
                                    .map(|(position, floor)| {
                                        view! {
                                            <FloorCard position=position floor=floor comparison=comparison />
                                        }
                                    })
                                    .collect_view();
                                view! { <div class=columns>{cards}</div> }.into_any()
                            }}
                        </div>
                    </div>
                </div>

                // Building picker
                <div class="comparison-sidebar w-1/3 p-6 flex flex-col items-center">
                    <div class="comparison-sidebar-header mb-4 w-full p-4 rounded-lg">
                        <h4 class="text-lg font-bold">"Select Floors"</h4>
                        <p class="text-sm">"Click on floors to compare"</p>
                    </div>
                    <div class="flex-1 flex items-center justify-center w-full">
                        <div class="comparison-diagram relative w-full overflow-hidden rounded-lg">
                            <BuildingDiagram
                                source=DiagramSource::Compare(comparison.selection)
                                hovered=comparison.hovered
                                on_select=on_select
                                svg_transform=compare_transform
                            />
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Placeholder shown before any floor is chosen
#[component]
fn EmptyComparison(locked: bool) -> impl IntoView {
    let (title, body) = if locked {
        (
            "Select Another Floor to Compare",
            "Click on a floor in the building view to compare floor plans.",
        )
    } else {
        (
            "Select Floors from Building",
            "Use the building visualization to select floors for comparison.",
        )
    };

    view! {
        <div class="comparison-empty flex flex-col items-center justify-center h-full text-center">
            <div class="comparison-empty-card p-8 rounded-lg">
                <h4 class="text-xl font-semibold mb-2">{title}</h4>
                <p class="max-w-md">{body}</p>
            </div>
        </div>
    }
}

/// One compared floor with its floor plan carousel
#[component]
fn FloorCard(position: usize, floor: FloorSnapshot, comparison: ComparisonState) -> impl IntoView {
    let site = use_site_state();
    let kind = floor.apartment_type.clone();
    let images = site
        .data
        .with_value(|d| d.config.floor_plans.images_for(&kind).to_vec());
    let is_locked = comparison.selection.with_untracked(|s| s.is_locked(&floor.id));
    let scheme = panel_scheme(position, is_locked);

    let remove_kind = kind.clone();
    let remove_button = (!is_locked).then(|| {
        view! {
            <button
                class="floor-card-remove"
                title="Remove from comparison"
                on:click=move |_| comparison.remove_type(&remove_kind)
            >
                <CloseIcon />
            </button>
        }
    });
    let locked_badge = is_locked.then(|| view! { <span class="floor-card-badge">"Selected"</span> });
    let availability_class = if floor.available {
        "floor-card-availability available"
    } else {
        "floor-card-availability sold"
    };

    view! {
        <div
            class="floor-card relative overflow-hidden flex flex-col rounded-lg"
            style=format!("border: 2px solid {}", scheme.border)
        >
            {remove_button}
            <div
                class="floor-card-header p-4"
                style=format!(
                    "background-color: {}; border-bottom: 2px solid {}",
                    scheme.background,
                    scheme.border,
                )
            >
                <div class="flex items-center gap-2">
                    <h4 class="floor-card-type" style=format!("color: {}", scheme.text)>
                        {kind.to_string()}
                    </h4>
                    {locked_badge}
                </div>
                <p class="floor-card-floor">{format!("Floor {}", floor.floor_number)}</p>
                <div class="floor-card-facts flex items-center justify-between mt-3">
                    <span class="font-medium">{floor.price.clone()}</span>
                    <span>{floor.area.clone()}</span>
                    <span class=availability_class>{floor.availability_label()}</span>
                </div>
            </div>
            <PlanCarousel comparison=comparison floor=floor images=images scheme=scheme />
        </div>
    }
}

/// Floor plan images of one panel, paged independently of the other panel
#[component]
fn PlanCarousel(
    comparison: ComparisonState,
    floor: FloorSnapshot,
    images: Vec<String>,
    scheme: PanelScheme,
) -> impl IntoView {
    let kind = floor.apartment_type;
    let len = images.len();

    let index = {
        let kind = kind.clone();
        Memo::new(move |_| comparison.carousel.with(|c| c.current_in(&kind, len)))
    };
    let src = {
        let images = images.clone();
        move || images.get(index.get()).cloned().unwrap_or_default()
    };
    let alt = format!("{kind} Floor Plan");

    let controls = (len > 1).then(|| {
        let prev_kind = kind.clone();
        let next_kind = kind.clone();
        let button_style = format!(
            "background-color: {}; color: {}",
            with_alpha(scheme.badge, "E6"),
            scheme.text
        );
        let dots = (0..len)
            .map(|dot| {
                let dot_kind = kind.clone();
                let class = move || {
                    if index.get() == dot {
                        "carousel-dot active"
                    } else {
                        "carousel-dot"
                    }
                };
                let style = move || {
                    let color = if index.get() == dot {
                        scheme.text.to_string()
                    } else {
                        with_alpha(scheme.text, "60")
                    };
                    format!("background-color: {color}")
                };
                view! {
                    <button
                        class=class
                        style=style
                        on:click=move |_| comparison.carousel.update(|c| c.select(&dot_kind, dot, len))
                    />
                }
            })
            .collect_view();

        view! {
            <button
                class="carousel-prev"
                style=button_style.clone()
                on:click=move |_| comparison.carousel.update(|c| c.prev(&prev_kind, len))
            >
                <span>"‹"</span>
            </button>
            <button
                class="carousel-next"
                style=button_style
                on:click=move |_| comparison.carousel.update(|c| c.next(&next_kind, len))
            >
                <span>"›"</span>
            </button>
            <div
                class="carousel-dots flex space-x-2"
                style=format!("background-color: {}", with_alpha(scheme.badge, "40"))
            >
                {dots}
            </div>
        }
    });

    view! {
        <div class="plan-carousel relative flex-1 min-h-0">
            <img src=src alt=alt class="w-full h-full object-contain p-4" />
            {controls}
        </div>
    }
}

/// Cross icon used by the close and remove buttons
#[component]
fn CloseIcon() -> impl IntoView {
    view! {
        <svg class="icon-close" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=CLOSE_ICON />
        </svg>
    }
}
