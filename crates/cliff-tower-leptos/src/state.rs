//! Site state using Leptos signals
//!
//! Static data lives in a [`StoredValue`]; interaction state is split into
//! small signal groups so that hovering a region does not re-render the
//! comparison panels and vice versa.

use crate::platform;
use cliff_tower_model::{
    ApartmentType, CarouselState, ComparisonSelection, FloorRegion, FloorRegistry, FloorSnapshot,
    ModelError, PathId, SiteConfig, Slide, StoryDeck, ToggleOutcome,
};
use leptos::prelude::*;

const FLOORS_JSON: &str = include_str!("../data/floors.json");
const SLIDES_JSON: &str = include_str!("../data/slides.json");
const SITE_JSON: &str = include_str!("../data/site.json");

/// Haptic pulse length on floor toggles
const TOGGLE_VIBRATION_MS: u32 = 30;

/// Static data loaded once at startup
#[derive(Clone, Debug)]
pub struct SiteData {
    pub config: SiteConfig,
    pub registry: FloorRegistry,
    pub slides: Vec<Slide>,
}

impl SiteData {
    /// Load the bundled floor, slide and configuration documents
    pub fn load() -> Result<Self, ModelError> {
        let config = SiteConfig::from_json(SITE_JSON)?;
        let registry = FloorRegistry::from_json(FLOORS_JSON)?;
        let slides = StoryDeck::from_json(SLIDES_JSON)?.slides().to_vec();
        log::info!(
            "Site data loaded: {} floors, {} slides",
            registry.len(),
            slides.len()
        );
        Ok(Self {
            config,
            registry,
            slides,
        })
    }
}

// ============================================================================
// Signal Groups
// ============================================================================

/// Inventory page state: browse highlight and the comparison trigger
#[derive(Clone, Copy)]
pub struct InventoryState {
    pub hovered: RwSignal<Option<PathId>>,
    pub selected: RwSignal<Option<PathId>>,
    pub comparison_open: RwSignal<bool>,
    pub locked: RwSignal<Option<FloorSnapshot>>,
}

impl InventoryState {
    pub fn new() -> Self {
        Self {
            hovered: RwSignal::new(None),
            selected: RwSignal::new(None),
            comparison_open: RwSignal::new(false),
            locked: RwSignal::new(None),
        }
    }

    /// Single browse highlight, clicking it again clears it
    pub fn toggle_selected(&self, id: &PathId) {
        self.selected.update(|selected| {
            if selected.as_ref() == Some(id) {
                *selected = None;
            } else {
                *selected = Some(id.clone());
            }
        });
    }

    /// Browse click: toggle the highlight and pin lockable floors for comparison
    pub fn select_region(&self, region: &FloorRegion, lockable: bool) {
        self.toggle_selected(&region.path_id);
        if lockable {
            self.open_locked(region.snapshot());
        }
    }

    /// Pin a floor and show the comparison view
    pub fn open_locked(&self, floor: FloorSnapshot) {
        if let Err(e) = floor.apartment_type.opposite() {
            log::warn!("Locked floor {} cannot be compared: {}", floor.id, e);
        }
        log::debug!("Opening comparison locked to {}", floor.id);
        self.locked.set(Some(floor));
        self.comparison_open.set(true);
    }

    pub fn open_unlocked(&self) {
        self.locked.set(None);
        self.comparison_open.set(true);
    }

    pub fn close_comparison(&self) {
        self.comparison_open.set(false);
        self.locked.set(None);
    }
}

impl Default for InventoryState {
    fn default() -> Self {
        Self::new()
    }
}

/// Comparison view state, created when the view opens
#[derive(Clone, Copy)]
pub struct ComparisonState {
    pub selection: RwSignal<ComparisonSelection>,
    pub carousel: RwSignal<CarouselState>,
    pub hovered: RwSignal<Option<PathId>>,
}

impl ComparisonState {
    pub fn new(locked: Option<FloorSnapshot>) -> Self {
        Self {
            selection: RwSignal::new(ComparisonSelection::new(locked)),
            carousel: RwSignal::new(CarouselState::new()),
            hovered: RwSignal::new(None),
        }
    }

    pub fn initialize(&self, locked: Option<FloorSnapshot>) {
        self.selection.update(|s| s.initialize(locked));
    }

    pub fn toggle(&self, region: &FloorRegion) {
        let outcome = self
            .selection
            .try_update(|s| s.toggle(region))
            .unwrap_or(ToggleOutcome::Locked);
        if outcome != ToggleOutcome::Locked {
            platform::vibrate(TOGGLE_VIBRATION_MS);
        }
    }

    pub fn remove_type(&self, kind: &ApartmentType) {
        self.selection.update(|s| {
            s.remove_type(kind);
        });
    }

    pub fn clear_all(&self) {
        self.selection.update(|s| s.clear_all());
    }
}

// ============================================================================
// Combined Site State
// ============================================================================

/// Combined site state with static data and page signal groups
#[derive(Clone, Copy)]
pub struct SiteState {
    pub data: StoredValue<SiteData>,
    pub inventory: InventoryState,
}

impl SiteState {
    pub fn new(data: SiteData) -> Self {
        Self {
            data: StoredValue::new(data),
            inventory: InventoryState::new(),
        }
    }

    pub fn registry(&self) -> FloorRegistry {
        self.data.with_value(|d| d.registry.clone())
    }
}

/// Provide site state to the component tree
pub fn provide_site_state(data: SiteData) {
    provide_context(SiteState::new(data));
}

/// Hook to access site state from context
pub fn use_site_state() -> SiteState {
    expect_context::<SiteState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled() -> SiteData {
        SiteData::load().unwrap()
    }

    fn find_region(data: &SiteData, lockable: bool) -> FloorRegion {
        data.registry
            .iter()
            .find(|r| data.config.diagram.is_lockable(&r.class_tag) == lockable)
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_bundled_data_loads() {
        let data = bundled();
        assert!(!data.registry.is_empty());
        assert!(!data.slides.is_empty());
    }

    #[test]
    fn test_select_callback_opens_locked_comparison() {
        let owner = Owner::new();
        owner.set();
        let data = bundled();
        let region = find_region(&data, true);
        let inventory = InventoryState::new();

        let on_select = Callback::new(move |region: FloorRegion| {
            inventory.select_region(&region, true);
        });
        on_select.run(region.clone());

        assert!(inventory.comparison_open.get_untracked());
        assert_eq!(inventory.selected.get_untracked(), Some(region.path_id.clone()));
        assert_eq!(
            inventory.locked.get_untracked().map(|floor| floor.id),
            Some(region.path_id)
        );

        inventory.close_comparison();
        assert!(!inventory.comparison_open.get_untracked());
        assert!(inventory.locked.get_untracked().is_none());
    }

    #[test]
    fn test_plain_region_only_toggles_highlight() {
        let owner = Owner::new();
        owner.set();
        let data = bundled();
        let region = find_region(&data, false);
        let inventory = InventoryState::new();

        inventory.select_region(&region, false);
        assert_eq!(inventory.selected.get_untracked(), Some(region.path_id.clone()));
        assert!(!inventory.comparison_open.get_untracked());

        inventory.select_region(&region, false);
        assert!(inventory.selected.get_untracked().is_none());
    }
}
