// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fill and opacity rules for diagram hit regions
//!
//! Pure functions of interaction state. Unknown tags and unsupported lock
//! types fall back to configured colours; nothing here can fail.

use crate::{ClassPalette, ComparisonSelection, FloorRegion, PathId, SiteConfig, StateColors};

/// Interaction state a diagram is drawn with
#[derive(Clone, Copy, Debug)]
pub enum InteractionState<'a> {
    /// Inventory page: one optional highlighted region
    Browse {
        hovered: Option<&'a PathId>,
        selected: Option<&'a PathId>,
    },
    /// Comparison sidebar: colours follow the comparison selection
    Compare {
        hovered: Option<&'a PathId>,
        selection: &'a ComparisonSelection,
    },
}

impl<'a> InteractionState<'a> {
    fn hovered(&self) -> Option<&'a PathId> {
        match *self {
            InteractionState::Browse { hovered, .. } => hovered,
            InteractionState::Compare { hovered, .. } => hovered,
        }
    }

    fn is_hovered(&self, id: &PathId) -> bool {
        self.hovered() == Some(id)
    }

    fn is_selected(&self, id: &PathId) -> bool {
        match *self {
            InteractionState::Browse { selected, .. } => selected == Some(id),
            InteractionState::Compare { selection, .. } => selection.is_selected(id),
        }
    }
}

/// Visual attributes emitted for one region
#[derive(Clone, Debug, PartialEq)]
pub struct RegionStyle {
    pub fill: String,
    pub opacity: f64,
}

/// Maps regions to fill colour and opacity
#[derive(Clone, Copy, Debug)]
pub struct HitRegionRenderer<'a> {
    palette: &'a ClassPalette,
    colors: &'a StateColors,
}

impl<'a> HitRegionRenderer<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            palette: &config.palette,
            colors: &config.colors,
        }
    }

    pub fn fill_color(&self, region: &FloorRegion, state: &InteractionState<'_>) -> &'a str {
        let id = &region.path_id;
        let colors = self.colors;

        match *state {
            InteractionState::Browse { .. } => {
                if state.is_selected(id) || state.is_hovered(id) {
                    self.palette.color_for(&region.class_tag)
                } else {
                    colors.idle.as_str()
                }
            }
            InteractionState::Compare { selection, .. } => match selection.locked() {
                Some(locked) if &locked.id == id => colors.locked.as_str(),
                Some(locked) => {
                    let eligible = locked
                        .apartment_type
                        .opposite()
                        .is_ok_and(|opposite| opposite == region.apartment_type);
                    if !eligible {
                        colors.ineligible.as_str()
                    } else if state.is_selected(id) {
                        colors.opposite_selected.as_str()
                    } else if state.is_hovered(id) {
                        colors.opposite_hover.as_str()
                    } else {
                        colors.opposite_idle.as_str()
                    }
                }
                None => {
                    if state.is_selected(id) {
                        colors.selected.as_str()
                    } else if state.is_hovered(id) {
                        self.palette.color_for(&region.class_tag)
                    } else {
                        colors.idle.as_str()
                    }
                }
            },
        }
    }

    pub fn opacity(&self, region: &FloorRegion, state: &InteractionState<'_>) -> f64 {
        let id = &region.path_id;
        if state.is_selected(id) || state.is_hovered(id) {
            self.colors.active_opacity
        } else {
            1.0
        }
    }

    pub fn style(&self, region: &FloorRegion, state: &InteractionState<'_>) -> RegionStyle {
        RegionStyle {
            fill: self.fill_color(region, state).to_string(),
            opacity: self.opacity(region, state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawFloorRecord;

    fn region(id: &str, kind: &str, tag: &str) -> FloorRegion {
        FloorRegion::from_raw(RawFloorRecord {
            path_id: id.to_string(),
            geometry: "M0 0Z".to_string(),
            class_tag: tag.to_string(),
            apartment_type: Some(kind.to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_hover_uses_class_color() {
        let config = SiteConfig::default();
        let renderer = HitRegionRenderer::new(&config);
        let selection = ComparisonSelection::new(None);
        let p1 = region("p1", "2BHK", "cls-4");

        let hovering = InteractionState::Compare {
            hovered: Some(&p1.path_id),
            selection: &selection,
        };
        assert_eq!(renderer.fill_color(&p1, &hovering), "#f3ea0b");
        assert_eq!(renderer.opacity(&p1, &hovering), 0.9);

        let left = InteractionState::Compare {
            hovered: None,
            selection: &selection,
        };
        assert_eq!(renderer.fill_color(&p1, &left), "rgba(0, 0, 0, 0.1)");
        assert_eq!(renderer.opacity(&p1, &left), 1.0);
    }

    #[test]
    fn test_unknown_tag_hover_is_gold() {
        let config = SiteConfig::default();
        let renderer = HitRegionRenderer::new(&config);
        let selection = ComparisonSelection::new(None);
        let odd = region("q", "Duplex", "cls-unknown");

        let state = InteractionState::Compare {
            hovered: Some(&odd.path_id),
            selection: &selection,
        };
        assert_eq!(renderer.fill_color(&odd, &state), "#d0aa2d");
    }

    #[test]
    fn test_selected_without_lock() {
        let config = SiteConfig::default();
        let renderer = HitRegionRenderer::new(&config);
        let p1 = region("p1", "Duplex", "cls-4");
        let mut selection = ComparisonSelection::new(None);
        selection.toggle(&p1);

        let state = InteractionState::Compare {
            hovered: Some(&p1.path_id),
            selection: &selection,
        };
        assert_eq!(renderer.fill_color(&p1, &state), config.colors.selected);
        assert_eq!(renderer.opacity(&p1, &state), 0.9);
    }

    #[test]
    fn test_opposite_pair_highlighting() {
        let config = SiteConfig::default();
        let renderer = HitRegionRenderer::new(&config);
        let locked = region("p1", "Duplex", "cls-1");
        let other = region("p2", "Duplex-R", "cls-5");
        let same = region("p3", "Duplex", "cls-5");
        let mut selection = ComparisonSelection::new(Some(locked.snapshot()));

        let idle = InteractionState::Compare {
            hovered: Some(&locked.path_id),
            selection: &selection,
        };
        assert_eq!(renderer.fill_color(&locked, &idle), config.colors.locked);
        assert_eq!(renderer.fill_color(&other, &idle), config.colors.opposite_idle);
        assert_eq!(renderer.fill_color(&same, &idle), config.colors.ineligible);

        let hover_other = InteractionState::Compare {
            hovered: Some(&other.path_id),
            selection: &selection,
        };
        assert_eq!(
            renderer.fill_color(&other, &hover_other),
            config.colors.opposite_hover
        );

        selection.toggle(&other);
        let chosen = InteractionState::Compare {
            hovered: None,
            selection: &selection,
        };
        assert_eq!(
            renderer.fill_color(&other, &chosen),
            config.colors.opposite_selected
        );
        assert_eq!(renderer.opacity(&other, &chosen), 0.9);
    }

    #[test]
    fn test_unrelated_lock_type_renders_all_ineligible() {
        let config = SiteConfig::default();
        let renderer = HitRegionRenderer::new(&config);
        let locked = region("p1", "2BHK", "cls-1");
        let selection = ComparisonSelection::new(Some(locked.snapshot()));

        let others = [
            region("p2", "Duplex", "cls-4"),
            region("p3", "Duplex-R", "cls-4"),
            region("p4", "2BHK", "cls-4"),
        ];
        for other in &others {
            let state = InteractionState::Compare {
                hovered: Some(&other.path_id),
                selection: &selection,
            };
            assert_eq!(renderer.fill_color(other, &state), config.colors.ineligible);
        }
        let state = InteractionState::Compare {
            hovered: None,
            selection: &selection,
        };
        assert_eq!(renderer.fill_color(&locked, &state), config.colors.locked);
    }

    #[test]
    fn test_browse_mode_highlights_selected_with_class_color() {
        let config = SiteConfig::default();
        let renderer = HitRegionRenderer::new(&config);
        let p1 = region("p1", "Duplex", "cls-8");
        let p2 = region("p2", "Duplex", "cls-8");

        let state = InteractionState::Browse {
            hovered: None,
            selected: Some(&p1.path_id),
        };
        assert_eq!(
            renderer.style(&p1, &state),
            RegionStyle {
                fill: "#3b4b9f".to_string(),
                opacity: 0.9
            }
        );
        assert_eq!(renderer.style(&p2, &state).fill, "rgba(0, 0, 0, 0.1)");
        assert_eq!(renderer.style(&p2, &state).opacity, 1.0);
    }
}
