// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor comparison selection
//!
//! Holds at most one floor per apartment type and at most two types. An
//! optional locked floor occupies its type's slot for the lifetime of the
//! comparison view and survives toggles, removals and clears.

use crate::{ApartmentType, FloorRegion, FloorSnapshot, PathId};
use serde::{Deserialize, Serialize};

/// Maximum number of apartment types compared side by side
pub const MAX_COMPARED_TYPES: usize = 2;

/// Cardinality of the selection
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SelectionPhase {
    Empty,
    OneSelected,
    TwoSelected,
}

/// What a toggle did
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToggleOutcome {
    /// The region is, or would displace, the locked floor; nothing changed
    Locked,
    Selected,
    Deselected,
    /// Another floor of the same type was swapped out
    Replaced,
    /// Both slots hold other types; nothing changed
    CapacityReached,
}

/// Apartment type → chosen floor mapping, in slot order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSelection {
    slots: Vec<FloorSnapshot>,
    locked: Option<FloorSnapshot>,
}

impl ComparisonSelection {
    pub fn new(locked: Option<FloorSnapshot>) -> Self {
        let mut selection = Self::default();
        selection.initialize(locked);
        selection
    }

    /// Reset to the locked floor alone, or to empty
    pub fn initialize(&mut self, locked: Option<FloorSnapshot>) {
        self.slots.clear();
        if let Some(floor) = &locked {
            self.slots.push(floor.clone());
        }
        self.locked = locked;
    }

    pub fn toggle(&mut self, region: &FloorRegion) -> ToggleOutcome {
        let kind = &region.apartment_type;
        if self.is_locked(&region.path_id) || self.locked_type() == Some(kind) {
            return ToggleOutcome::Locked;
        }

        let outcome = match self.position(kind) {
            Some(pos) if self.slots[pos].id == region.path_id => {
                self.slots.remove(pos);
                ToggleOutcome::Deselected
            }
            Some(pos) => {
                self.slots[pos] = region.snapshot();
                ToggleOutcome::Replaced
            }
            None if self.slots.len() < MAX_COMPARED_TYPES => {
                self.slots.push(region.snapshot());
                ToggleOutcome::Selected
            }
            None => ToggleOutcome::CapacityReached,
        };

        log::debug!("Toggle {} ({}): {:?}", region.path_id, kind, outcome);
        outcome
    }

    /// Drop a type's slot unless it holds the locked floor
    pub fn remove_type(&mut self, kind: &ApartmentType) -> bool {
        if self.locked_type() == Some(kind) {
            return false;
        }
        match self.position(kind) {
            Some(pos) => {
                self.slots.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Back to the initial state; the lock is kept
    pub fn clear_all(&mut self) {
        let locked = self.locked.take();
        self.initialize(locked);
    }

    /// Chosen floors in slot order
    pub fn selected_list(&self) -> &[FloorSnapshot] {
        &self.slots
    }

    pub fn is_selected(&self, id: &PathId) -> bool {
        self.slots.iter().any(|floor| &floor.id == id)
    }

    pub fn is_locked(&self, id: &PathId) -> bool {
        self.locked.as_ref().is_some_and(|floor| &floor.id == id)
    }

    pub fn locked(&self) -> Option<&FloorSnapshot> {
        self.locked.as_ref()
    }

    pub fn locked_type(&self) -> Option<&ApartmentType> {
        self.locked.as_ref().map(|floor| &floor.apartment_type)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn phase(&self) -> SelectionPhase {
        match self.slots.len() {
            0 => SelectionPhase::Empty,
            1 => SelectionPhase::OneSelected,
            _ => SelectionPhase::TwoSelected,
        }
    }

    fn position(&self, kind: &ApartmentType) -> Option<usize> {
        self.slots
            .iter()
            .position(|floor| &floor.apartment_type == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawFloorRecord;

    fn region(id: &str, kind: &str) -> FloorRegion {
        FloorRegion::from_raw(RawFloorRecord {
            path_id: id.to_string(),
            geometry: "M0 0Z".to_string(),
            class_tag: "cls-1".to_string(),
            apartment_type: Some(kind.to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_select_and_deselect() {
        let mut selection = ComparisonSelection::new(None);
        let a = region("a1", "A");

        assert_eq!(selection.toggle(&a), ToggleOutcome::Selected);
        assert_eq!(selection.phase(), SelectionPhase::OneSelected);
        assert!(selection.is_selected(&a.path_id));

        assert_eq!(selection.toggle(&a), ToggleOutcome::Deselected);
        assert_eq!(selection.phase(), SelectionPhase::Empty);
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut selection = ComparisonSelection::new(None);
        selection.toggle(&region("a1", "A"));
        let before = selection.clone();

        let b = region("b1", "B");
        selection.toggle(&b);
        selection.toggle(&b);
        assert_eq!(selection, before);
    }

    #[test]
    fn test_replace_within_slot() {
        let mut selection = ComparisonSelection::new(None);
        selection.toggle(&region("a1", "A"));
        selection.toggle(&region("b1", "B"));

        assert_eq!(selection.toggle(&region("a2", "A")), ToggleOutcome::Replaced);
        let ids: Vec<_> = selection.selected_list().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["a2", "b1"]);
    }

    #[test]
    fn test_third_type_dropped() {
        let mut selection = ComparisonSelection::new(None);
        selection.toggle(&region("a1", "A"));
        selection.toggle(&region("b1", "B"));
        let before = selection.clone();

        assert_eq!(
            selection.toggle(&region("c1", "C")),
            ToggleOutcome::CapacityReached
        );
        assert_eq!(selection, before);
    }

    #[test]
    fn test_never_exceeds_two_types() {
        let regions: Vec<_> = (0..12)
            .map(|i| region(&format!("r{i}"), ["A", "B", "C", "D"][i % 4]))
            .collect();
        let mut selection = ComparisonSelection::new(Some(regions[5].snapshot()));

        let mut seed: u32 = 7;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let pick = (seed >> 16) as usize % regions.len();
            selection.toggle(&regions[pick]);
            assert!(selection.len() <= MAX_COMPARED_TYPES);
            assert!(selection.is_selected(&regions[5].path_id));
        }
    }

    #[test]
    fn test_locked_floor_is_permanent() {
        let locked = region("p1", "Duplex");
        let mut selection = ComparisonSelection::new(Some(locked.snapshot()));

        assert_eq!(selection.toggle(&locked), ToggleOutcome::Locked);
        assert!(!selection.remove_type(&ApartmentType::Duplex));
        selection.toggle(&region("p2", "Duplex-R"));
        selection.clear_all();

        assert_eq!(selection.len(), 1);
        assert!(selection.is_selected(&locked.path_id));
        assert!(selection.is_locked(&locked.path_id));
    }

    #[test]
    fn test_same_type_as_lock_cannot_replace_it() {
        let locked = region("p1", "Duplex");
        let mut selection = ComparisonSelection::new(Some(locked.snapshot()));

        assert_eq!(selection.toggle(&region("p3", "Duplex")), ToggleOutcome::Locked);
        assert_eq!(selection.selected_list(), &[locked.snapshot()]);
    }

    #[test]
    fn test_clear_matches_initialize() {
        let locked = region("p1", "Duplex").snapshot();
        let mut cleared = ComparisonSelection::new(Some(locked.clone()));
        cleared.toggle(&region("p2", "Duplex-R"));
        cleared.clear_all();

        let fresh = ComparisonSelection::new(Some(locked));
        assert_eq!(cleared, fresh);

        let mut unlocked = ComparisonSelection::new(None);
        unlocked.toggle(&region("x", "A"));
        unlocked.clear_all();
        assert_eq!(unlocked, ComparisonSelection::new(None));
    }

    #[test]
    fn test_remove_type() {
        let mut selection = ComparisonSelection::new(None);
        selection.toggle(&region("a1", "A"));
        selection.toggle(&region("b1", "B"));

        assert!(selection.remove_type(&"A".into()));
        assert!(!selection.remove_type(&"A".into()));
        let types: Vec<_> = selection
            .selected_list()
            .iter()
            .map(|f| f.apartment_type.label().to_string())
            .collect();
        assert_eq!(types, vec!["B"]);
    }
}
