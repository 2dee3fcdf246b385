// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-slot floor plan carousel positions

use crate::ApartmentType;
use rustc_hash::FxHashMap;

/// Current image index for each apartment type; absent means 0
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarouselState {
    indices: FxHashMap<ApartmentType, usize>,
}

impl CarouselState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self, kind: &ApartmentType) -> usize {
        self.indices.get(kind).copied().unwrap_or(0)
    }

    /// Index clamped into a list of `len` images
    pub fn current_in(&self, kind: &ApartmentType, len: usize) -> usize {
        self.current(kind).min(len.saturating_sub(1))
    }

    /// Advance with wrap-around; no-op for lists of one or zero images
    pub fn next(&mut self, kind: &ApartmentType, len: usize) {
        if len <= 1 {
            return;
        }
        let current = self.current_in(kind, len);
        let next = if current + 1 < len { current + 1 } else { 0 };
        self.indices.insert(kind.clone(), next);
    }

    /// Step back with wrap-around; no-op for lists of one or zero images
    pub fn prev(&mut self, kind: &ApartmentType, len: usize) {
        if len <= 1 {
            return;
        }
        let current = self.current_in(kind, len);
        let prev = if current > 0 { current - 1 } else { len - 1 };
        self.indices.insert(kind.clone(), prev);
    }

    /// Jump straight to a dot; out-of-range indices are ignored
    pub fn select(&mut self, kind: &ApartmentType, index: usize, len: usize) {
        if index < len {
            self.indices.insert(kind.clone(), index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        let mut carousel = CarouselState::new();
        let kind = ApartmentType::Duplex;

        carousel.next(&kind, 3);
        carousel.next(&kind, 3);
        assert_eq!(carousel.current(&kind), 2);
        carousel.next(&kind, 3);
        assert_eq!(carousel.current(&kind), 0);
    }

    #[test]
    fn test_prev_wraps() {
        let mut carousel = CarouselState::new();
        let kind = ApartmentType::DuplexR;

        carousel.prev(&kind, 3);
        assert_eq!(carousel.current(&kind), 2);
        carousel.prev(&kind, 3);
        assert_eq!(carousel.current(&kind), 1);
    }

    #[test]
    fn test_single_image_is_noop() {
        let mut carousel = CarouselState::new();
        let kind = ApartmentType::Duplex;

        carousel.next(&kind, 1);
        carousel.prev(&kind, 1);
        assert_eq!(carousel, CarouselState::new());
    }

    #[test]
    fn test_slots_are_independent() {
        let mut carousel = CarouselState::new();
        carousel.select(&ApartmentType::Duplex, 1, 2);
        carousel.select(&ApartmentType::DuplexR, 5, 2);

        assert_eq!(carousel.current(&ApartmentType::Duplex), 1);
        assert_eq!(carousel.current(&ApartmentType::DuplexR), 0);
    }

    #[test]
    fn test_stale_index_clamped() {
        let mut carousel = CarouselState::new();
        carousel.select(&ApartmentType::Duplex, 3, 4);
        assert_eq!(carousel.current_in(&ApartmentType::Duplex, 2), 1);
        carousel.next(&ApartmentType::Duplex, 2);
        assert_eq!(carousel.current(&ApartmentType::Duplex), 0);
    }
}
