// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Story slider navigation
//!
//! The deck is a rotation of slides: the front slide is on screen, `next`
//! moves it to the back and `prev` brings the last one forward. Wheel and
//! touch input are reduced to [`NavDirection`]s by [`WheelAccumulator`] and
//! [`SwipeTracker`].

use crate::{ModelError, Result, SliderConfig};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub const DEFAULT_HEADING: &str = "Elegant Spaces";
pub const DEFAULT_TEXT: &str = "Experience luxury living with thoughtfully designed interiors.";

/// Slide as delivered by the data file
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSlide {
    pub id: u32,
    pub category: String,
    pub src: String,
    #[serde(default)]
    pub reveal_image: Option<String>,
    #[serde(default)]
    pub is_portrait: bool,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub subtext: Option<String>,
}

/// Slide with display defaults applied
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub id: u32,
    pub category: String,
    pub src: String,
    pub reveal_image: Option<String>,
    pub portrait: bool,
    pub heading: String,
    pub text: String,
    pub subtext: Option<String>,
}

impl Slide {
    pub fn from_raw(raw: RawSlide) -> Self {
        Self {
            id: raw.id,
            category: raw.category,
            src: raw.src,
            reveal_image: raw.reveal_image.filter(|s| !s.is_empty()),
            portrait: raw.is_portrait,
            heading: raw.heading.unwrap_or_else(|| DEFAULT_HEADING.to_string()),
            text: raw.text.unwrap_or_else(|| DEFAULT_TEXT.to_string()),
            subtext: raw.subtext.filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavDirection {
    Next,
    Prev,
}

/// Slide change the view has to animate
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DeckTransition {
    /// Slide index leaving the screen
    pub from: usize,
    /// Slide index entering the screen
    pub to: usize,
    pub direction: NavDirection,
}

/// Start offset of a category on the progress bar
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryMark {
    pub category: String,
    pub start_percent: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StoryDeck {
    slides: Vec<Slide>,
    order: VecDeque<usize>,
    animating: bool,
}

impl StoryDeck {
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(ModelError::config("story deck needs at least one slide"));
        }
        let order = (0..slides.len()).collect();
        Ok(Self {
            slides,
            order,
            animating: false,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<RawSlide> = serde_json::from_str(json)?;
        Self::new(raw.into_iter().map(Slide::from_raw).collect())
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Index of the slide on screen
    pub fn current_index(&self) -> usize {
        self.order[0]
    }

    pub fn current(&self) -> &Slide {
        &self.slides[self.current_index()]
    }

    pub fn current_category(&self) -> &str {
        &self.current().category
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn finish_transition(&mut self) {
        self.animating = false;
    }

    pub fn navigate(&mut self, direction: NavDirection) -> Option<DeckTransition> {
        match direction {
            NavDirection::Next => self.next(),
            NavDirection::Prev => self.prev(),
        }
    }

    pub fn next(&mut self) -> Option<DeckTransition> {
        self.rotate(1, NavDirection::Next)
    }

    pub fn prev(&mut self) -> Option<DeckTransition> {
        if self.order.len() < 2 {
            return None;
        }
        let steps = self.order.len() - 1;
        self.rotate(steps, NavDirection::Prev)
    }

    /// Bring the first slide of `category` to the front
    pub fn jump_to_category(&mut self, category: &str) -> Option<DeckTransition> {
        if self.animating || self.current_category() == category {
            return None;
        }
        let target = self
            .order
            .iter()
            .position(|&i| self.slides[i].category == category)?;
        if target == 0 {
            return None;
        }
        self.rotate(target, NavDirection::Next)
    }

    fn rotate(&mut self, steps: usize, direction: NavDirection) -> Option<DeckTransition> {
        if self.animating || self.order.len() < 2 {
            return None;
        }
        let from = self.current_index();
        self.order.rotate_left(steps);
        self.animating = true;
        let to = self.current_index();
        log::debug!("Story deck {:?}: slide {} -> {}", direction, from, to);
        Some(DeckTransition {
            from,
            to,
            direction,
        })
    }

    /// Share of the deck seen so far, in percent
    pub fn progress_percent(&self) -> f64 {
        (self.current_index() + 1) as f64 / self.slides.len() as f64 * 100.0
    }

    /// Distinct categories in data order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for slide in &self.slides {
            if !seen.contains(&slide.category.as_str()) {
                seen.push(&slide.category);
            }
        }
        seen
    }

    /// Progress bar marks, each category starting after the previous ones' slides
    pub fn category_marks(&self) -> Vec<CategoryMark> {
        let total = self.slides.len() as f64;
        let mut offset = 0.0;
        self.categories()
            .into_iter()
            .map(|category| {
                let count = self
                    .slides
                    .iter()
                    .filter(|s| s.category == category)
                    .count() as f64;
                let mark = CategoryMark {
                    category: category.to_string(),
                    start_percent: offset,
                };
                offset += count / total * 100.0;
                mark
            })
            .collect()
    }
}

/// Turns wheel / touchpad deltas into navigation steps
#[derive(Clone, Debug, PartialEq)]
pub struct WheelAccumulator {
    accumulated: f64,
    threshold: f64,
}

impl WheelAccumulator {
    pub fn new(config: &SliderConfig) -> Self {
        Self {
            accumulated: 0.0,
            threshold: config.wheel_threshold,
        }
    }

    /// Feed one wheel event; deltas seen while `busy` are discarded
    pub fn feed(&mut self, delta_y: f64, busy: bool) -> Option<NavDirection> {
        if busy {
            self.accumulated = 0.0;
            return None;
        }
        self.accumulated += delta_y;
        if self.accumulated.abs() < self.threshold {
            return None;
        }
        let direction = if self.accumulated > 0.0 {
            NavDirection::Next
        } else {
            NavDirection::Prev
        };
        self.accumulated = 0.0;
        Some(direction)
    }
}

/// Vertical swipe detection over one touch sequence
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeTracker {
    start: Option<(f64, f64)>,
    end: Option<(f64, f64)>,
    min_distance: f64,
}

impl SwipeTracker {
    pub fn new(config: &SliderConfig) -> Self {
        Self {
            start: None,
            end: None,
            min_distance: config.min_swipe_distance,
        }
    }

    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    pub fn touch_move(&mut self, x: f64, y: f64) {
        self.end = Some((x, y));
    }

    /// Finish the sequence; an upward swipe means next
    pub fn touch_end(&mut self) -> Option<NavDirection> {
        let start = self.start.take();
        let end = self.end.take();
        let ((sx, sy), (ex, ey)) = (start?, end?);

        let dy = sy - ey;
        let dx = sx - ex;
        if dy.abs() <= dx.abs() {
            return None;
        }
        if dy > self.min_distance {
            Some(NavDirection::Next)
        } else if dy < -self.min_distance {
            Some(NavDirection::Prev)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> StoryDeck {
        let slides = [
            (1, "amenities"),
            (2, "amenities"),
            (3, "apartment"),
            (4, "exterior"),
        ]
        .into_iter()
        .map(|(id, category)| {
            Slide::from_raw(RawSlide {
                id,
                category: category.to_string(),
                src: format!("/images/{id}.webp"),
                ..Default::default()
            })
        })
        .collect();
        StoryDeck::new(slides).unwrap()
    }

    #[test]
    fn test_next_and_prev_rotate() {
        let mut deck = deck();
        let step = deck.next().unwrap();
        assert_eq!((step.from, step.to), (0, 1));
        assert!(deck.next().is_none(), "blocked while animating");
        deck.finish_transition();

        let step = deck.prev().unwrap();
        assert_eq!((step.from, step.to), (1, 0));
        deck.finish_transition();

        deck.prev();
        deck.finish_transition();
        assert_eq!(deck.current_index(), 3);
        assert_eq!(deck.order.iter().position(|&i| i == 0), Some(1));
    }

    #[test]
    fn test_jump_to_category() {
        let mut deck = deck();
        assert!(deck.jump_to_category("amenities").is_none());

        let step = deck.jump_to_category("exterior").unwrap();
        assert_eq!(step.to, 3);
        deck.finish_transition();
        assert_eq!(deck.current_category(), "exterior");

        // Rotation continues from the new front
        deck.next();
        deck.finish_transition();
        assert_eq!(deck.current_index(), 0);
        assert!(deck.jump_to_category("missing").is_none());
    }

    #[test]
    fn test_progress_and_marks() {
        let mut deck = deck();
        assert_eq!(deck.progress_percent(), 25.0);
        deck.jump_to_category("apartment");
        assert_eq!(deck.progress_percent(), 75.0);

        let marks = deck.category_marks();
        let starts: Vec<_> = marks.iter().map(|m| m.start_percent).collect();
        assert_eq!(starts, vec![0.0, 50.0, 75.0]);
        assert_eq!(marks[2].category, "exterior");
    }

    #[test]
    fn test_slide_defaults() {
        let slide = Slide::from_raw(RawSlide {
            id: 9,
            category: "apartment".to_string(),
            src: "/a.webp".to_string(),
            reveal_image: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(slide.heading, DEFAULT_HEADING);
        assert_eq!(slide.text, DEFAULT_TEXT);
        assert!(slide.reveal_image.is_none());
    }

    #[test]
    fn test_empty_deck_rejected() {
        assert!(StoryDeck::new(Vec::new()).is_err());
        assert!(StoryDeck::from_json("[]").is_err());
    }

    #[test]
    fn test_wheel_accumulates_to_threshold() {
        let mut wheel = WheelAccumulator::new(&SliderConfig::default());
        assert_eq!(wheel.feed(40.0, false), None);
        assert_eq!(wheel.feed(40.0, false), None);
        assert_eq!(wheel.feed(30.0, false), Some(NavDirection::Next));
        assert_eq!(wheel.feed(-60.0, false), None);
        assert_eq!(wheel.feed(-60.0, false), Some(NavDirection::Prev));
    }

    #[test]
    fn test_wheel_resets_while_busy() {
        let mut wheel = WheelAccumulator::new(&SliderConfig::default());
        wheel.feed(90.0, false);
        assert_eq!(wheel.feed(90.0, true), None);
        assert_eq!(wheel.feed(20.0, false), None);
    }

    #[test]
    fn test_vertical_swipes() {
        let mut swipe = SwipeTracker::new(&SliderConfig::default());
        swipe.touch_start(100.0, 400.0);
        swipe.touch_move(110.0, 300.0);
        assert_eq!(swipe.touch_end(), Some(NavDirection::Next));

        swipe.touch_start(100.0, 300.0);
        swipe.touch_move(100.0, 400.0);
        assert_eq!(swipe.touch_end(), Some(NavDirection::Prev));
    }

    #[test]
    fn test_ignored_swipes() {
        let mut swipe = SwipeTracker::new(&SliderConfig::default());

        // Horizontal dominant
        swipe.touch_start(0.0, 400.0);
        swipe.touch_move(200.0, 300.0);
        assert_eq!(swipe.touch_end(), None);

        // Too short
        swipe.touch_start(0.0, 400.0);
        swipe.touch_move(0.0, 370.0);
        assert_eq!(swipe.touch_end(), None);

        // Tap without movement
        swipe.touch_start(0.0, 400.0);
        assert_eq!(swipe.touch_end(), None);
    }
}
