// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Image reveal gesture
//!
//! A circular mask over a pair of images. On wide viewports the mask follows
//! the pointer with per-frame exponential smoothing and a click expands it
//! over the whole container before the two images swap roles. Narrow
//! viewports get a plain toggle instead.
//!
//! This is plain state: the view layer reads [`MaskState`] each frame and
//! calls [`RevealGesture::tick`] from its frame scheduler for as long as
//! tick returns [`FrameRequest::Continue`].

use crate::{Easing, RevealConfig, Tween};

/// Presentation picked from the viewport width
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RevealMode {
    /// Static toggle button, no frame loop
    Compact,
    /// Pointer-following mask
    Pointer,
}

/// Whether the frame loop should keep running
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FrameRequest {
    Continue,
    Idle,
}

/// Interpolated mask properties, in container pixels
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MaskState {
    pub x: f64,
    pub y: f64,
    /// Diameter of the reveal circle
    pub size: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl MaskState {
    fn hidden(offset: f64) -> Self {
        Self {
            x: -offset,
            y: -offset,
            size: 0.0,
            scale: 1.0,
            opacity: 0.0,
        }
    }

    pub fn radius(&self) -> f64 {
        self.size / 2.0
    }
}

/// One-shot expanding circle started by a click
#[derive(Clone, Copy, PartialEq, Debug)]
struct RevealTransition {
    origin: (f64, f64),
    size: Tween,
    scale: Tween,
    opacity: Tween,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealGesture {
    settings: RevealConfig,
    mode: RevealMode,
    pointer: (f64, f64),
    hovering: bool,
    mask: MaskState,
    transition: Option<RevealTransition>,
    looping: bool,
    swapped: bool,
    compact_alternate: bool,
}

impl RevealGesture {
    pub fn new(settings: &RevealConfig, viewport_width: f64) -> Self {
        let offset = settings.cursor_size;
        Self {
            settings: settings.clone(),
            mode: Self::mode_for(settings, viewport_width),
            pointer: (-offset, -offset),
            hovering: false,
            mask: MaskState::hidden(offset),
            transition: None,
            looping: false,
            swapped: false,
            compact_alternate: false,
        }
    }

    fn mode_for(settings: &RevealConfig, viewport_width: f64) -> RevealMode {
        if settings.is_compact(viewport_width) {
            RevealMode::Compact
        } else {
            RevealMode::Pointer
        }
    }

    /// Re-evaluate the breakpoint. Returns true when the mode changed.
    pub fn resize(&mut self, viewport_width: f64) -> bool {
        let mode = Self::mode_for(&self.settings, viewport_width);
        if mode == self.mode {
            return false;
        }
        log::debug!("Reveal mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        if mode == RevealMode::Compact {
            self.hovering = false;
            self.looping = false;
            if self.transition.take().is_some() {
                self.finish_transition();
            }
        }
        true
    }

    pub fn mode(&self) -> RevealMode {
        self.mode
    }

    pub fn mask(&self) -> MaskState {
        self.mask
    }

    /// A one-shot transition owns the mask
    pub fn is_busy(&self) -> bool {
        self.transition.is_some()
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// The two images have traded places an odd number of times
    pub fn is_swapped(&self) -> bool {
        self.swapped
    }

    pub fn compact_shows_alternate(&self) -> bool {
        self.compact_alternate
    }

    pub fn toggle_compact(&mut self) {
        self.compact_alternate = !self.compact_alternate;
    }

    /// Start the frame loop if it is not running.
    ///
    /// Returns true when the caller has to schedule a frame.
    fn arm(&mut self) -> bool {
        if self.mode == RevealMode::Compact || self.looping {
            return false;
        }
        if self.hovering && !self.is_busy() {
            self.mask.x = self.pointer.0;
            self.mask.y = self.pointer.1;
        }
        self.looping = true;
        true
    }

    pub fn pointer_enter(&mut self) -> bool {
        if self.is_busy() || self.mode == RevealMode::Compact {
            return false;
        }
        self.hovering = true;
        self.arm()
    }

    pub fn pointer_leave(&mut self) -> bool {
        if self.is_busy() || self.mode == RevealMode::Compact {
            return false;
        }
        self.hovering = false;
        self.arm()
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        if self.is_busy() || self.mode == RevealMode::Compact {
            return false;
        }
        self.pointer = (x, y);
        self.hovering && self.arm()
    }

    /// Begin the expanding transition from a click inside a `width` x `height`
    /// container. Returns true when the caller has to schedule a frame.
    pub fn click(&mut self, x: f64, y: f64, width: f64, height: f64, now_ms: f64) -> bool {
        if self.is_busy() || self.mode == RevealMode::Compact {
            return false;
        }
        let diagonal = (width * width + height * height).sqrt();
        let secs = self.settings.transition_secs;
        let ease = Easing::Power2InOut;

        self.transition = Some(RevealTransition {
            origin: (x, y),
            size: Tween::new(self.mask.size, diagonal * 2.0, now_ms, secs, ease),
            scale: Tween::new(self.mask.scale, 1.0, now_ms, secs, ease),
            opacity: Tween::new(self.mask.opacity, 1.0, now_ms, secs, ease),
        });
        self.mask.x = x;
        self.mask.y = y;

        if self.looping {
            false
        } else {
            self.looping = true;
            true
        }
    }

    /// Advance one frame
    pub fn tick(&mut self, now_ms: f64) -> FrameRequest {
        if self.mode == RevealMode::Compact {
            self.looping = false;
            return FrameRequest::Idle;
        }

        if let Some(transition) = self.transition {
            self.mask.x = transition.origin.0;
            self.mask.y = transition.origin.1;
            self.mask.size = transition.size.value(now_ms);
            self.mask.scale = transition.scale.value(now_ms);
            self.mask.opacity = transition.opacity.value(now_ms);

            if !transition.size.is_finished(now_ms) {
                return FrameRequest::Continue;
            }
            self.transition = None;
            self.finish_transition();
            if self.hovering {
                return FrameRequest::Continue;
            }
        }

        self.step_follow()
    }

    /// Swap the images and hide the mask at the last pointer position
    fn finish_transition(&mut self) {
        self.swapped = !self.swapped;
        self.mask.size = 0.0;
        self.mask.opacity = 0.0;
        self.mask.x = self.pointer.0;
        self.mask.y = self.pointer.1;
        log::debug!("Reveal transition complete, swapped={}", self.swapped);
    }

    fn step_follow(&mut self) -> FrameRequest {
        let factor = self.settings.lerp_factor;
        let (target_size, target_scale, target_opacity) = if self.hovering {
            (self.settings.cursor_size, self.settings.hover_scale, 1.0)
        } else {
            (0.0, 1.0, 0.0)
        };

        let mask = &mut self.mask;
        mask.x += (self.pointer.0 - mask.x) * factor;
        mask.y += (self.pointer.1 - mask.y) * factor;
        mask.size += (target_size - mask.size) * factor;
        mask.scale += (target_scale - mask.scale) * factor;
        mask.opacity += (target_opacity - mask.opacity) * factor;

        let settled = (target_size - mask.size).abs() < self.settings.settle_epsilon;
        if !self.hovering && settled {
            self.looping = false;
            FrameRequest::Idle
        } else {
            FrameRequest::Continue
        }
    }

    /// Drop the loop registration, e.g. on unmount
    pub fn stop(&mut self) {
        self.looping = false;
    }
}
