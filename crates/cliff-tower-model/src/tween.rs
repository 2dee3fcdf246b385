// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Time-boxed eased interpolation
//!
//! Sampled with absolute timestamps in milliseconds, as handed out by the
//! browser's animation frame callback.

/// Easing curves used by the site
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Easing {
    /// Cubic ease-in-out
    #[default]
    Power2InOut,
}

impl Easing {
    /// Map linear progress in [0, 1] to eased progress
    pub fn apply(self, p: f64) -> f64 {
        let p = p.clamp(0.0, 1.0);
        match self {
            Easing::Power2InOut => {
                if p < 0.5 {
                    4.0 * p * p * p
                } else {
                    1.0 - (-2.0 * p + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Single scalar animation from one value to another
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, start_ms: f64, duration_secs: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_secs * 1000.0,
            easing,
        }
    }

    /// Linear progress in [0, 1]
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value(&self, now_ms: f64) -> f64 {
        let eased = self.easing.apply(self.progress(now_ms));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_endpoints() {
        assert_relative_eq!(Easing::Power2InOut.apply(0.0), 0.0);
        assert_relative_eq!(Easing::Power2InOut.apply(1.0), 1.0);
        // Out-of-range progress is clamped
        assert_relative_eq!(Easing::Power2InOut.apply(-0.5), 0.0);
        assert_relative_eq!(Easing::Power2InOut.apply(1.5), 1.0);
    }

    #[test]
    fn test_in_out_is_symmetric() {
        assert_relative_eq!(Easing::Power2InOut.apply(0.5), 0.5, epsilon = 1e-9);
        let a = Easing::Power2InOut.apply(0.2);
        let b = Easing::Power2InOut.apply(0.8);
        assert_relative_eq!(a + b, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_tween_samples() {
        let tween = Tween::new(0.0, 100.0, 1000.0, 0.8, Easing::Power2InOut);
        assert_relative_eq!(tween.value(500.0), 0.0);
        assert_relative_eq!(tween.value(1200.0), 6.25, epsilon = 1e-9);
        assert_relative_eq!(tween.value(1400.0), 50.0, epsilon = 1e-9);
        assert_relative_eq!(tween.value(5000.0), 100.0);
        assert!(!tween.is_finished(1799.0));
        assert!(tween.is_finished(1800.0));
    }
}
