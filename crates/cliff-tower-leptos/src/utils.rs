//! Utility functions for the Leptos UI

use cliff_tower_model::MaskState;

/// Colours of one comparison panel
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PanelScheme {
    pub border: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub badge: &'static str,
}

const SLOT_SCHEMES: [PanelScheme; 2] = [
    // Blue
    PanelScheme {
        border: "#C4E0FD",
        background: "#E8F4FE",
        text: "#1E5A8E",
        badge: "#C4E0FD",
    },
    // Green
    PanelScheme {
        border: "#BDD1B1",
        background: "#E8F3E3",
        text: "#2D5016",
        badge: "#BDD1B1",
    },
];

const LOCKED_SCHEME: PanelScheme = PanelScheme {
    border: "#C19A40",
    background: "#FFE8CC",
    text: "#C19A40",
    badge: "#C19A40",
};

/// Scheme by panel position; the locked panel always gets gold
pub fn panel_scheme(position: usize, locked: bool) -> PanelScheme {
    if locked {
        LOCKED_SCHEME
    } else {
        SLOT_SCHEMES[position % SLOT_SCHEMES.len()]
    }
}

/// Append a two-digit hex alpha to a #RRGGBB colour
pub fn with_alpha(hex: &str, alpha: &str) -> String {
    format!("{hex}{alpha}")
}

/// CSS clip-path for the reveal circle
pub fn clip_circle(radius: f64, x: f64, y: f64) -> String {
    format!("circle({radius}px at {x}px {y}px)")
}

/// Transform of the ring that follows the pointer
pub fn indicator_transform(mask: &MaskState) -> String {
    format!(
        "translate({}px, {}px) translate(-50%, -50%) scale({})",
        mask.x, mask.y, mask.scale
    )
}

/// Inline style of the masked image: clipped, scaled around the mask centre
pub fn reveal_image_style(mask: &MaskState) -> String {
    format!(
        "clip-path: {}; transform: scale({}); transform-origin: {}px {}px",
        clip_circle(mask.radius(), mask.x, mask.y),
        mask.scale,
        mask.x,
        mask.y
    )
}

/// Inline style of the ring; it grows with the mask during a click transition
pub fn reveal_ring_style(mask: &MaskState) -> String {
    format!(
        "width: {size}px; height: {size}px; opacity: {}; transform: {}",
        mask.opacity,
        indicator_transform(mask),
        size = mask.size
    )
}

/// (underneath, masked) image sources; a swap trades them
pub fn reveal_sources<'a>(swapped: bool, base: &'a str, reveal: &'a str) -> (&'a str, &'a str) {
    if swapped {
        (reveal, base)
    } else {
        (base, reveal)
    }
}

/// Stacking of the gallery overlays (logo, category nav, progress bar)
pub const OVERLAY_Z_INDEX: u32 = 50;

/// Stacking and clip of one gallery slide
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SlideLayer {
    pub z_index: u32,
    pub shown: bool,
    /// Clip change runs as a CSS transition
    pub animated: bool,
}

/// Layer of a slide given whether it is in front, leaving, and whether a
/// transition is running
pub fn slide_layer(front: bool, leaving: bool, animating: bool) -> SlideLayer {
    match (front, leaving) {
        (true, _) if animating => SlideLayer {
            z_index: 3,
            shown: true,
            animated: true,
        },
        (true, _) | (false, true) => SlideLayer {
            z_index: 2,
            shown: true,
            animated: false,
        },
        (false, false) => SlideLayer {
            z_index: 1,
            shown: false,
            animated: false,
        },
    }
}

/// Hero element class for the staged entrance
pub fn stage_class(base: &str, entered: bool) -> String {
    if entered {
        format!("{base} entered")
    } else {
        base.to_string()
    }
}

/// Collapsed-to-the-right clip used for slides waiting off screen
pub const SLIDE_CLIP_HIDDEN: &str = "polygon(100% 0%, 100% 0%, 100% 100%, 100% 100%)";
/// Fully open slide clip
pub const SLIDE_CLIP_SHOWN: &str = "polygon(0% 0%, 100% 0%, 100% 100%, 0% 100%)";

/// CSS easing matching the slider's hop curve closely enough for clip transitions
pub const HOP_CSS_EASING: &str = "cubic-bezier(0.12, 0.77, 0.32, 1)";

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(size: f64) -> MaskState {
        MaskState {
            x: 40.0,
            y: 30.0,
            size,
            scale: 1.1,
            opacity: 0.5,
        }
    }

    #[test]
    fn test_panel_scheme_alternates_and_lock_wins() {
        assert_eq!(panel_scheme(0, false).border, "#C4E0FD");
        assert_eq!(panel_scheme(1, false).border, "#BDD1B1");
        assert_eq!(panel_scheme(2, false), panel_scheme(0, false));
        assert_eq!(panel_scheme(1, true), LOCKED_SCHEME);
    }

    #[test]
    fn test_reveal_image_scales_around_mask_without_fading() {
        let style = reveal_image_style(&mask(120.0));
        assert!(style.contains("circle(60px at 40px 30px)"));
        assert!(style.contains("transform: scale(1.1)"));
        assert!(style.contains("transform-origin: 40px 30px"));
        assert!(!style.contains("opacity"));
    }

    #[test]
    fn test_ring_follows_animated_size() {
        assert!(reveal_ring_style(&mask(120.0)).starts_with("width: 120px; height: 120px"));
        assert!(reveal_ring_style(&mask(2400.0)).starts_with("width: 2400px; height: 2400px"));
    }

    #[test]
    fn test_reveal_sources_swap() {
        assert_eq!(reveal_sources(false, "day", "night"), ("day", "night"));
        assert_eq!(reveal_sources(true, "day", "night"), ("night", "day"));
    }

    #[test]
    fn test_overlays_stack_above_every_slide() {
        for front in [false, true] {
            for leaving in [false, true] {
                for animating in [false, true] {
                    assert!(slide_layer(front, leaving, animating).z_index < OVERLAY_Z_INDEX);
                }
            }
        }
    }

    #[test]
    fn test_slide_layers() {
        let entering = slide_layer(true, false, true);
        assert!(entering.shown && entering.animated);
        let leaving = slide_layer(false, true, true);
        assert!(leaving.shown && !leaving.animated);
        assert!(entering.z_index > leaving.z_index);
        assert!(!slide_layer(false, false, false).shown);
        assert!(!slide_layer(true, false, false).animated);
    }

    #[test]
    fn test_stage_class() {
        assert_eq!(stage_class("hero-title", false), "hero-title");
        assert_eq!(stage_class("hero-title", true), "hero-title entered");
    }
}
