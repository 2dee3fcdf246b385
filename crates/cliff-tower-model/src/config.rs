// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-deployment visual tuning
//!
//! Colour tables, diagram transforms, image lists and animation constants are
//! injected here instead of living in separate page variants. Every section
//! falls back to compiled-in defaults, so a JSON override only needs the keys
//! it changes.

use crate::{ApartmentType, ClassTag, ModelError, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Colour for unknown classification tags
pub const DEFAULT_CLASS_COLOR: &str = "#d0aa2d";

const SLATE: &str = "rgba(29, 41, 56, 0.60)";
const FLOOR_PLAN_IMAGE: &str = "/images/floorplan.jpeg";

/// Classification tag colour table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassPalette {
    pub classes: FxHashMap<ClassTag, String>,
    pub fallback: String,
}

impl ClassPalette {
    /// Colour for a tag; unknown tags get the fallback
    pub fn color_for(&self, tag: &ClassTag) -> &str {
        self.classes
            .get(tag)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }
}

impl Default for ClassPalette {
    fn default() -> Self {
        let classes = [
            ("cls-1", SLATE),
            ("cls-2", SLATE),
            ("cls-3", SLATE),
            ("cls-4", "#f3ea0b"),
            ("cls-5", "#f7ec13"),
            ("cls-6", "#f4ea11"),
            ("cls-7", "rgba(181, 209, 141, 0.60)"),
            ("cls-8", "#3b4b9f"),
            ("cls-9", "rgba(204, 256, 252, 0.60)"),
        ]
        .into_iter()
        .map(|(tag, color)| (ClassTag::from(tag), color.to_string()))
        .collect();

        Self {
            classes,
            fallback: DEFAULT_CLASS_COLOR.to_string(),
        }
    }
}

/// Fill colours for interaction states
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateColors {
    pub selected: String,
    pub locked: String,
    /// Regions nobody is pointing at
    pub idle: String,
    /// Regions that cannot be compared with the locked floor
    pub ineligible: String,
    pub opposite_idle: String,
    pub opposite_hover: String,
    pub opposite_selected: String,
    /// Opacity of hovered or selected regions
    pub active_opacity: f64,
}

impl Default for StateColors {
    fn default() -> Self {
        Self {
            selected: SLATE.to_string(),
            locked: SLATE.to_string(),
            idle: "rgba(0, 0, 0, 0.1)".to_string(),
            ineligible: "rgba(0, 0, 0, 0.15)".to_string(),
            opposite_idle: "rgba(59, 130, 246, 0.3)".to_string(),
            opposite_hover: "rgba(59, 130, 246, 0.5)".to_string(),
            opposite_selected: SLATE.to_string(),
            active_opacity: 0.9,
        }
    }
}

/// Geometry of the building diagram
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    pub view_box_width: f64,
    pub view_box_height: f64,
    pub backdrop: String,
    /// CSS transform applied to the group of region paths
    pub group_transform: String,
    /// Extra transform of the whole SVG inside the comparison sidebar
    pub compare_transform: String,
    /// Tags whose click on the inventory page opens a locked comparison
    pub lockable_classes: Vec<ClassTag>,
}

impl DiagramConfig {
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.view_box_width, self.view_box_height)
    }

    pub fn is_lockable(&self, tag: &ClassTag) -> bool {
        self.lockable_classes.contains(tag)
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            view_box_width: 6826.0,
            view_box_height: 3840.0,
            backdrop: "/images/building.webp".to_string(),
            group_transform: "translate(2050px, -10px) scale(0.85)".to_string(),
            compare_transform: "translateY(-15%)".to_string(),
            lockable_classes: vec!["cls-1".into(), "cls-2".into(), "cls-3".into()],
        }
    }
}

/// Floor plan images per apartment type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorPlanCatalog {
    pub plans: FxHashMap<ApartmentType, Vec<String>>,
    pub fallback: Vec<String>,
}

impl FloorPlanCatalog {
    pub fn images_for(&self, kind: &ApartmentType) -> &[String] {
        match self.plans.get(kind) {
            Some(images) if !images.is_empty() => images,
            _ => &self.fallback,
        }
    }
}

impl Default for FloorPlanCatalog {
    fn default() -> Self {
        let pair = vec![FLOOR_PLAN_IMAGE.to_string(), FLOOR_PLAN_IMAGE.to_string()];
        let mut plans = FxHashMap::default();
        plans.insert(ApartmentType::Duplex, pair.clone());
        plans.insert(ApartmentType::DuplexR, pair);
        Self {
            plans,
            fallback: vec![FLOOR_PLAN_IMAGE.to_string()],
        }
    }
}

/// Image reveal tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Viewports at or below this width use the compact toggle
    pub compact_breakpoint: f64,
    pub cursor_size: f64,
    pub lerp_factor: f64,
    pub settle_epsilon: f64,
    pub hover_scale: f64,
    pub transition_secs: f64,
}

impl RevealConfig {
    pub fn is_compact(&self, viewport_width: f64) -> bool {
        viewport_width <= self.compact_breakpoint
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            compact_breakpoint: 1024.0,
            cursor_size: 120.0,
            lerp_factor: 0.1,
            settle_epsilon: 0.1,
            hover_scale: 1.1,
            transition_secs: 0.8,
        }
    }
}

/// Story slider tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub wheel_threshold: f64,
    pub min_swipe_distance: f64,
    pub transition_secs: f64,
    /// Transition progress at which the incoming slide's text appears
    pub text_reveal_progress: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            wheel_threshold: 100.0,
            min_swipe_distance: 50.0,
            transition_secs: 2.0,
            text_reveal_progress: 0.33,
        }
    }
}

/// Complete site configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub palette: ClassPalette,
    pub colors: StateColors,
    pub diagram: DiagramConfig,
    pub floor_plans: FloorPlanCatalog,
    pub reveal: RevealConfig,
    pub slider: SliderConfig,
}

impl SiteConfig {
    /// Parse overrides; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let reveal = &self.reveal;
        if !(reveal.lerp_factor > 0.0 && reveal.lerp_factor <= 1.0) {
            return Err(ModelError::config(format!(
                "lerp_factor must be in (0, 1], got {}",
                reveal.lerp_factor
            )));
        }
        if reveal.transition_secs <= 0.0 || self.slider.transition_secs <= 0.0 {
            return Err(ModelError::config("transition durations must be positive"));
        }
        if reveal.settle_epsilon <= 0.0 {
            return Err(ModelError::config("settle_epsilon must be positive"));
        }
        if self.floor_plans.fallback.is_empty() {
            return Err(ModelError::config("floor plan fallback list is empty"));
        }
        if self.slider.wheel_threshold <= 0.0 {
            return Err(ModelError::config("wheel_threshold must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tag_is_gold() {
        let palette = ClassPalette::default();
        assert_eq!(palette.color_for(&"cls-4".into()), "#f3ea0b");
        assert_eq!(palette.color_for(&"cls-42".into()), "#d0aa2d");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config =
            SiteConfig::from_json(r##"{"colors":{"idle":"#000"},"reveal":{"cursor_size":80}}"##)
                .unwrap();
        assert_eq!(config.colors.idle, "#000");
        assert_eq!(config.colors.ineligible, "rgba(0, 0, 0, 0.15)");
        assert_eq!(config.reveal.cursor_size, 80.0);
        assert_eq!(config.reveal.lerp_factor, 0.1);
        assert_eq!(config.diagram.view_box(), "0 0 6826 3840");
    }

    #[test]
    fn test_rejects_bad_lerp() {
        let err = SiteConfig::from_json(r#"{"reveal":{"lerp_factor":0}}"#).unwrap_err();
        assert!(matches!(err, ModelError::InvalidConfig(_)));
    }

    #[test]
    fn test_floor_plan_fallback() {
        let catalog = FloorPlanCatalog::default();
        assert_eq!(catalog.images_for(&ApartmentType::Duplex).len(), 2);
        assert_eq!(catalog.images_for(&ApartmentType::from("3BHK")).len(), 1);
    }

    #[test]
    fn test_floor_plan_override_by_type_name() {
        let config = SiteConfig::from_json(
            r#"{"floor_plans":{"plans":{"Duplex-R":["/a.jpg","/b.jpg","/c.jpg"]}}}"#,
        )
        .unwrap();
        assert_eq!(config.floor_plans.images_for(&ApartmentType::DuplexR).len(), 3);
        assert_eq!(config.floor_plans.images_for(&ApartmentType::Duplex).len(), 1);
    }

    #[test]
    fn test_compact_breakpoint_inclusive() {
        let reveal = RevealConfig::default();
        assert!(reveal.is_compact(1024.0));
        assert!(!reveal.is_compact(1025.0));
    }

    #[test]
    fn test_lockable_classes() {
        let diagram = DiagramConfig::default();
        assert!(diagram.is_lockable(&"cls-2".into()));
        assert!(!diagram.is_lockable(&"cls-4".into()));
    }
}
