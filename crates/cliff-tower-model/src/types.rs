// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for floor regions and their display snapshots

use crate::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown when a record has no floor number
pub const DEFAULT_FLOOR_NUMBER: &str = "XX";
/// Placeholder shown when a record has no price
pub const DEFAULT_PRICE: &str = "XX Cr";
/// Placeholder shown when a record has no area
pub const DEFAULT_AREA: &str = "XXXX sq.ft";

/// Identifier of one SVG path in the building diagram
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathId(pub String);

impl PathId {
    pub fn new(id: impl Into<String>) -> Self {
        PathId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PathId {
    fn from(s: &str) -> Self {
        PathId(s.to_string())
    }
}

/// Classification tag of a region, only used for colour lookup
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassTag(pub String);

impl ClassTag {
    pub fn new(tag: impl Into<String>) -> Self {
        ClassTag(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClassTag {
    fn from(s: &str) -> Self {
        ClassTag(s.to_string())
    }
}

/// Apartment category used to partition comparison slots
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApartmentType {
    #[default]
    Duplex,
    DuplexR,
    Other(String),
}

impl ApartmentType {
    pub fn label(&self) -> &str {
        match self {
            ApartmentType::Duplex => "Duplex",
            ApartmentType::DuplexR => "Duplex-R",
            ApartmentType::Other(s) => s,
        }
    }

    /// The type a locked floor of this type is compared against.
    ///
    /// Only the Duplex / Duplex-R pair has a counterpart.
    pub fn opposite(&self) -> Result<ApartmentType> {
        match self {
            ApartmentType::Duplex => Ok(ApartmentType::DuplexR),
            ApartmentType::DuplexR => Ok(ApartmentType::Duplex),
            ApartmentType::Other(s) => Err(ModelError::no_opposite(s.clone())),
        }
    }
}

impl From<String> for ApartmentType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Duplex" => ApartmentType::Duplex,
            "Duplex-R" => ApartmentType::DuplexR,
            _ => ApartmentType::Other(s),
        }
    }
}

impl From<&str> for ApartmentType {
    fn from(s: &str) -> Self {
        ApartmentType::from(s.to_string())
    }
}

impl From<ApartmentType> for String {
    fn from(kind: ApartmentType) -> Self {
        match kind {
            ApartmentType::Other(s) => s,
            other => other.label().to_string(),
        }
    }
}

impl fmt::Display for ApartmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Floor record as delivered by the data file
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFloorRecord {
    pub path_id: String,
    #[serde(rename = "d")]
    pub geometry: String,
    #[serde(rename = "class", default)]
    pub class_tag: String,
    #[serde(rename = "bhk", default)]
    pub apartment_type: Option<String>,
    #[serde(rename = "floorNumber", default)]
    pub floor_number: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub availability: Option<bool>,
}

/// Non-empty string or the fallback
fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => placeholder.to_string(),
    }
}

/// One hoverable/clickable region of the building diagram, with defaults applied
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloorRegion {
    pub path_id: PathId,
    /// SVG path data, passed through to the renderer untouched
    pub geometry: String,
    pub class_tag: ClassTag,
    pub apartment_type: ApartmentType,
    pub floor_number: String,
    pub price: String,
    pub area: String,
    pub available: bool,
}

impl FloorRegion {
    /// Normalize a raw record, filling every absent field with its placeholder
    pub fn from_raw(raw: RawFloorRecord) -> Self {
        let apartment_type = match raw.apartment_type {
            Some(kind) if !kind.is_empty() => ApartmentType::from(kind),
            _ => ApartmentType::default(),
        };
        Self {
            path_id: PathId(raw.path_id),
            geometry: raw.geometry,
            class_tag: ClassTag(raw.class_tag),
            apartment_type,
            floor_number: or_placeholder(raw.floor_number, DEFAULT_FLOOR_NUMBER),
            price: or_placeholder(raw.price, DEFAULT_PRICE),
            area: or_placeholder(raw.area, DEFAULT_AREA),
            available: raw.availability != Some(false),
        }
    }

    /// Copy the display fields for the comparison view
    pub fn snapshot(&self) -> FloorSnapshot {
        FloorSnapshot {
            id: self.path_id.clone(),
            apartment_type: self.apartment_type.clone(),
            floor_number: self.floor_number.clone(),
            price: self.price.clone(),
            area: self.area.clone(),
            available: self.available,
        }
    }
}

/// Display record held by the selection state
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorSnapshot {
    pub id: PathId,
    pub apartment_type: ApartmentType,
    pub floor_number: String,
    pub price: String,
    pub area: String,
    pub available: bool,
}

impl FloorSnapshot {
    pub fn availability_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Sold"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_once() {
        let region = FloorRegion::from_raw(RawFloorRecord {
            path_id: "p1".to_string(),
            geometry: "M0 0L1 1Z".to_string(),
            class_tag: "cls-4".to_string(),
            ..Default::default()
        });

        assert_eq!(region.apartment_type, ApartmentType::Duplex);
        assert_eq!(region.floor_number, "XX");
        assert_eq!(region.price, "XX Cr");
        assert_eq!(region.area, "XXXX sq.ft");
        assert!(region.available);
        assert_eq!(region.geometry, "M0 0L1 1Z");
    }

    #[test]
    fn test_explicit_fields_kept() {
        let region = FloorRegion::from_raw(RawFloorRecord {
            path_id: "p2".to_string(),
            apartment_type: Some("2BHK".to_string()),
            floor_number: Some("21".to_string()),
            availability: Some(false),
            ..Default::default()
        });

        assert_eq!(region.apartment_type, ApartmentType::Other("2BHK".to_string()));
        assert_eq!(region.floor_number, "21");
        assert!(!region.available);
        assert_eq!(region.snapshot().availability_label(), "Sold");
    }

    #[test]
    fn test_opposite_pair() {
        assert_eq!(ApartmentType::Duplex.opposite().unwrap(), ApartmentType::DuplexR);
        assert_eq!(ApartmentType::DuplexR.opposite().unwrap(), ApartmentType::Duplex);
        assert!(matches!(
            ApartmentType::from("2BHK").opposite(),
            Err(ModelError::NoOppositeType(_))
        ));
    }

    #[test]
    fn test_apartment_type_wire_format() {
        let kind: ApartmentType = serde_json::from_str("\"Duplex-R\"").unwrap();
        assert_eq!(kind, ApartmentType::DuplexR);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"Duplex-R\"");
    }

    #[test]
    fn test_raw_record_field_names() {
        let json = r#"{"path_id":"f10","d":"M1 1Z","class":"cls-2","bhk":"Duplex-R","floorNumber":"10"}"#;
        let raw: RawFloorRecord = serde_json::from_str(json).unwrap();
        let region = FloorRegion::from_raw(raw);
        assert_eq!(region.path_id.as_str(), "f10");
        assert_eq!(region.class_tag.as_str(), "cls-2");
        assert_eq!(region.apartment_type, ApartmentType::DuplexR);
        assert_eq!(region.floor_number, "10");
        assert_eq!(region.price, DEFAULT_PRICE);
    }
}
