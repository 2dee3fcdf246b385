// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Immutable, ordered registry of floor regions

use crate::{FloorRegion, ModelError, PathId, RawFloorRecord, Result};
use rustc_hash::FxHashMap;
use std::sync::Arc;

#[derive(Debug)]
struct RegistryInner {
    regions: Vec<FloorRegion>,
    index: FxHashMap<PathId, usize>,
}

/// Ordered floor regions, loaded once and shared read-only
///
/// Cloning is cheap; all clones share the same storage.
#[derive(Clone, Debug)]
pub struct FloorRegistry {
    inner: Arc<RegistryInner>,
}

impl FloorRegistry {
    /// Build a registry from raw records, normalizing each one.
    ///
    /// Fails on empty or duplicate path ids.
    pub fn from_records(records: Vec<RawFloorRecord>) -> Result<Self> {
        let mut regions = Vec::with_capacity(records.len());
        let mut index = FxHashMap::default();

        for (pos, raw) in records.into_iter().enumerate() {
            if raw.path_id.is_empty() {
                return Err(ModelError::EmptyPathId(pos));
            }
            let region = FloorRegion::from_raw(raw);
            if index.insert(region.path_id.clone(), regions.len()).is_some() {
                return Err(ModelError::DuplicatePathId(region.path_id));
            }
            regions.push(region);
        }

        log::debug!("Floor registry loaded with {} regions", regions.len());
        Ok(Self {
            inner: Arc::new(RegistryInner { regions, index }),
        })
    }

    /// Parse a JSON array of floor records
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<RawFloorRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn get(&self, id: &PathId) -> Option<&FloorRegion> {
        self.inner
            .index
            .get(id)
            .map(|&pos| &self.inner.regions[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &FloorRegion> {
        self.inner.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.regions.is_empty()
    }
}

impl PartialEq for FloorRegistry {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner.regions == other.inner.regions
    }
}
