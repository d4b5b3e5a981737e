//! In-memory region store.

use std::collections::BTreeMap;

use regbatch_core::{FlagValue, Region, RegionId, RegionSet, WorldId};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::RegionStore;

/// Region store holding every world's regions in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegionStore {
    worlds: BTreeMap<WorldId, RegionSet>,
}

impl MemoryRegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty region container for a world.
    pub fn add_world(&mut self, world: impl Into<WorldId>) -> &mut RegionSet {
        self.worlds.entry(world.into()).or_default()
    }

    /// Add or replace a region in a world, creating the world if needed.
    pub fn insert_region(&mut self, world: impl Into<WorldId>, region: Region) -> Option<Region> {
        self.add_world(world).insert(region)
    }

    /// Borrow the live regions of a world.
    pub fn world(&self, world: &WorldId) -> Option<&RegionSet> {
        self.worlds.get(world)
    }

    /// Borrow a single live region.
    pub fn region(&self, world: &WorldId, region: &str) -> Option<&Region> {
        self.worlds.get(world).and_then(|set| set.get(region))
    }

    pub fn worlds(&self) -> impl Iterator<Item = (&WorldId, &RegionSet)> {
        self.worlds.iter()
    }

    fn region_mut(&mut self, world: &WorldId, region: &RegionId) -> StoreResult<&mut Region> {
        let set = self
            .worlds
            .get_mut(world)
            .ok_or_else(|| StoreError::world_unavailable(world))?;
        set.get_mut(region.as_str())
            .ok_or_else(|| StoreError::region_not_found(world, region))
    }
}

impl RegionStore for MemoryRegionStore {
    fn regions_of(&self, world: &WorldId) -> StoreResult<RegionSet> {
        self.worlds
            .get(world)
            .cloned()
            .ok_or_else(|| StoreError::world_unavailable(world))
    }

    fn set_flag(
        &mut self,
        world: &WorldId,
        region: &RegionId,
        key: &str,
        value: FlagValue,
    ) -> StoreResult<()> {
        let target = self.region_mut(world, region)?;
        debug!(%world, %region, key, %value, "set flag");
        target.set_flag(key, value);
        Ok(())
    }

    fn clear_flag(
        &mut self,
        world: &WorldId,
        region: &RegionId,
        key: &str,
    ) -> StoreResult<Option<FlagValue>> {
        let target = self.region_mut(world, region)?;
        debug!(%world, %region, key, "clear flag");
        Ok(target.remove_flag(key))
    }
}
