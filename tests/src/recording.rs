//! Region store wrapper that counts writes and can refuse them.

use std::collections::BTreeSet;

use regbatch_core::{FlagValue, RegionId, RegionSet, WorldId};
use regbatch_store::{RegionStore, StoreError, StoreResult};

/// Wraps a store, counting `set_flag`/`clear_flag` calls.
///
/// Calls are counted even when refused.
#[derive(Debug, Clone, Default)]
pub struct RecordingStore<S> {
    inner: S,
    set_calls: usize,
    clear_calls: usize,
    refuse: BTreeSet<RegionId>,
}

impl<S: RegionStore> RecordingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            set_calls: 0,
            clear_calls: 0,
            refuse: BTreeSet::new(),
        }
    }

    /// Refuse every write to this region.
    pub fn refuse_writes_to(&mut self, region: impl Into<RegionId>) {
        self.refuse.insert(region.into());
    }

    pub fn set_calls(&self) -> usize {
        self.set_calls
    }

    pub fn clear_calls(&self) -> usize {
        self.clear_calls
    }

    /// Total write attempts.
    pub fn writes(&self) -> usize {
        self.set_calls + self.clear_calls
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn check(&self, region: &RegionId) -> StoreResult<()> {
        if self.refuse.contains(region) {
            return Err(StoreError::refused(region, "region is read-only"));
        }
        Ok(())
    }
}

impl<S: RegionStore> RegionStore for RecordingStore<S> {
    fn regions_of(&self, world: &WorldId) -> StoreResult<RegionSet> {
        self.inner.regions_of(world)
    }

    fn set_flag(
        &mut self,
        world: &WorldId,
        region: &RegionId,
        key: &str,
        value: FlagValue,
    ) -> StoreResult<()> {
        self.set_calls += 1;
        self.check(region)?;
        self.inner.set_flag(world, region, key, value)
    }

    fn clear_flag(
        &mut self,
        world: &WorldId,
        region: &RegionId,
        key: &str,
    ) -> StoreResult<Option<FlagValue>> {
        self.clear_calls += 1;
        self.check(region)?;
        self.inner.clear_flag(world, region, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regbatch_core::{Region, State};
    use regbatch_store::MemoryRegionStore;

    #[test]
    fn test_counts_and_refuses() {
        // GIVEN
        let mut inner = MemoryRegionStore::new();
        inner.insert_region("world", Region::new("a"));
        inner.insert_region("world", Region::new("b"));
        let mut store = RecordingStore::new(inner);
        store.refuse_writes_to("b");
        let world = WorldId::new("world");

        // WHEN
        let a = store.set_flag(&world, &RegionId::new("a"), "pvp", State::Deny.into());
        let b = store.set_flag(&world, &RegionId::new("b"), "pvp", State::Deny.into());
        let cleared = store.clear_flag(&world, &RegionId::new("a"), "pvp");

        // THEN
        assert!(a.is_ok());
        assert!(matches!(b, Err(StoreError::Refused { .. })));
        assert_eq!(cleared.unwrap(), Some(FlagValue::State(State::Deny)));
        assert_eq!(store.set_calls(), 2);
        assert_eq!(store.clear_calls(), 1);
        assert_eq!(store.writes(), 3);
    }
}
