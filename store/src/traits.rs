//! Collaborator interfaces.

use regbatch_core::{FlagValue, Identity, RegionId, RegionSet, WorldId};

use crate::error::{StoreResult, UnknownIdentity};

/// Owner of every region in every world.
///
/// Reads return snapshots: the engine does not assume the store is unchanged
/// between a read and a later write, and every write commits on its own.
pub trait RegionStore {
    /// Snapshot of the regions of a world, in the store's natural order.
    ///
    /// Fails with `WorldUnavailable` if the world has no region container.
    fn regions_of(&self, world: &WorldId) -> StoreResult<RegionSet>;

    /// Set one flag on one region, overwriting any previous value.
    fn set_flag(
        &mut self,
        world: &WorldId,
        region: &RegionId,
        key: &str,
        value: FlagValue,
    ) -> StoreResult<()>;

    /// Remove one flag from one region. Removing an absent flag is not an error.
    fn clear_flag(
        &mut self,
        world: &WorldId,
        region: &RegionId,
        key: &str,
    ) -> StoreResult<Option<FlagValue>>;
}

impl<S: RegionStore + ?Sized> RegionStore for &mut S {
    fn regions_of(&self, world: &WorldId) -> StoreResult<RegionSet> {
        (**self).regions_of(world)
    }

    fn set_flag(
        &mut self,
        world: &WorldId,
        region: &RegionId,
        key: &str,
        value: FlagValue,
    ) -> StoreResult<()> {
        (**self).set_flag(world, region, key, value)
    }

    fn clear_flag(
        &mut self,
        world: &WorldId,
        region: &RegionId,
        key: &str,
    ) -> StoreResult<Option<FlagValue>> {
        (**self).clear_flag(world, region, key)
    }
}

/// Resolves player display names to identities.
pub trait IdentityResolver {
    /// Resolve a display name, ignoring case.
    ///
    /// A currently connected player wins over previously seen ones. Empty
    /// names never resolve.
    fn resolve(&self, name: &str) -> Result<Identity, UnknownIdentity>;
}
