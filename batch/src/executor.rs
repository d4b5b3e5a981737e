//! Batch executor - selects regions and applies one flag change to each.

use regbatch_core::{Identity, RegionSet, WorldId};
use regbatch_mutation::{FlagChange, FlagMutator, MutationRequest};
use regbatch_registry::{FlagDefinition, FlagRegistry};
use regbatch_selector::{select, SelectionCriterion};
use regbatch_store::{IdentityResolver, RegionStore};
use tracing::{debug, info, warn};

use crate::command::BatchCommand;
use crate::error::BatchError;
use crate::result::BatchResult;

/// Runs batches against injected collaborators.
///
/// All checks that can abort a batch (flag, world, player, bounds) happen
/// before the first region is touched. Once mutation starts, every selected
/// region gets exactly one attempt and a rejection never stops the rest.
pub struct BatchExecutor<'a, S, R, F>
where
    S: RegionStore + ?Sized,
    R: IdentityResolver + ?Sized,
    F: FlagRegistry + ?Sized,
{
    store: &'a mut S,
    players: &'a R,
    flags: &'a F,
}

impl<'a, S, R, F> BatchExecutor<'a, S, R, F>
where
    S: RegionStore + ?Sized,
    R: IdentityResolver + ?Sized,
    F: FlagRegistry + ?Sized,
{
    pub fn new(store: &'a mut S, players: &'a R, flags: &'a F) -> Self {
        Self {
            store,
            players,
            flags,
        }
    }

    /// Resolve a parsed command and run it.
    pub fn execute(
        &mut self,
        world: &WorldId,
        actor: &Identity,
        command: &BatchCommand,
    ) -> Result<BatchResult, BatchError> {
        let result = self.resolve_and_apply(world, actor, command);
        if let Err(e) = &result {
            warn!(world = %world, flag = %command.flag, error = %e, "batch aborted");
        }
        result
    }

    fn resolve_and_apply(
        &mut self,
        world: &WorldId,
        actor: &Identity,
        command: &BatchCommand,
    ) -> Result<BatchResult, BatchError> {
        let flags: &'a F = self.flags;
        let flag = flags
            .lookup(&command.flag)
            .ok_or_else(|| BatchError::unknown_flag(&command.flag))?;

        let regions = self.store.regions_of(world)?;
        let criterion = command.selection.resolve(self.players)?;

        Ok(self.apply_all(world, &regions, &criterion, flag, actor, &command.change()))
    }

    /// Run an already resolved batch.
    pub fn run(
        &mut self,
        world: &WorldId,
        criterion: &SelectionCriterion,
        flag: &FlagDefinition,
        actor: &Identity,
        change: &FlagChange,
    ) -> Result<BatchResult, BatchError> {
        let regions = self.store.regions_of(world)?;
        Ok(self.apply_all(world, &regions, criterion, flag, actor, change))
    }

    fn apply_all(
        &mut self,
        world: &WorldId,
        regions: &RegionSet,
        criterion: &SelectionCriterion,
        flag: &FlagDefinition,
        actor: &Identity,
        change: &FlagChange,
    ) -> BatchResult {
        let selected = select(regions, criterion);
        debug!(world = %world, %criterion, selected = selected.len(), "regions selected");

        let mut mutator = FlagMutator::new(&mut *self.store, world);
        let result: BatchResult = selected
            .into_iter()
            .map(|region| mutator.apply(&MutationRequest::new(region, flag, actor, change)))
            .collect();

        info!(
            world = %world,
            flag = %flag.name,
            actor = %actor.name,
            applied = result.applied(),
            rejected = result.rejected(),
            "batch complete"
        );
        result
    }
}
