//! Flag mutator - validates and commits one flag change.

use regbatch_core::WorldId;
use regbatch_registry::FlagContext;
use regbatch_store::RegionStore;
use tracing::{debug, warn};

use crate::request::{FlagChange, MutationRequest};
use crate::result::{MutationOutcome, RejectReason};

/// Applies flag changes to regions of one world through a store.
///
/// Each call touches at most one entry of one region's flag map. Nothing is
/// retried, and a value is either stored whole or not at all.
pub struct FlagMutator<'a, S: RegionStore + ?Sized> {
    store: &'a mut S,
    world: &'a WorldId,
}

impl<'a, S: RegionStore + ?Sized> FlagMutator<'a, S> {
    pub fn new(store: &'a mut S, world: &'a WorldId) -> Self {
        Self { store, world }
    }

    /// Validate and apply one request.
    pub fn apply(&mut self, request: &MutationRequest<'_>) -> MutationOutcome {
        let region_id = &request.region.id;
        let key = request.flag.name.as_str();

        let committed = match request.change {
            FlagChange::Set(input) => {
                let ctx = FlagContext::new(request.actor, request.region, input);
                let value = match request.flag.parse(&ctx) {
                    Ok(value) => value,
                    Err(e) => {
                        warn!(
                            region = %region_id,
                            flag = key,
                            input = %input,
                            error = %e,
                            "flag value rejected"
                        );
                        return MutationOutcome::Rejected(region_id.clone(), e.into());
                    }
                };
                debug!(region = %region_id, flag = key, %value, "setting flag");
                self.store.set_flag(self.world, region_id, key, value)
            }
            FlagChange::Clear => {
                debug!(region = %region_id, flag = key, "clearing flag");
                self.store
                    .clear_flag(self.world, region_id, key)
                    .map(|_| ())
            }
        };

        match committed {
            Ok(()) => MutationOutcome::Applied(region_id.clone()),
            Err(e) => {
                warn!(region = %region_id, flag = key, error = %e, "store refused flag change");
                MutationOutcome::Rejected(
                    region_id.clone(),
                    RejectReason::StoreFailure(e.to_string()),
                )
            }
        }
    }
}
