//! Mutation result types.

use regbatch_core::RegionId;
use regbatch_registry::FlagParseError;
use thiserror::Error;

/// Why a region was left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// Raw input did not parse for this flag.
    #[error("invalid flag value: {0}")]
    InvalidFlagValue(#[from] FlagParseError),

    /// The store refused the write.
    #[error("store refused the change: {0}")]
    StoreFailure(String),
}

/// Outcome of a mutation on one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The change was committed.
    Applied(RegionId),
    /// The region was not touched.
    Rejected(RegionId, RejectReason),
}

impl MutationOutcome {
    pub fn region(&self) -> &RegionId {
        match self {
            MutationOutcome::Applied(id) | MutationOutcome::Rejected(id, _) => id,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, MutationOutcome::Rejected(..))
    }

    /// Get the rejection reason if this is a Rejected outcome.
    pub fn reason(&self) -> Option<&RejectReason> {
        match self {
            MutationOutcome::Rejected(_, reason) => Some(reason),
            MutationOutcome::Applied(_) => None,
        }
    }
}
