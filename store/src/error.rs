//! Store error types.

use regbatch_core::{RegionId, WorldId};
use std::path::PathBuf;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by a region store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("World unavailable: {world} has no region container")]
    WorldUnavailable { world: WorldId },

    #[error("Region not found: {region} in world {world}")]
    RegionNotFound { world: WorldId, region: RegionId },

    #[error("Write refused for region {region}: {reason}")]
    Refused { region: RegionId, reason: String },

    #[error("Failed to read world file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid world file {path}: {message}")]
    Fixture { path: PathBuf, message: String },
}

impl StoreError {
    pub fn world_unavailable(world: &WorldId) -> Self {
        Self::WorldUnavailable {
            world: world.clone(),
        }
    }

    pub fn region_not_found(world: &WorldId, region: &RegionId) -> Self {
        Self::RegionNotFound {
            world: world.clone(),
            region: region.clone(),
        }
    }

    pub fn refused(region: &RegionId, reason: impl Into<String>) -> Self {
        Self::Refused {
            region: region.clone(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn fixture(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Fixture {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A display name that matches no online or previously seen player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown player: '{name}'")]
pub struct UnknownIdentity {
    pub name: String,
}

impl UnknownIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
