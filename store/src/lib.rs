//! RegBatch Store
//!
//! Collaborator boundaries the batch engine reads from and writes through.
//!
//! Responsibilities:
//! - Hand out per-world region snapshots (`RegionStore::regions_of`)
//! - Commit single flag changes on one region (`set_flag` / `clear_flag`)
//! - Resolve player display names to identities (`IdentityResolver`)
//!
//! # Module Structure
//!
//! - `traits` - The `RegionStore` and `IdentityResolver` interfaces
//! - `memory` - In-memory region store keyed by world
//! - `players` - Player directory with online/known players
//! - `fixture` - JSON world files that back the memory store
//! - `error` - Error types for store and identity failures

mod error;
mod fixture;
mod memory;
mod players;
mod traits;

pub use error::{StoreError, StoreResult, UnknownIdentity};
pub use fixture::{KnownPlayer, WorldFixture};
pub use memory::MemoryRegionStore;
pub use players::PlayerDirectory;
pub use traits::{IdentityResolver, RegionStore};
