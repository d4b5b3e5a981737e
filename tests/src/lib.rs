//! RegBatch Scenario Framework
//!
//! Provides a fluent API for writing integration tests against the batch
//! engine: build a world, run token commands, assert on outcomes, reports
//! and the resulting store.
//!
//! # Example
//!
//! ```ignore
//! use regbatch_tests::prelude::*;
//!
//! #[test]
//! fn test() {
//!     Scenario::new("pvp_off")
//!         .online("Steve")
//!         .region("spawn", |r| r.owner("Steve"))
//!         .region("arena", |r| r)
//!         .as_player("Steve")
//!         .step("set owner Steve pvp deny", |a| a.modified(1).flag("spawn", "pvp", State::Deny))
//!         .run()
//!         .unwrap();
//! }
//! ```

mod assertion;
mod error;
mod recording;
mod scenario;

pub use assertion::{Assertion, AssertionBuilder, StepOutcome};
pub use error::{ScenarioError, ScenarioResult};
pub use recording::RecordingStore;
pub use scenario::{RegionSpec, Scenario, Step};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::assertion::{Assertion, AssertionBuilder};
    pub use crate::error::{ScenarioError, ScenarioResult};
    pub use crate::recording::RecordingStore;
    pub use crate::scenario::Scenario;
    pub use regbatch_core::{FlagValue, Identity, Region, RegionId, RegionSet, State, WorldId};
    pub use regbatch_registry::{FlagKind, Registry, RegistryBuilder};
    pub use regbatch_store::{MemoryRegionStore, PlayerDirectory, RegionStore};
}
