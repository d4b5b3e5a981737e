//! RegBatch Mutation
//!
//! Apply one flag change to one region.
//!
//! Responsibilities:
//! - Parse raw input with the flag's parser, bound to actor and region
//! - Commit the parsed value (or the removal) through the region store
//! - Report the result as an outcome, never as an error
//!
//! # Module Structure
//!
//! - `request` - What to change, where, and on whose behalf
//! - `mutator` - The `FlagMutator` that validates and commits
//! - `result` - Outcome types for a single region

mod mutator;
mod request;
mod result;

pub use mutator::FlagMutator;
pub use request::{FlagChange, MutationRequest};
pub use result::{MutationOutcome, RejectReason};
