//! RegBatch Selector
//!
//! Choose the subset of a world's regions a batch applies to.
//!
//! Responsibilities:
//! - Turn a selection mode plus its textual arguments into a typed criterion
//!   (resolving players, compiling patterns, parsing numeric bounds)
//! - Evaluate a criterion against a region snapshot without touching it
//! - Keep output free of duplicates and in a deterministic order

mod criterion;
mod error;
mod range;
mod selector;

pub use criterion::{NamePattern, SelectionArgs, SelectionCriterion, SelectionMode};
pub use error::{SelectorError, SelectorResult};
pub use range::CountRange;
pub use selector::{select, Selector};
