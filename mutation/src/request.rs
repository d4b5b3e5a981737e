//! Mutation requests.

use regbatch_core::{Identity, Region};
use regbatch_registry::FlagDefinition;

/// The change to make to one flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagChange {
    /// Parse the raw input and store the value.
    Set(String),
    /// Remove the flag from the region.
    Clear,
}

impl FlagChange {
    pub fn set(input: impl Into<String>) -> Self {
        FlagChange::Set(input.into())
    }
}

/// One flag change on one region.
#[derive(Debug, Clone, Copy)]
pub struct MutationRequest<'a> {
    pub region: &'a Region,
    pub flag: &'a FlagDefinition,
    pub actor: &'a Identity,
    pub change: &'a FlagChange,
}

impl<'a> MutationRequest<'a> {
    pub fn new(
        region: &'a Region,
        flag: &'a FlagDefinition,
        actor: &'a Identity,
        change: &'a FlagChange,
    ) -> Self {
        Self {
            region,
            flag,
            actor,
            change,
        }
    }
}
