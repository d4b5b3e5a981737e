//! Batch error types.

use regbatch_core::WorldId;
use regbatch_selector::SelectorError;
use regbatch_store::StoreError;
use thiserror::Error;

/// Tokens that do not form a batch command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Too few arguments. Usage: {usage}")]
    TooFewArguments { usage: &'static str },

    #[error("Unknown action '{0}', expected set or remove")]
    UnknownAction(String),

    #[error("Unknown selection mode '{0}'")]
    UnknownMode(String),
}

/// Reasons a whole batch is aborted before any region is changed.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Unknown flag: '{name}'")]
    UnknownFlag { name: String },

    #[error("Unknown player: '{name}'")]
    UnknownIdentity { name: String },

    #[error("Invalid bound: '{bound}' is not a number")]
    InvalidBound { bound: String },

    #[error("Invalid selection: {0}")]
    InvalidSelection(SelectorError),

    #[error("World unavailable: {world}")]
    WorldUnavailable { world: WorldId },

    #[error("Store error: {0}")]
    Store(StoreError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

impl BatchError {
    pub fn unknown_flag(name: impl Into<String>) -> Self {
        Self::UnknownFlag { name: name.into() }
    }
}

impl From<SelectorError> for BatchError {
    fn from(e: SelectorError) -> Self {
        match e {
            SelectorError::UnknownIdentity { name } => Self::UnknownIdentity { name },
            SelectorError::InvalidBound { bound } => Self::InvalidBound { bound },
            other => Self::InvalidSelection(other),
        }
    }
}

impl From<StoreError> for BatchError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::WorldUnavailable { world } => Self::WorldUnavailable { world },
            other => Self::Store(other),
        }
    }
}
