//! Error types for the scenario framework.

use thiserror::Error;

/// Result type for scenario operations.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors that can occur when running scenarios.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// A player referenced by a region was never added.
    #[error("scenario '{scenario}' references unknown player '{name}'")]
    UnknownPlayer { scenario: String, name: String },

    /// A step's acting player does not resolve.
    #[error("step '{step}' cannot act as '{name}'")]
    UnknownActor { step: String, name: String },

    /// Building the flag catalogue failed.
    #[error("registry error: {0}")]
    Registry(#[from] regbatch_registry::RegistryError),

    /// Assertion failed.
    #[error("assertion failed for step '{step}': {message}")]
    AssertionFailed { step: String, message: String },
}

impl ScenarioError {
    pub fn unknown_player(scenario: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownPlayer {
            scenario: scenario.into(),
            name: name.into(),
        }
    }

    pub fn unknown_actor(step: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownActor {
            step: step.into(),
            name: name.into(),
        }
    }

    pub fn assertion_failed(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            step: step.into(),
            message: message.into(),
        }
    }
}
