//! Selector error types.

use regbatch_store::UnknownIdentity;
use thiserror::Error;

/// Errors raised while building a selection criterion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// Player name did not resolve.
    #[error("Unknown player: '{name}'")]
    UnknownIdentity { name: String },

    /// Range bound is not a number.
    #[error("Invalid bound: '{bound}' is not a number")]
    InvalidBound { bound: String },

    /// Name pattern does not compile.
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Count template without exactly one `*` placeholder.
    #[error("Invalid template '{template}': expected exactly one '*' placeholder")]
    InvalidTemplate { template: String },

    /// Selection mode needs an argument that was not given.
    #[error("Missing {what} for {mode} selection")]
    MissingArgument { mode: String, what: String },
}

impl SelectorError {
    pub fn unknown_identity(name: impl Into<String>) -> Self {
        Self::UnknownIdentity { name: name.into() }
    }

    pub fn invalid_bound(bound: impl Into<String>) -> Self {
        Self::InvalidBound {
            bound: bound.into(),
        }
    }

    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    pub fn invalid_template(template: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            template: template.into(),
        }
    }

    pub fn missing_argument(mode: impl Into<String>, what: impl Into<String>) -> Self {
        Self::MissingArgument {
            mode: mode.into(),
            what: what.into(),
        }
    }
}

impl From<UnknownIdentity> for SelectorError {
    fn from(e: UnknownIdentity) -> Self {
        Self::UnknownIdentity { name: e.name }
    }
}

/// Result type for selector operations.
pub type SelectorResult<T> = Result<T, SelectorError>;
