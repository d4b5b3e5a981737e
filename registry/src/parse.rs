//! Built-in value parsers, one per flag kind.

use regbatch_core::{FlagValue, State};
use std::collections::BTreeSet;
use thiserror::Error;

use crate::types::FlagKind;

/// Raw input that does not produce a value for a flag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagParseError {
    #[error("a {kind} value is required")]
    MissingValue { kind: FlagKind },

    #[error("'{input}' is not a valid {kind} value")]
    InvalidValue { kind: FlagKind, input: String },

    #[error("{message}")]
    Rejected { message: String },
}

impl FlagParseError {
    pub fn missing_value(kind: FlagKind) -> Self {
        Self::MissingValue { kind }
    }

    pub fn invalid_value(kind: FlagKind, input: impl Into<String>) -> Self {
        Self::InvalidValue {
            kind,
            input: input.into(),
        }
    }

    /// Rejection raised by a custom parser.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}

/// Parse raw input with the built-in parser for `kind`.
pub fn parse_input(kind: FlagKind, input: &str) -> Result<FlagValue, FlagParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() && !kind.accepts_empty() {
        return Err(FlagParseError::missing_value(kind));
    }

    match kind {
        FlagKind::State => parse_state(trimmed).map(FlagValue::State),
        FlagKind::Boolean => parse_bool(trimmed).map(FlagValue::Boolean),
        FlagKind::Integer => trimmed
            .parse::<i64>()
            .map(FlagValue::Integer)
            .map_err(|_| FlagParseError::invalid_value(kind, input)),
        FlagKind::Double => match trimmed.parse::<f64>() {
            Ok(d) if d.is_finite() => Ok(FlagValue::Double(d)),
            _ => Err(FlagParseError::invalid_value(kind, input)),
        },
        FlagKind::String => Ok(FlagValue::String(input.replace("\\n", "\n"))),
        FlagKind::StringSet => Ok(FlagValue::StringSet(parse_set(input))),
    }
}

fn parse_state(input: &str) -> Result<State, FlagParseError> {
    if input.eq_ignore_ascii_case("allow") {
        Ok(State::Allow)
    } else if input.eq_ignore_ascii_case("deny") {
        Ok(State::Deny)
    } else {
        Err(FlagParseError::invalid_value(FlagKind::State, input))
    }
}

fn parse_bool(input: &str) -> Result<bool, FlagParseError> {
    match input.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(FlagParseError::invalid_value(FlagKind::Boolean, input)),
    }
}

fn parse_set(input: &str) -> BTreeSet<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
