//! Flag definition types.

use regbatch_core::{FlagValue, Identity, Region};
use std::fmt;
use std::sync::Arc;

use crate::parse::{parse_input, FlagParseError};

/// The kind of value a flag holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    State,
    Boolean,
    Integer,
    Double,
    String,
    StringSet,
}

impl FlagKind {
    /// Whether an empty input can still produce a value.
    pub fn accepts_empty(&self) -> bool {
        matches!(self, FlagKind::String | FlagKind::StringSet)
    }
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlagKind::State => "state",
            FlagKind::Boolean => "boolean",
            FlagKind::Integer => "integer",
            FlagKind::Double => "double",
            FlagKind::String => "string",
            FlagKind::StringSet => "string set",
        };
        f.write_str(name)
    }
}

/// Everything a parser may look at when turning input into a value.
#[derive(Debug, Clone, Copy)]
pub struct FlagContext<'a> {
    /// Player requesting the change.
    pub actor: &'a Identity,
    /// Region the value will be stored on.
    pub region: &'a Region,
    /// Raw text, as typed.
    pub input: &'a str,
}

impl<'a> FlagContext<'a> {
    pub fn new(actor: &'a Identity, region: &'a Region, input: &'a str) -> Self {
        Self {
            actor,
            region,
            input,
        }
    }
}

/// Custom input parser attached to a flag.
pub type FlagParser =
    Arc<dyn Fn(&FlagContext<'_>) -> Result<FlagValue, FlagParseError> + Send + Sync>;

/// A named, typed flag.
#[derive(Clone)]
pub struct FlagDefinition {
    /// Flag name, as stored in region flag maps.
    pub name: String,
    /// Value kind.
    pub kind: FlagKind,
    /// Overrides the built-in parser for `kind` when set.
    parser: Option<FlagParser>,
}

impl FlagDefinition {
    pub fn new(name: impl Into<String>, kind: FlagKind) -> Self {
        Self {
            name: name.into(),
            kind,
            parser: None,
        }
    }

    pub fn with_parser<F>(mut self, parser: F) -> Self
    where
        F: Fn(&FlagContext<'_>) -> Result<FlagValue, FlagParseError> + Send + Sync + 'static,
    {
        self.parser = Some(Arc::new(parser));
        self
    }

    pub fn has_custom_parser(&self) -> bool {
        self.parser.is_some()
    }

    /// Parse raw input for this flag.
    pub fn parse(&self, ctx: &FlagContext<'_>) -> Result<FlagValue, FlagParseError> {
        match &self.parser {
            Some(parser) => parser(ctx),
            None => parse_input(self.kind, ctx.input),
        }
    }
}

impl fmt::Debug for FlagDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagDefinition")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("custom_parser", &self.parser.is_some())
            .finish()
    }
}
