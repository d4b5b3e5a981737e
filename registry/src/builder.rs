//! RegistryBuilder for constructing an immutable Registry.

use crate::{FlagContext, FlagDefinition, FlagKind, FlagParseError, Registry};
use regbatch_core::FlagValue;
use std::collections::HashSet;
use thiserror::Error;

/// Errors that can occur during registry construction.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate flag name: {0}")]
    DuplicateFlagName(String),

    #[error("Invalid flag name: '{0}'")]
    InvalidFlagName(String),
}

/// Builder for constructing an immutable Registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    /// Flags being built, in registration order.
    flags: Vec<FlagDefinition>,
    /// Names taken so far.
    names: HashSet<String>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a flag definition.
    pub fn add_flag(&mut self, name: impl Into<String>, kind: FlagKind) -> FlagBuilder<'_> {
        FlagBuilder {
            builder: self,
            flag: FlagDefinition::new(name, kind),
        }
    }

    /// Register the built-in flag catalogue.
    pub fn add_defaults(&mut self) -> Result<&mut Self, RegistryError> {
        const STATE_FLAGS: &[&str] = &[
            "build",
            "pvp",
            "use",
            "chest-access",
            "mob-spawning",
            "entry",
            "exit",
            "tnt",
        ];
        for name in STATE_FLAGS {
            self.add_flag(*name, FlagKind::State).done()?;
        }
        self.add_flag("greeting", FlagKind::String).done()?;
        self.add_flag("farewell", FlagKind::String).done()?;
        self.add_flag("heal-amount", FlagKind::Integer).done()?;
        self.add_flag("heal-delay", FlagKind::Integer)
            .parser(non_negative_integer)
            .done()?;
        self.add_flag("max-heal", FlagKind::Double).done()?;
        self.add_flag("notify-enter", FlagKind::Boolean).done()?;
        self.add_flag("deny-spawn", FlagKind::StringSet).done()?;
        Ok(self)
    }

    /// Build the immutable Registry.
    pub fn build(self) -> Result<Registry, RegistryError> {
        Ok(Registry::new(self.flags))
    }
}

impl Registry {
    /// Registry holding only the built-in flag catalogue.
    pub fn defaults() -> Result<Registry, RegistryError> {
        let mut builder = RegistryBuilder::new();
        builder.add_defaults()?;
        builder.build()
    }
}

fn non_negative_integer(ctx: &FlagContext<'_>) -> Result<FlagValue, FlagParseError> {
    match crate::parse_input(FlagKind::Integer, ctx.input)? {
        FlagValue::Integer(i) if i < 0 => Err(FlagParseError::rejected(format!(
            "{} must not be negative",
            i
        ))),
        value => Ok(value),
    }
}

/// Builder for a flag definition.
pub struct FlagBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    flag: FlagDefinition,
}

impl<'a> FlagBuilder<'a> {
    /// Replace the built-in parser for this flag's kind.
    pub fn parser<F>(mut self, parser: F) -> Self
    where
        F: Fn(&FlagContext<'_>) -> Result<FlagValue, FlagParseError> + Send + Sync + 'static,
    {
        self.flag = self.flag.with_parser(parser);
        self
    }

    /// Finish building this flag.
    pub fn done(self) -> Result<(), RegistryError> {
        let name = &self.flag.name;
        if name.trim().is_empty() || name.chars().any(char::is_whitespace) {
            return Err(RegistryError::InvalidFlagName(name.clone()));
        }
        if !self.builder.names.insert(name.clone()) {
            return Err(RegistryError::DuplicateFlagName(name.clone()));
        }
        self.builder.flags.push(self.flag);
        Ok(())
    }
}
