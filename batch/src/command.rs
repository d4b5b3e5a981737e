//! Batch command token grammar.
//!
//! `<action> <mode> [<pattern>] [<bounds>] <flag> [<value>...]`
//!
//! The pattern is omitted for `all`; bounds are only given for `count`,
//! either as `<max>` or `<min>..<max>`. Value tokens are joined with single
//! spaces and ignored by `remove`.

use regbatch_mutation::FlagChange;
use regbatch_selector::{SelectionArgs, SelectionMode};

use crate::error::CommandError;

pub const USAGE: &str = concat!(
    "<set|remove> <player|owner|member|regex|count|child|all> ",
    "[<pattern>] [<bounds>] <flag> [<value>...]",
);

/// Whether the flag is set or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagAction {
    Set,
    Remove,
}

impl FlagAction {
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "set" | "fset" => Some(FlagAction::Set),
            "remove" | "fremove" => Some(FlagAction::Remove),
            _ => None,
        }
    }
}

/// A parsed, not yet resolved, batch command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchCommand {
    pub action: FlagAction,
    pub selection: SelectionArgs,
    pub flag: String,
    pub value: Option<String>,
}

impl BatchCommand {
    pub fn set(
        selection: SelectionArgs,
        flag: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            action: FlagAction::Set,
            selection,
            flag: flag.into(),
            value: Some(value.into()),
        }
    }

    pub fn remove(selection: SelectionArgs, flag: impl Into<String>) -> Self {
        Self {
            action: FlagAction::Remove,
            selection,
            flag: flag.into(),
            value: None,
        }
    }

    /// Parse a tokenized command line.
    pub fn parse<T: AsRef<str>>(tokens: &[T]) -> Result<Self, CommandError> {
        let mut tokens = tokens.iter().map(AsRef::<str>::as_ref);
        let mut next = || tokens.next().ok_or(CommandError::TooFewArguments { usage: USAGE });

        let action_token = next()?;
        let action = FlagAction::from_token(action_token)
            .ok_or_else(|| CommandError::UnknownAction(action_token.to_string()))?;

        let mode_token = next()?;
        let mode = SelectionMode::from_token(mode_token)
            .ok_or_else(|| CommandError::UnknownMode(mode_token.to_string()))?;

        let mut selection = SelectionArgs::new(mode);
        if mode.takes_pattern() {
            selection = selection.with_pattern(next()?);
        }
        if mode.takes_bounds() {
            selection = selection.with_bounds(next()?);
        }
        let flag = next()?.to_string();

        let rest: Vec<&str> = tokens.collect();
        let value = match action {
            FlagAction::Set => Some(rest.join(" ")),
            FlagAction::Remove => None,
        };

        Ok(Self {
            action,
            selection,
            flag,
            value,
        })
    }

    /// The change applied to every selected region.
    pub fn change(&self) -> FlagChange {
        match self.action {
            FlagAction::Set => FlagChange::set(self.value.clone().unwrap_or_default()),
            FlagAction::Remove => FlagChange::Clear,
        }
    }
}
