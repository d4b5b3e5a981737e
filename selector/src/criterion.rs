//! Selection criteria and how they are built from textual arguments.

use std::fmt;

use regbatch_core::Identity;
use regbatch_store::IdentityResolver;
use regex_lite::Regex;

use crate::error::{SelectorError, SelectorResult};
use crate::range::CountRange;

/// A region name pattern that must match the whole identifier.
#[derive(Debug, Clone)]
pub struct NamePattern {
    source: String,
    regex: Regex,
}

impl NamePattern {
    pub fn new(pattern: impl Into<String>) -> SelectorResult<Self> {
        let source = pattern.into();
        // An unbalanced group would otherwise close over the anchors.
        Regex::new(&source)
            .map_err(|e| SelectorError::invalid_pattern(&source, e.to_string()))?;
        let regex = Regex::new(&format!("^(?:{})$", source))
            .map_err(|e| SelectorError::invalid_pattern(&source, e.to_string()))?;
        Ok(Self { source, regex })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Full match against a region identifier.
    pub fn is_match(&self, id: &str) -> bool {
        self.regex.is_match(id)
    }
}

impl PartialEq for NamePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

/// A declarative predicate choosing regions for a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionCriterion {
    /// Player owns or is a member of the region, directly or through a parent.
    MemberOrOwner(Identity),
    /// Player owns the region, directly or through a parent.
    OwnerOnly(Identity),
    /// Player is a member but not an owner.
    MemberOnly(Identity),
    /// Identifier fully matches a pattern.
    NameRegex(NamePattern),
    /// Identifier is one of a numeric name sequence.
    NameCountRange(CountRange),
    /// Parent identifier equals this name, ignoring case.
    ChildOf(String),
    /// Every region of the world.
    All,
}

impl fmt::Display for SelectionCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionCriterion::MemberOrOwner(p) => write!(f, "member or owner {}", p.name),
            SelectionCriterion::OwnerOnly(p) => write!(f, "owner {}", p.name),
            SelectionCriterion::MemberOnly(p) => write!(f, "member {}", p.name),
            SelectionCriterion::NameRegex(p) => write!(f, "name matching {}", p.as_str()),
            SelectionCriterion::NameCountRange(r) => write!(f, "names {}", r),
            SelectionCriterion::ChildOf(parent) => write!(f, "children of {}", parent),
            SelectionCriterion::All => write!(f, "all regions"),
        }
    }
}

/// Selection mode as chosen by the invoking player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    Player,
    Owner,
    Member,
    Regex,
    Count,
    Child,
    All,
}

impl SelectionMode {
    /// Parse a mode token, ignoring case.
    pub fn from_token(token: &str) -> Option<Self> {
        let mode = match token.to_ascii_lowercase().as_str() {
            "player" | "p" => SelectionMode::Player,
            "owner" | "o" => SelectionMode::Owner,
            "member" | "m" => SelectionMode::Member,
            "regex" | "r" => SelectionMode::Regex,
            "count" | "c" => SelectionMode::Count,
            "child" | "parent" => SelectionMode::Child,
            "all" | "a" => SelectionMode::All,
            _ => return None,
        };
        Some(mode)
    }

    pub fn name(&self) -> &'static str {
        match self {
            SelectionMode::Player => "player",
            SelectionMode::Owner => "owner",
            SelectionMode::Member => "member",
            SelectionMode::Regex => "regex",
            SelectionMode::Count => "count",
            SelectionMode::Child => "child",
            SelectionMode::All => "all",
        }
    }

    /// Whether the mode is followed by a name/pattern token.
    pub fn takes_pattern(&self) -> bool {
        !matches!(self, SelectionMode::All)
    }

    /// Whether the mode is followed by a bounds token.
    pub fn takes_bounds(&self) -> bool {
        matches!(self, SelectionMode::Count)
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unresolved selection: a mode plus its raw arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionArgs {
    pub mode: SelectionMode,
    pub pattern: Option<String>,
    pub bounds: Option<String>,
}

impl SelectionArgs {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            pattern: None,
            bounds: None,
        }
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_bounds(mut self, bounds: impl Into<String>) -> Self {
        self.bounds = Some(bounds.into());
        self
    }

    /// Resolve players, compile patterns and parse bounds.
    pub fn resolve<R>(&self, resolver: &R) -> SelectorResult<SelectionCriterion>
    where
        R: IdentityResolver + ?Sized,
    {
        let criterion = match self.mode {
            SelectionMode::Player => {
                SelectionCriterion::MemberOrOwner(resolver.resolve(self.pattern_or_empty())?)
            }
            SelectionMode::Owner => {
                SelectionCriterion::OwnerOnly(resolver.resolve(self.pattern_or_empty())?)
            }
            SelectionMode::Member => {
                SelectionCriterion::MemberOnly(resolver.resolve(self.pattern_or_empty())?)
            }
            SelectionMode::Regex => {
                SelectionCriterion::NameRegex(NamePattern::new(self.pattern()?)?)
            }
            SelectionMode::Count => {
                let bounds = self
                    .bounds
                    .as_deref()
                    .ok_or_else(|| SelectorError::missing_argument(self.mode.name(), "bounds"))?;
                SelectionCriterion::NameCountRange(CountRange::parse(self.pattern()?, bounds)?)
            }
            SelectionMode::Child => SelectionCriterion::ChildOf(self.pattern()?.to_string()),
            SelectionMode::All => SelectionCriterion::All,
        };
        Ok(criterion)
    }

    fn pattern(&self) -> SelectorResult<&str> {
        self.pattern
            .as_deref()
            .ok_or_else(|| SelectorError::missing_argument(self.mode.name(), "pattern"))
    }

    // A missing player name is an unknown player, not a usage error.
    fn pattern_or_empty(&self) -> &str {
        self.pattern.as_deref().unwrap_or("")
    }
}
