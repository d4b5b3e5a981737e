//! Flag value types.
//!
//! Values are the typed data stored in a region's flag mapping. The registry
//! decides which variant a given flag holds; regions only store them.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Allow/deny state used by permission-style flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    Allow,
    Deny,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Allow => write!(f, "allow"),
            State::Deny => write!(f, "deny"),
        }
    }
}

/// A value that can be stored under a flag key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagValue {
    /// Allow/deny state.
    State(State),
    /// Boolean toggle.
    Boolean(bool),
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit floating point.
    Double(f64),
    /// UTF-8 text.
    String(String),
    /// Unordered set of strings.
    StringSet(BTreeSet<String>),
}

impl FlagValue {
    /// Get as state if this is a State value.
    pub fn as_state(&self) -> Option<State> {
        match self {
            FlagValue::State(s) => Some(*s),
            _ => None,
        }
    }

    /// Get as boolean if this is a Boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FlagValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer if this is an Integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FlagValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as string reference if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FlagValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::State(s) => write!(f, "{}", s),
            FlagValue::Boolean(b) => write!(f, "{}", b),
            FlagValue::Integer(i) => write!(f, "{}", i),
            FlagValue::Double(d) => write!(f, "{}", d),
            FlagValue::String(s) => write!(f, "\"{}\"", s),
            FlagValue::StringSet(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<State> for FlagValue {
    fn from(s: State) -> Self {
        FlagValue::State(s)
    }
}

impl From<bool> for FlagValue {
    fn from(b: bool) -> Self {
        FlagValue::Boolean(b)
    }
}

impl From<i64> for FlagValue {
    fn from(i: i64) -> Self {
        FlagValue::Integer(i)
    }
}

impl From<f64> for FlagValue {
    fn from(d: f64) -> Self {
        FlagValue::Double(d)
    }
}

impl From<&str> for FlagValue {
    fn from(s: &str) -> Self {
        FlagValue::String(s.to_string())
    }
}

impl From<String> for FlagValue {
    fn from(s: String) -> Self {
        FlagValue::String(s)
    }
}

/// Flag storage, keyed by flag name.
pub type Flags = BTreeMap<String, FlagValue>;

/// Helper macro to create flag maps.
#[macro_export]
macro_rules! flags {
    () => {
        $crate::Flags::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut map = $crate::Flags::new();
            $(
                map.insert($key.to_string(), $crate::FlagValue::from($value));
            )+
            map
        }
    };
}
