//! RegBatch Registry
//!
//! Typed flag schema: which flags exist, what kind of value each holds, and
//! how raw text becomes a value.
//!
//! Responsibilities:
//! - Describe flags (`FlagDefinition`, `FlagKind`)
//! - Parse raw input into `FlagValue`s with a `FlagContext`
//! - Look flags up by fuzzy name (`FlagRegistry`)

mod builder;
mod parse;
mod registry;
mod types;

pub use builder::{FlagBuilder, RegistryBuilder, RegistryError};
pub use parse::{parse_input, FlagParseError};
pub use registry::{normalize_flag_name, FlagRegistry, Registry};
pub use types::{FlagContext, FlagDefinition, FlagKind, FlagParser};
