//! RegBatch CLI - runs batch flag commands against a JSON world file.
//!
//! # Module Structure
//!
//! - `args` - Command line and environment configuration
//! - `console` - Result sink printing outcome lines
//! - `runner` - Loaded world state and command execution

mod args;
mod console;
mod runner;

pub use args::Args;
pub use console::ConsoleSink;
pub use runner::{console_identity, Runner};
