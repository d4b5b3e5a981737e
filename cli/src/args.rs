//! Command line configuration.

use std::path::PathBuf;

use clap::Parser;

/// Apply one flag change to many regions at once.
#[derive(Parser, Debug)]
#[command(name = "regbatch", version)]
pub struct Args {
    /// JSON world file backing the region store
    #[arg(long, env = "REGBATCH_WORLD_FILE")]
    pub world_file: PathBuf,

    /// World whose regions are selected
    #[arg(long, env = "REGBATCH_WORLD", default_value = "world")]
    pub world: String,

    /// Display name of the acting player (defaults to the console)
    #[arg(long, env = "REGBATCH_ACTOR")]
    pub actor: Option<String>,

    /// Write the mutated world file back
    #[arg(long)]
    pub save: bool,

    /// Log every region touched
    #[arg(short, long)]
    pub verbose: bool,

    /// Batch command tokens; read one command per line from stdin if omitted
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Args {
    /// Default log directive for the `regbatch` crates.
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "regbatch=debug"
        } else {
            "regbatch=info"
        }
    }
}
