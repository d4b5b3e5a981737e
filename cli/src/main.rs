//! RegBatch - batch flag editing for protected regions.
//!
//! This is the entry point for the `regbatch` binary.

use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use regbatch_cli::{Args, ConsoleSink, Runner};
use regbatch_core::WorldId;
use regbatch_store::WorldFixture;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let fixture = WorldFixture::load(&args.world_file)
        .with_context(|| format!("loading {}", args.world_file.display()))?;
    let mut runner = Runner::new(
        fixture,
        WorldId::new(args.world.as_str()),
        args.actor.as_deref(),
    )?;

    let mut sink = ConsoleSink::new(io::stdout().lock());
    let aborted = if args.command.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            anyhow::bail!("no command given; pass tokens or pipe commands on stdin");
        }
        let mut script = String::new();
        stdin
            .lock()
            .read_to_string(&mut script)
            .context("reading commands from stdin")?;
        runner.run_script(&script, &mut sink)
    } else {
        usize::from(!runner.run_command(&args.command[..], &mut sink))
    };
    sink.finish().context("writing results")?;

    if args.save {
        runner
            .fixture()
            .save(&args.world_file)
            .with_context(|| format!("saving {}", args.world_file.display()))?;
    }

    Ok(if aborted == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
