//! Loaded world state and command execution.

use anyhow::Context;
use regbatch_batch::{report, BatchCommand, BatchError, BatchExecutor, ResultSink};
use regbatch_core::{Identity, PlayerId, WorldId};
use regbatch_registry::Registry;
use regbatch_store::{IdentityResolver, MemoryRegionStore, PlayerDirectory, WorldFixture};
use uuid::Uuid;

/// Identity used when no acting player is named.
pub fn console_identity() -> Identity {
    Identity::new(PlayerId::new(Uuid::nil()), "CONSOLE")
}

/// A loaded world file plus the flag catalogue, ready to run batches.
pub struct Runner {
    store: MemoryRegionStore,
    players: PlayerDirectory,
    flags: Registry,
    world: WorldId,
    actor: Identity,
}

impl Runner {
    pub fn new(fixture: WorldFixture, world: WorldId, actor: Option<&str>) -> anyhow::Result<Self> {
        let (store, players) = fixture.into_parts();
        let actor = match actor {
            Some(name) => players
                .resolve(name)
                .with_context(|| format!("cannot act as '{name}'"))?,
            None => console_identity(),
        };
        let flags = Registry::defaults().context("building the flag catalogue")?;
        Ok(Self {
            store,
            players,
            flags,
            world,
            actor,
        })
    }

    pub fn actor(&self) -> &Identity {
        &self.actor
    }

    pub fn store(&self) -> &MemoryRegionStore {
        &self.store
    }

    /// Run one tokenized command. Returns false if the batch was aborted.
    pub fn run_command<T, K>(&mut self, tokens: &[T], sink: &mut K) -> bool
    where
        T: AsRef<str>,
        K: ResultSink + ?Sized,
    {
        let result = BatchCommand::parse(tokens)
            .map_err(BatchError::from)
            .and_then(|command| {
                BatchExecutor::new(&mut self.store, &self.players, &self.flags).execute(
                    &self.world,
                    &self.actor,
                    &command,
                )
            });
        report(&result, sink);
        result.is_ok()
    }

    /// Run one command per non-blank line, skipping `#` comments.
    /// Returns the number of aborted batches.
    pub fn run_script<K>(&mut self, input: &str, sink: &mut K) -> usize
    where
        K: ResultSink + ?Sized,
    {
        let mut aborted = 0;
        for line in input.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if !self.run_command(&tokens[..], sink) {
                aborted += 1;
            }
        }
        aborted
    }

    /// Snapshot the current state for saving.
    pub fn fixture(&self) -> WorldFixture {
        WorldFixture::from_parts(&self.store, &self.players)
    }
}
