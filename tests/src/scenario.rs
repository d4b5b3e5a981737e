//! Scenario definition and builder.

use std::collections::HashMap;

use regbatch_batch::{report, BatchCommand, BatchError, BatchExecutor, MessageSink};
use regbatch_core::{FlagValue, Identity, PlayerId, Region, RegionId, WorldId};
use regbatch_registry::Registry;
use regbatch_store::{IdentityResolver, MemoryRegionStore, PlayerDirectory};
use uuid::Uuid;

use crate::assertion::{Assertion, AssertionBuilder, StepOutcome};
use crate::error::{ScenarioError, ScenarioResult};
use crate::recording::RecordingStore;

/// A batch command with its assertion.
#[derive(Debug)]
pub struct Step {
    /// Whitespace-separated command tokens.
    pub command: String,
    /// Acting player; the console when absent.
    pub actor: Option<String>,
    /// Assertion to verify the result.
    pub assertion: Assertion,
}

/// Region under construction, with players referenced by name.
#[derive(Debug)]
pub struct RegionSpec {
    region: Region,
    owners: Vec<String>,
    members: Vec<String>,
}

impl RegionSpec {
    fn new(id: &str) -> Self {
        Self {
            region: Region::new(id),
            owners: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn parent(mut self, parent: impl Into<RegionId>) -> Self {
        self.region = self.region.with_parent(parent);
        self
    }

    pub fn owner(mut self, name: impl Into<String>) -> Self {
        self.owners.push(name.into());
        self
    }

    pub fn member(mut self, name: impl Into<String>) -> Self {
        self.members.push(name.into());
        self
    }

    pub fn flag(mut self, key: impl Into<String>, value: impl Into<FlagValue>) -> Self {
        self.region = self.region.with_flag(key, value);
        self
    }
}

/// A complete test scenario: one world, its players, and a sequence of batches.
pub struct Scenario {
    name: String,
    world: WorldId,
    store: MemoryRegionStore,
    players: PlayerDirectory,
    identities: HashMap<String, Identity>,
    registry: Option<Registry>,
    refuse: Vec<RegionId>,
    actor: Option<String>,
    steps: Vec<Step>,
    unknown_player: Option<String>,
}

impl Scenario {
    /// Create a new scenario with the given name over the world `world`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            world: WorldId::new("world"),
            store: MemoryRegionStore::new(),
            players: PlayerDirectory::new(),
            identities: HashMap::new(),
            registry: None,
            refuse: Vec::new(),
            actor: None,
            steps: Vec::new(),
            unknown_player: None,
        }
    }

    /// Add a connected player.
    pub fn online(mut self, name: &str) -> Self {
        let identity = self.players.add_online(name);
        self.identities.insert(name.to_string(), identity);
        self
    }

    /// Add a previously seen, disconnected player.
    pub fn offline(mut self, name: &str) -> Self {
        let identity = self.players.add_offline(name);
        self.identities.insert(name.to_string(), identity);
        self
    }

    /// Add a region to the world, in iteration order.
    pub fn region<F>(mut self, id: &str, build: F) -> Self
    where
        F: FnOnce(RegionSpec) -> RegionSpec,
    {
        let spec = build(RegionSpec::new(id));
        let mut region = spec.region;
        for name in &spec.owners {
            match self.player_id(name) {
                Some(id) => region.owners.insert(id),
                None => return self.fail(name),
            };
        }
        for name in &spec.members {
            match self.player_id(name) {
                Some(id) => region.members.insert(id),
                None => return self.fail(name),
            };
        }
        self.store.insert_region(self.world.clone(), region);
        self
    }

    /// Add plain regions with no owners, members or flags.
    pub fn regions<'a>(self, ids: impl IntoIterator<Item = &'a str>) -> Self {
        ids.into_iter().fold(self, |s, id| s.region(id, |r| r))
    }

    /// Create an empty world container without regions.
    pub fn empty_world(mut self) -> Self {
        self.store.add_world(self.world.clone());
        self
    }

    /// Use a custom flag catalogue instead of the built-in one.
    pub fn registry(mut self, registry: Registry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Make the store refuse every write to a region.
    pub fn refuse_writes_to(mut self, region: &str) -> Self {
        self.refuse.push(RegionId::new(region));
        self
    }

    /// Run following steps as this player.
    pub fn as_player(mut self, name: &str) -> Self {
        self.actor = Some(name.to_string());
        self
    }

    /// Add a batch command with an assertion.
    pub fn step<F>(mut self, command: impl Into<String>, assertion_fn: F) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        let assertion = assertion_fn(AssertionBuilder::new()).build();
        self.steps.push(Step {
            command: command.into(),
            actor: self.actor.clone(),
            assertion,
        });
        self
    }

    /// Get the scenario name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the steps.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Identity of a player added with `online` or `offline`.
    pub fn identity(&self, name: &str) -> Option<&Identity> {
        self.identities.get(name)
    }

    /// Run every step against a fresh copy of the world and return the final store.
    pub fn run(&self) -> ScenarioResult<RecordingStore<MemoryRegionStore>> {
        if let Some(name) = &self.unknown_player {
            return Err(ScenarioError::unknown_player(self.name.as_str(), name.as_str()));
        }

        let defaults;
        let registry = match &self.registry {
            Some(registry) => registry,
            None => {
                defaults = Registry::defaults()?;
                &defaults
            }
        };
        let mut store = RecordingStore::new(self.store.clone());
        for region in &self.refuse {
            store.refuse_writes_to(region.clone());
        }

        for step in &self.steps {
            let actor = match &step.actor {
                Some(name) => self
                    .players
                    .resolve(name)
                    .map_err(|_| ScenarioError::unknown_actor(&step.command, name.as_str()))?,
                None => Identity::new(PlayerId::new(Uuid::nil()), "CONSOLE"),
            };

            let writes_before = store.writes();
            let tokens: Vec<&str> = step.command.split_whitespace().collect();
            let result = BatchCommand::parse(&tokens[..])
                .map_err(BatchError::from)
                .and_then(|command| {
                    BatchExecutor::new(&mut store, &self.players, registry).execute(
                        &self.world,
                        &actor,
                        &command,
                    )
                });

            let mut sink = MessageSink::new();
            report(&result, &mut sink);

            let outcome = StepOutcome {
                result: &result,
                lines: sink.lines(),
                store: store.inner(),
                world: &self.world,
                writes: store.writes() - writes_before,
            };
            step.assertion.verify(&step.command, &outcome)?;
        }

        Ok(store)
    }

    fn player_id(&self, name: &str) -> Option<PlayerId> {
        self.identities.get(name).map(|identity| identity.id)
    }

    fn fail(mut self, name: &str) -> Self {
        if self.unknown_player.is_none() {
            self.unknown_player = Some(name.to_string());
        }
        self
    }
}
