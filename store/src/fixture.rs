//! JSON world files backing the memory store.
//!
//! ```json
//! {
//!   "players": [{ "id": "…uuid…", "name": "Alice", "online": true }],
//!   "worlds": {
//!     "world": [
//!       { "id": "town", "owners": ["…uuid…"], "flags": { "pvp": { "state": "deny" } } },
//!       { "id": "plot_1", "parent": "town" }
//!     ]
//!   }
//! }
//! ```
//!
//! Region order inside a world is preserved and becomes the store's natural
//! iteration order.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use regbatch_core::{Identity, PlayerId, RegionSet, WorldId};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::memory::MemoryRegionStore;
use crate::players::PlayerDirectory;

/// A player record as stored in a world file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownPlayer {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub online: bool,
}

impl KnownPlayer {
    pub fn identity(&self) -> Identity {
        Identity::new(self.id, self.name.clone())
    }
}

/// Serialized form of a store plus its player directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldFixture {
    #[serde(default)]
    pub players: Vec<KnownPlayer>,
    #[serde(default)]
    pub worlds: BTreeMap<WorldId, RegionSet>,
}

impl WorldFixture {
    /// Read a world file from disk.
    pub fn load(path: &Path) -> StoreResult<Self> {
        let source = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        let fixture: WorldFixture = serde_json::from_str(&source)
            .map_err(|e| StoreError::fixture(path, e.to_string()))?;
        info!(
            path = %path.display(),
            worlds = fixture.worlds.len(),
            players = fixture.players.len(),
            "loaded world file"
        );
        Ok(fixture)
    }

    /// Write the world file back to disk.
    pub fn save(&self, path: &Path) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| StoreError::fixture(path, e.to_string()))?;
        fs::write(path, json).map_err(|e| StoreError::io(path, e))?;
        info!(path = %path.display(), "saved world file");
        Ok(())
    }

    /// Split into a live store and player directory.
    pub fn into_parts(self) -> (MemoryRegionStore, PlayerDirectory) {
        let mut store = MemoryRegionStore::new();
        for (world, regions) in self.worlds {
            let container = store.add_world(world);
            for region in Vec::from(regions) {
                container.insert(region);
            }
        }
        let players = self.players.into_iter().collect();
        (store, players)
    }

    /// Capture a store and player directory.
    pub fn from_parts(store: &MemoryRegionStore, players: &PlayerDirectory) -> Self {
        Self {
            players: players.players().to_vec(),
            worlds: store
                .worlds()
                .map(|(world, regions)| (world.clone(), regions.clone()))
                .collect(),
        }
    }
}
