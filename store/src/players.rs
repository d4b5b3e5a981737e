//! Player directory used for identity resolution.

use regbatch_core::{eq_ignore_case, Identity, PlayerId};

use crate::error::UnknownIdentity;
use crate::fixture::KnownPlayer;
use crate::traits::IdentityResolver;

/// Every player the server has seen, with their connection state.
#[derive(Debug, Clone, Default)]
pub struct PlayerDirectory {
    players: Vec<KnownPlayer>,
}

impl PlayerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a player, replacing an earlier record with the same id.
    pub fn add(&mut self, player: KnownPlayer) {
        match self.players.iter_mut().find(|p| p.id == player.id) {
            Some(existing) => *existing = player,
            None => self.players.push(player),
        }
    }

    /// Record a connected player and return its identity.
    pub fn add_online(&mut self, name: impl Into<String>) -> Identity {
        self.add_new(name.into(), true)
    }

    /// Record a previously seen, disconnected player and return its identity.
    pub fn add_offline(&mut self, name: impl Into<String>) -> Identity {
        self.add_new(name.into(), false)
    }

    pub fn players(&self) -> &[KnownPlayer] {
        &self.players
    }

    fn add_new(&mut self, name: String, online: bool) -> Identity {
        let player = KnownPlayer {
            id: PlayerId::random(),
            name,
            online,
        };
        let identity = player.identity();
        self.players.push(player);
        identity
    }

    fn find(&self, name: &str, online: bool) -> Option<&KnownPlayer> {
        self.players
            .iter()
            .find(|p| p.online == online && eq_ignore_case(&p.name, name))
    }
}

impl IdentityResolver for PlayerDirectory {
    fn resolve(&self, name: &str) -> Result<Identity, UnknownIdentity> {
        let name = name.trim();
        if name.is_empty() {
            return Err(UnknownIdentity::new(name));
        }

        self.find(name, true)
            .or_else(|| self.find(name, false))
            .map(KnownPlayer::identity)
            .ok_or_else(|| UnknownIdentity::new(name))
    }
}

impl FromIterator<KnownPlayer> for PlayerDirectory {
    fn from_iter<I: IntoIterator<Item = KnownPlayer>>(iter: I) -> Self {
        let mut directory = PlayerDirectory::new();
        for player in iter {
            directory.add(player);
        }
        directory
    }
}
