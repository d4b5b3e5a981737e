//! Resolved player identities.

use crate::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A player handle resolved from a display name.
///
/// Membership and ownership checks only look at `id`; the name is kept for
/// reporting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    pub id: PlayerId,
    pub name: String,
}

impl Identity {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
