//! Region structures.
//!
//! A region is a named protected zone with owners, members and flags. Parent
//! links are stored as identifiers and resolved through the [`RegionSet`] the
//! region belongs to, so a region never holds its parent inline.

use crate::{FlagValue, Flags, PlayerId, RegionId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

/// A protected region inside one world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Identifier, unique within the world.
    pub id: RegionId,
    /// Parent region identifier; `None` for root regions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<RegionId>,
    /// Players owning this region.
    #[serde(default)]
    pub owners: BTreeSet<PlayerId>,
    /// Players that are members of this region.
    #[serde(default)]
    pub members: BTreeSet<PlayerId>,
    /// Current flag values.
    #[serde(default)]
    pub flags: Flags,
}

impl Region {
    /// Create a root region with no owners, members or flags.
    pub fn new(id: impl Into<RegionId>) -> Self {
        Self {
            id: id.into(),
            parent: None,
            owners: BTreeSet::new(),
            members: BTreeSet::new(),
            flags: Flags::new(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<RegionId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_owner(mut self, player: PlayerId) -> Self {
        self.owners.insert(player);
        self
    }

    pub fn with_member(mut self, player: PlayerId) -> Self {
        self.members.insert(player);
        self
    }

    pub fn with_flag(mut self, key: impl Into<String>, value: impl Into<FlagValue>) -> Self {
        self.flags.insert(key.into(), value.into());
        self
    }

    /// Returns true if the player is listed as owner of this region itself.
    pub fn has_owner(&self, player: &PlayerId) -> bool {
        self.owners.contains(player)
    }

    /// Returns true if the player is listed as member of this region itself.
    pub fn has_member(&self, player: &PlayerId) -> bool {
        self.members.contains(player)
    }

    /// Get a flag value by key.
    pub fn get_flag(&self, key: &str) -> Option<&FlagValue> {
        self.flags.get(key)
    }

    /// Set a flag value, returning the previous one.
    pub fn set_flag(&mut self, key: impl Into<String>, value: FlagValue) -> Option<FlagValue> {
        self.flags.insert(key.into(), value)
    }

    /// Remove a flag.
    pub fn remove_flag(&mut self, key: &str) -> Option<FlagValue> {
        self.flags.remove(key)
    }
}

/// Ordered snapshot of the regions of one world.
///
/// Iteration order is insertion order, which is the natural order of the
/// store the snapshot was taken from. Identifiers are unique: inserting a
/// region with an existing identifier replaces it in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Region>", into = "Vec<Region>")]
pub struct RegionSet {
    regions: Vec<Region>,
    #[serde(skip)]
    index: HashMap<RegionId, usize>,
}

impl RegionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a region, returning the region it replaced.
    pub fn insert(&mut self, region: Region) -> Option<Region> {
        match self.index.get(&region.id) {
            Some(&pos) => Some(std::mem::replace(&mut self.regions[pos], region)),
            None => {
                self.index.insert(region.id.clone(), self.regions.len());
                self.regions.push(region);
                None
            }
        }
    }

    /// Get a region by exact identifier.
    pub fn get(&self, id: &str) -> Option<&Region> {
        self.index.get(id).map(|&pos| &self.regions[pos])
    }

    /// Get a mutable region by exact identifier.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Region> {
        match self.index.get(id) {
            Some(&pos) => self.regions.get_mut(pos),
            None => None,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Walk from a region up through its parents.
    ///
    /// The walk stops at a root, at a parent identifier that is not in this
    /// set, or when a region would be visited twice.
    pub fn ancestry<'a>(&'a self, region: &'a Region) -> Ancestry<'a> {
        Ancestry {
            set: self,
            next: Some(region),
            visited: HashSet::new(),
        }
    }

    /// Returns true if the player owns the region or any of its ancestors.
    pub fn is_owner(&self, region: &Region, player: &PlayerId) -> bool {
        self.ancestry(region).any(|r| r.has_owner(player))
    }

    /// Returns true if the player is owner or member of the region or any of
    /// its ancestors.
    pub fn is_member(&self, region: &Region, player: &PlayerId) -> bool {
        self.ancestry(region)
            .any(|r| r.has_owner(player) || r.has_member(player))
    }

    /// Returns true if the player is a member somewhere on the chain but owner
    /// nowhere on it.
    pub fn is_member_only(&self, region: &Region, player: &PlayerId) -> bool {
        !self.is_owner(region, player) && self.ancestry(region).any(|r| r.has_member(player))
    }
}

impl FromIterator<Region> for RegionSet {
    fn from_iter<I: IntoIterator<Item = Region>>(iter: I) -> Self {
        let mut set = RegionSet::new();
        for region in iter {
            set.insert(region);
        }
        set
    }
}

impl From<Vec<Region>> for RegionSet {
    fn from(regions: Vec<Region>) -> Self {
        regions.into_iter().collect()
    }
}

impl From<RegionSet> for Vec<Region> {
    fn from(set: RegionSet) -> Self {
        set.regions
    }
}

impl<'a> IntoIterator for &'a RegionSet {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

/// Iterator over a region and its ancestors.
pub struct Ancestry<'a> {
    set: &'a RegionSet,
    next: Option<&'a Region>,
    visited: HashSet<&'a RegionId>,
}

impl<'a> Iterator for Ancestry<'a> {
    type Item = &'a Region;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if !self.visited.insert(&current.id) {
            return None;
        }
        self.next = current
            .parent
            .as_ref()
            .and_then(|parent| self.set.get(parent.as_str()));
        Some(current)
    }
}
