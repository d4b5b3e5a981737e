//! Criterion evaluation against a region snapshot.

use regbatch_core::{Region, RegionSet};
use tracing::debug;

use crate::criterion::SelectionCriterion;
use crate::range::CountRange;

/// Evaluates selection criteria over one world's regions.
pub struct Selector<'s> {
    regions: &'s RegionSet,
}

impl<'s> Selector<'s> {
    pub fn new(regions: &'s RegionSet) -> Self {
        Self { regions }
    }

    /// Find every region matching the criterion.
    ///
    /// Output follows the snapshot's order, except for count ranges which
    /// follow the counter in ascending order. No region appears twice.
    pub fn select(&self, criterion: &SelectionCriterion) -> Vec<&'s Region> {
        let regions = self.regions;
        let selected: Vec<&'s Region> = match criterion {
            SelectionCriterion::MemberOrOwner(player) => {
                self.filter(|r| regions.is_member(r, &player.id))
            }
            SelectionCriterion::OwnerOnly(player) => {
                self.filter(|r| regions.is_owner(r, &player.id))
            }
            SelectionCriterion::MemberOnly(player) => {
                self.filter(|r| regions.is_member_only(r, &player.id))
            }
            SelectionCriterion::NameRegex(pattern) => {
                self.filter(|r| pattern.is_match(r.id.as_str()))
            }
            SelectionCriterion::NameCountRange(range) => self.count_range(range),
            SelectionCriterion::ChildOf(parent) => self.filter(|r| {
                r.parent.as_ref().is_some_and(|p| p.eq_ignore_case(parent))
            }),
            SelectionCriterion::All => regions.iter().collect(),
        };

        debug!(
            criterion = %criterion,
            scanned = regions.len(),
            selected = selected.len(),
            "selection evaluated"
        );
        selected
    }

    fn filter<F>(&self, predicate: F) -> Vec<&'s Region>
    where
        F: Fn(&Region) -> bool,
    {
        self.regions.iter().filter(|&r| predicate(r)).collect()
    }

    fn count_range(&self, range: &CountRange) -> Vec<&'s Region> {
        if range.is_empty() {
            return Vec::new();
        }
        let mut hits: Vec<(i64, &'s Region)> = self
            .regions
            .iter()
            .filter_map(|r| range.index_of(r.id.as_str()).map(|i| (i, r)))
            .collect();
        hits.sort_by_key(|(i, _)| *i);
        hits.into_iter().map(|(_, r)| r).collect()
    }
}

/// Evaluate a criterion over a region snapshot.
pub fn select<'s>(regions: &'s RegionSet, criterion: &SelectionCriterion) -> Vec<&'s Region> {
    Selector::new(regions).select(criterion)
}
