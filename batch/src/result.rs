//! Batch result aggregate.

use regbatch_mutation::MutationOutcome;

/// Every per-region outcome of one batch, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    outcomes: Vec<MutationOutcome>,
    applied: usize,
    rejected: usize,
}

impl BatchResult {
    pub fn new(outcomes: Vec<MutationOutcome>) -> Self {
        let applied = outcomes.iter().filter(|o| o.is_applied()).count();
        let rejected = outcomes.len() - applied;
        Self {
            outcomes,
            applied,
            rejected,
        }
    }

    pub fn outcomes(&self) -> &[MutationOutcome] {
        &self.outcomes
    }

    /// Number of regions the change was committed to.
    pub fn applied(&self) -> usize {
        self.applied
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Number of regions the criterion selected.
    pub fn selected(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

impl FromIterator<MutationOutcome> for BatchResult {
    fn from_iter<I: IntoIterator<Item = MutationOutcome>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
