//! Reporting of batch outcomes.

use regbatch_core::RegionId;
use regbatch_mutation::{MutationOutcome, RejectReason};

use crate::error::BatchError;
use crate::result::BatchResult;

/// Receives the outcome of a batch, one call per line of feedback.
pub trait ResultSink {
    fn region_modified(&mut self, region: &RegionId);

    fn region_rejected(&mut self, region: &RegionId, reason: &RejectReason);

    /// Always called once for a batch that ran, even if nothing was selected.
    fn total(&mut self, applied: usize, rejected: usize);

    /// Called instead of everything else when the batch never started.
    fn aborted(&mut self, error: &BatchError);
}

/// Feed a batch result into a sink, in selection order.
pub fn report<K>(result: &Result<BatchResult, BatchError>, sink: &mut K)
where
    K: ResultSink + ?Sized,
{
    match result {
        Ok(batch) => {
            for outcome in batch.outcomes() {
                match outcome {
                    MutationOutcome::Applied(region) => sink.region_modified(region),
                    MutationOutcome::Rejected(region, reason) => {
                        sink.region_rejected(region, reason)
                    }
                }
            }
            sink.total(batch.applied(), batch.rejected());
        }
        Err(error) => sink.aborted(error),
    }
}

pub fn modified_line(region: &RegionId) -> String {
    format!("modified {region}")
}

pub fn rejected_line(region: &RegionId, reason: &RejectReason) -> String {
    format!("rejected {region}: {reason}")
}

pub fn total_line(applied: usize, rejected: usize) -> String {
    if rejected == 0 {
        format!("total modified: {applied}")
    } else {
        format!("total modified: {applied} ({rejected} rejected)")
    }
}

pub fn abort_line(error: &BatchError) -> String {
    format!("batch aborted: {error}")
}

/// Collects report lines in memory.
#[derive(Debug, Default)]
pub struct MessageSink {
    lines: Vec<String>,
}

impl MessageSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl ResultSink for MessageSink {
    fn region_modified(&mut self, region: &RegionId) {
        self.lines.push(modified_line(region));
    }

    fn region_rejected(&mut self, region: &RegionId, reason: &RejectReason) {
        self.lines.push(rejected_line(region, reason));
    }

    fn total(&mut self, applied: usize, rejected: usize) {
        self.lines.push(total_line(applied, rejected));
    }

    fn aborted(&mut self, error: &BatchError) {
        self.lines.push(abort_line(error));
    }
}
