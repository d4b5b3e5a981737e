//! Console result sink.

use std::io::{self, Write};

use regbatch_batch::{
    abort_line, modified_line, rejected_line, total_line, BatchError, ResultSink,
};
use regbatch_core::RegionId;
use regbatch_mutation::RejectReason;

/// Writes one line per outcome to a writer, keeping the first write error.
pub struct ConsoleSink<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flush and surface any write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn line(&mut self, line: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{line}") {
            self.error = Some(e);
        }
    }
}

impl<W: Write> ResultSink for ConsoleSink<W> {
    fn region_modified(&mut self, region: &RegionId) {
        self.line(&modified_line(region));
    }

    fn region_rejected(&mut self, region: &RegionId, reason: &RejectReason) {
        self.line(&rejected_line(region, reason));
    }

    fn total(&mut self, applied: usize, rejected: usize) {
        self.line(&total_line(applied, rejected));
    }

    fn aborted(&mut self, error: &BatchError) {
        self.line(&abort_line(error));
    }
}
