//! Assertion types and builders for verifying step results.

use regbatch_batch::{BatchError, BatchResult};
use regbatch_core::{FlagValue, WorldId};
use regbatch_store::MemoryRegionStore;

use crate::error::{ScenarioError, ScenarioResult};

/// Everything a step produced.
pub struct StepOutcome<'a> {
    pub result: &'a Result<BatchResult, BatchError>,
    pub lines: &'a [String],
    pub store: &'a MemoryRegionStore,
    pub world: &'a WorldId,
    /// Store write attempts made by this step.
    pub writes: usize,
}

/// A complete assertion for a step result.
#[derive(Debug, Default)]
pub struct Assertion {
    // Aggregate counts
    pub modified: Option<usize>,
    pub rejected: Option<usize>,

    // Per-region outcomes, in selection order
    pub selected: Option<Vec<String>>,
    pub rejected_regions: Vec<String>,

    // Store effects
    pub writes: Option<usize>,
    pub flags: Vec<(String, String, Option<FlagValue>)>,

    // Reported lines
    pub lines: Option<Vec<String>>,

    // Abort expectation (substring of the abort message)
    pub error: Option<String>,
}

impl Assertion {
    /// Create a new empty assertion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify the assertion against a step outcome.
    pub fn verify(&self, step: &str, outcome: &StepOutcome<'_>) -> ScenarioResult<()> {
        if let Some(expected) = self.writes {
            if outcome.writes != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected {} store writes, got {}", expected, outcome.writes),
                ));
            }
        }

        if let Some(ref expected) = self.lines {
            if outcome.lines != expected.as_slice() {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "report mismatch:\n  expected: {:?}\n  actual:   {:?}",
                        expected, outcome.lines
                    ),
                ));
            }
        }

        self.verify_flags(step, outcome)?;

        if let Some(ref expected_error) = self.error {
            return match outcome.result {
                Err(e) if e.to_string().contains(expected_error.as_str()) => Ok(()),
                Err(e) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected abort containing '{}', got: {}", expected_error, e),
                )),
                Ok(_) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected abort containing '{}', but batch ran", expected_error),
                )),
            };
        }

        let result = outcome
            .result
            .as_ref()
            .map_err(|e| ScenarioError::assertion_failed(step, format!("batch aborted: {}", e)))?;

        self.verify_result(step, result)
    }

    fn verify_result(&self, step: &str, result: &BatchResult) -> ScenarioResult<()> {
        if let Some(expected) = self.modified {
            if result.applied() != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected {} modified, got {}", expected, result.applied()),
                ));
            }
        }

        if let Some(expected) = self.rejected {
            if result.rejected() != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected {} rejected, got {}", expected, result.rejected()),
                ));
            }
        }

        if let Some(ref expected) = self.selected {
            let actual: Vec<&str> = result
                .outcomes()
                .iter()
                .map(|o| o.region().as_str())
                .collect();
            if actual != *expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "selection mismatch:\n  expected: {:?}\n  actual:   {:?}",
                        expected, actual
                    ),
                ));
            }
        }

        for region in &self.rejected_regions {
            let rejected = result
                .outcomes()
                .iter()
                .any(|o| o.is_rejected() && o.region().as_str() == region);
            if !rejected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected region '{}' to be rejected", region),
                ));
            }
        }

        Ok(())
    }

    fn verify_flags(&self, step: &str, outcome: &StepOutcome<'_>) -> ScenarioResult<()> {
        for (region, flag, expected) in &self.flags {
            let actual = outcome
                .store
                .region(outcome.world, region)
                .ok_or_else(|| {
                    ScenarioError::assertion_failed(
                        step,
                        format!("region '{}' does not exist", region),
                    )
                })?
                .get_flag(flag);
            if actual != expected.as_ref() {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "flag '{}' on '{}':\n  expected: {:?}\n  actual:   {:?}",
                        flag, region, expected, actual
                    ),
                ));
            }
        }
        Ok(())
    }
}

/// Builder for assertions.
#[derive(Debug, Default)]
pub struct AssertionBuilder {
    assertion: Assertion,
}

impl AssertionBuilder {
    /// Create a new assertion builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the assertion.
    pub fn build(self) -> Assertion {
        self.assertion
    }

    /// Assert that N regions were modified.
    pub fn modified(mut self, n: usize) -> Self {
        self.assertion.modified = Some(n);
        self
    }

    /// Assert that N regions were rejected.
    pub fn rejected(mut self, n: usize) -> Self {
        self.assertion.rejected = Some(n);
        self
    }

    /// Assert the exact selected regions, in order.
    pub fn selected<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assertion.selected = Some(regions.into_iter().map(Into::into).collect());
        self
    }

    /// Assert that a region was selected but rejected.
    pub fn rejected_region(mut self, region: impl Into<String>) -> Self {
        self.assertion.rejected_regions.push(region.into());
        self
    }

    /// Assert that nothing was selected.
    pub fn empty(self) -> Self {
        self.selected(Vec::<String>::new()).modified(0)
    }

    /// Assert the number of store write attempts.
    pub fn writes(mut self, n: usize) -> Self {
        self.assertion.writes = Some(n);
        self
    }

    /// Assert a flag value after the step.
    pub fn flag(
        mut self,
        region: impl Into<String>,
        flag: impl Into<String>,
        value: impl Into<FlagValue>,
    ) -> Self {
        self.assertion
            .flags
            .push((region.into(), flag.into(), Some(value.into())));
        self
    }

    /// Assert a flag is absent after the step.
    pub fn no_flag(mut self, region: impl Into<String>, flag: impl Into<String>) -> Self {
        self.assertion.flags.push((region.into(), flag.into(), None));
        self
    }

    /// Assert the exact reported lines.
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assertion.lines = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    /// Assert the batch aborted with a message containing `message`.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.assertion.error = Some(message.into());
        self
    }

    /// Assert the batch aborted before touching the store.
    pub fn aborted(self, message: impl Into<String>) -> Self {
        self.error(message).writes(0)
    }
}
