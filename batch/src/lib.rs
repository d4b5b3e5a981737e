//! RegBatch Batch
//!
//! Run one flag change across every region one criterion selects.
//!
//! Responsibilities:
//! - Parse already-tokenized commands (`BatchCommand`)
//! - Fail fast on unknown flags, worlds, players and malformed bounds
//! - Apply the change region by region, never stopping on a rejection
//! - Aggregate outcomes and hand them to a `ResultSink`
//!
//! # Module Structure
//!
//! - `command` - Token grammar for batch commands
//! - `executor` - The `BatchExecutor` pipeline
//! - `result` - `BatchResult` aggregate
//! - `sink` - Reporting of outcomes and totals
//! - `error` - Error types for aborted batches and bad commands

mod command;
mod error;
mod executor;
mod result;
mod sink;

pub use command::{BatchCommand, FlagAction, USAGE};
pub use error::{BatchError, CommandError};
pub use executor::BatchExecutor;
pub use result::BatchResult;
pub use sink::{
    abort_line, modified_line, rejected_line, report, total_line, MessageSink, ResultSink,
};
