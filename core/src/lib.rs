//! RegBatch Core Types
//!
//! This crate provides the foundational types shared by every RegBatch component:
//! - Identifier types (WorldId, RegionId, PlayerId)
//! - Player identities resolved from display names
//! - Flag values (the FlagValue enum and the Flags map)
//! - Region structures and the ordered RegionSet snapshot

mod id;
mod identity;
mod region;
mod value;

pub use id::*;
pub use identity::*;
pub use region::*;
pub use value::*;
