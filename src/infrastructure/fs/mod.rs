//! File System Helpers
//!
//! Atomic writes for the state file and retention of deploy run directories.

mod local;
mod prune;

pub use local::write_atomic;
pub use prune::{prune_revisions, MtimeRevisionPruner};
