//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `agent/` - CodeDeploy local agent invocation
//! - `events/` - Deploy event sinks
//! - `fs/` - Atomic writes, deploy directory retention
//! - `repositories/` - State file repository
//! - `source/` - Bundle download and extraction

pub mod agent;
pub mod events;
pub mod fs;
pub mod privilege;
pub mod repositories;
pub mod source;

// Re-export for convenience
pub use agent::CodedeployLocalAgent;
pub use events::TracingEventSink;
pub use fs::{prune_revisions, write_atomic, MtimeRevisionPruner};
pub use privilege::RootPrivilegeGuard;
pub use repositories::YamlStateRepository;
pub use source::GithubBundleSource;
