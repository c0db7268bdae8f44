//! Deploy Event Port
//!
//! Observable progress of a deploy run. The production sink turns events
//! into log records; tests record them.

use std::path::PathBuf;

/// Event emitted during a deploy run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Run started with the selected applications
    Started { run_id: String, app_count: usize },

    /// Application left alone: recorded release matches and not forced
    AppSkipped { app: String, release: String },

    /// Bundle download started
    FetchStarted { app: String, release: String },

    /// Bundle downloaded and extracted
    Fetched { app: String, path: PathBuf },

    /// Deployment agent invoked
    DeployStarted { app: String, release: String },

    /// Agent finished without reporting failure
    AppDeployed { app: String, release: String },

    /// State file written
    StatePersisted { path: PathBuf, entries: usize },

    /// Old deploy directories removed
    Pruned { removed: Vec<PathBuf> },

    /// Run finished
    Completed { deployed: usize, skipped: usize },
}

/// Trait for receiving deploy events
pub trait DeployEventSink {
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
