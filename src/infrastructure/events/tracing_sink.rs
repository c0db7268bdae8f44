//! Tracing Event Sink
//!
//! Renders deploy events through `tracing`, so they reach every layer
//! of the installed logging context (console and log file).

use tracing::{debug, info};

use crate::domain::ports::{DeployEvent, DeployEventSink};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl DeployEventSink for TracingEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started { run_id, app_count } => {
                info!(run_id = %run_id, apps = app_count, "deploy run started");
            }
            DeployEvent::AppSkipped { app, release } => {
                info!(app = %app, release = %release, "release already deployed, skipping");
            }
            DeployEvent::FetchStarted { app, release } => {
                info!(app = %app, release = %release, "fetching bundle");
            }
            DeployEvent::Fetched { app, path } => {
                debug!(app = %app, path = %path.display(), "bundle ready");
            }
            DeployEvent::DeployStarted { app, release } => {
                info!(app = %app, release = %release, "deploying");
            }
            DeployEvent::AppDeployed { app, release } => {
                info!(app = %app, release = %release, "deployed");
            }
            DeployEvent::StatePersisted { path, entries } => {
                debug!(path = %path.display(), entries, "state saved");
            }
            DeployEvent::Pruned { removed } => {
                for dir in &removed {
                    debug!(path = %dir.display(), "removed old deploy directory");
                }
                if !removed.is_empty() {
                    info!(count = removed.len(), "pruned old deploy directories");
                }
            }
            DeployEvent::Completed { deployed, skipped } => {
                info!(deployed, skipped, "deploy run completed");
            }
        }
    }
}
