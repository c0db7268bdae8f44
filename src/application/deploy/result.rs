//! Deploy Result

use std::path::PathBuf;

use uuid::Uuid;

/// Outcome of a successful deploy run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReport {
    pub run_id: Uuid,
    /// Working directory of the run, when anything was fetched
    pub work_dir: Option<PathBuf>,
    /// Applications fetched and deployed, in config order
    pub deployed: Vec<String>,
    /// Applications whose recorded release was current
    pub skipped: Vec<String>,
    /// Old deploy directories removed after the run
    pub pruned: Vec<PathBuf>,
}

impl DeployReport {
    pub fn new(run_id: Uuid) -> Self {
        Self {
            run_id,
            work_dir: None,
            deployed: Vec::new(),
            skipped: Vec::new(),
            pruned: Vec::new(),
        }
    }

    pub fn has_changes(&self) -> bool {
        !self.deployed.is_empty()
    }
}
