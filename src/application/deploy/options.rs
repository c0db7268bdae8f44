//! Deploy Options

use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::domain::value_objects::DeployPaths;

/// Deploy run directories kept after pruning
pub const DEFAULT_KEEP_DEPLOYS: usize = 5;

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Application list (`multideployer.yaml`)
    pub config_path: PathBuf,
    /// State file and deploy directory locations
    pub paths: DeployPaths,
    /// Only deploy these applications (empty = all)
    pub apps: Vec<String>,
    /// Redeploy regardless of recorded state
    pub force: bool,
    /// Deploy run directories to retain
    pub keep_deploys: usize,
}

impl DeployOptions {
    pub fn new(config_path: impl Into<PathBuf>, paths: DeployPaths) -> Self {
        Self {
            config_path: config_path.into(),
            paths,
            apps: Vec::new(),
            force: false,
            keep_deploys: DEFAULT_KEEP_DEPLOYS,
        }
    }

    pub fn with_apps(mut self, apps: Vec<String>) -> Self {
        self.apps = apps;
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_keep_deploys(mut self, keep: usize) -> Self {
        self.keep_deploys = keep;
        self
    }
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE, DeployPaths::default())
    }
}
