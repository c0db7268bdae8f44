//! On-disk layout under the multideployer base directory
//!
//! ```text
//! <base>/last_state.yaml
//! <base>/deploys/<run-id>/<app>/bundle.tar.gz
//! <base>/deploys/<run-id>/<app>/bundle/...
//! ```

use std::path::{Path, PathBuf};

pub const STATE_FILE_NAME: &str = "last_state.yaml";
pub const DEPLOYS_DIR_NAME: &str = "deploys";
pub const DEFAULT_BASE_DIR: &str = "/var/lib/codedeploy-multideployer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployPaths {
    base: PathBuf,
}

impl DeployPaths {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn state_file(&self) -> PathBuf {
        self.base.join(STATE_FILE_NAME)
    }

    pub fn deploys_root(&self) -> PathBuf {
        self.base.join(DEPLOYS_DIR_NAME)
    }
}

impl Default for DeployPaths {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DIR)
    }
}
