//! DeployRun entity - one invocation of the orchestrator

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Identity and working directory of one deploy run.
///
/// The directory holds one subdirectory per fetched application and is
/// left on disk after the run until pruned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployRun {
    id: Uuid,
    work_dir: PathBuf,
}

impl DeployRun {
    /// Mint a fresh run under `deploys_root`
    pub fn new(deploys_root: &Path) -> Self {
        Self::with_id(Uuid::new_v4(), deploys_root)
    }

    pub fn with_id(id: Uuid, deploys_root: &Path) -> Self {
        Self {
            id,
            work_dir: deploys_root.join(id.to_string()),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Directory holding `app`'s archive and extracted bundle
    pub fn app_dir(&self, app: &str) -> PathBuf {
        self.work_dir.join(app)
    }
}
