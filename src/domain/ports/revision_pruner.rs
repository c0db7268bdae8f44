//! RevisionPruner port - retention of old deploy run directories

use std::path::{Path, PathBuf};

use crate::error::MultideployerResult;

pub trait RevisionPruner {
    /// Keep the `keep` newest run directories under `deploys_root` and
    /// delete the rest. Returns the removed directories, oldest first.
    fn prune(&self, deploys_root: &Path, keep: usize) -> MultideployerResult<Vec<PathBuf>>;
}
