//! Retention of deploy run directories

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::domain::ports::RevisionPruner;
use crate::error::{MultideployerError, MultideployerResult};

/// Prunes run directories by modification time
#[derive(Debug, Clone, Copy, Default)]
pub struct MtimeRevisionPruner;

impl RevisionPruner for MtimeRevisionPruner {
    fn prune(&self, deploys_root: &Path, keep: usize) -> MultideployerResult<Vec<PathBuf>> {
        prune_revisions(deploys_root, keep)
    }
}

/// Delete all but the `keep` most recently modified subdirectories of
/// `deploys_root`. Returns the removed directories, oldest first.
///
/// A missing root or `keep` at or above the directory count is a no-op.
/// Failing to list or delete a directory fails the call.
pub fn prune_revisions(deploys_root: &Path, keep: usize) -> MultideployerResult<Vec<PathBuf>> {
    let entries = match fs::read_dir(deploys_root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(MultideployerError::io(
                format!("cannot list {}", deploys_root.display()),
                e,
            ))
        }
    };

    let list_err = |e| MultideployerError::io(format!("cannot list {}", deploys_root.display()), e);
    let mut dirs: Vec<(SystemTime, PathBuf)> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(list_err)?;
        let metadata = entry.metadata().map_err(list_err)?;
        if !metadata.is_dir() {
            continue;
        }
        let modified = metadata.modified().map_err(list_err)?;
        dirs.push((modified, entry.path()));
    }

    if dirs.len() <= keep {
        return Ok(Vec::new());
    }

    dirs.sort();
    let excess = dirs.len() - keep;
    let mut removed = Vec::with_capacity(excess);
    for (_, dir) in dirs.into_iter().take(excess) {
        fs::remove_dir_all(&dir)
            .map_err(|e| MultideployerError::io(format!("cannot remove {}", dir.display()), e))?;
        removed.push(dir);
    }
    Ok(removed)
}
