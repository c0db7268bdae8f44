//! Local file writes

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{MultideployerError, MultideployerResult};

/// Replace `path` with `content` atomically.
///
/// The content goes to a temporary file next to `path` which is then
/// renamed over it, so readers see either the old or the new file. Parent
/// directories are created as needed.
pub fn write_atomic(path: &Path, content: &[u8]) -> MultideployerResult<()> {
    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => parent,
        None => Path::new("."),
    };
    std::fs::create_dir_all(parent)
        .map_err(|e| MultideployerError::io(format!("cannot create {}", parent.display()), e))?;

    let context = || format!("cannot write {}", path.display());
    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| MultideployerError::io(context(), e))?;
    tmp.write_all(content)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| MultideployerError::io(context(), e))?;
    tmp.persist(path)
        .map_err(|e| MultideployerError::io(context(), e.error))?;
    Ok(())
}
