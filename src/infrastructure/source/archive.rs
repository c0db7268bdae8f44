//! Gzipped tarball extraction
//!
//! Archive services wrap the repository in one top-level directory
//! (`owner-repo-sha/`). That first component is dropped from every entry.

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Component, Path, PathBuf};

use flate2::read::GzDecoder;
use tar::Archive;

use crate::error::{MultideployerError, MultideployerResult};

/// Extract the regular files of `archive` into `dest`, stripping the first
/// path component of each entry. Returns the number of files written.
///
/// Directory, link and metadata entries are not extracted; directories are
/// created as files need them. Entries that would land outside `dest` fail
/// the extraction.
pub fn extract_stripped(archive: &Path, dest: &Path) -> MultideployerResult<usize> {
    let archive_err = |source: io::Error| MultideployerError::Archive {
        path: archive.to_path_buf(),
        source,
    };

    let file = File::open(archive).map_err(archive_err)?;
    let mut tarball = Archive::new(GzDecoder::new(BufReader::new(file)));
    fs::create_dir_all(dest)
        .map_err(|e| MultideployerError::io(format!("cannot create {}", dest.display()), e))?;

    let mut written = 0;
    for entry in tarball.entries().map_err(archive_err)? {
        let mut entry = entry.map_err(archive_err)?;
        if !entry.header().entry_type().is_file() {
            continue;
        }

        let path = entry.path().map_err(archive_err)?.into_owned();
        let Some(relative) = strip_first_component(&path).map_err(archive_err)? else {
            continue;
        };

        let target = dest.join(&relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                MultideployerError::io(format!("cannot create {}", parent.display()), e)
            })?;
        }
        entry.unpack(&target).map_err(archive_err)?;
        written += 1;
    }

    Ok(written)
}

/// `a/b/c` -> `b/c`; `a` -> None. Rejects anything that could escape.
fn strip_first_component(path: &Path) -> io::Result<Option<PathBuf>> {
    let mut components = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir));
    if components.next().is_none() {
        return Ok(None);
    }

    let mut relative = PathBuf::new();
    for component in components {
        match component {
            Component::Normal(part) => relative.push(part),
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("unsafe entry path {}", path.display()),
                ))
            }
        }
    }

    Ok((!relative.as_os_str().is_empty()).then_some(relative))
}
