//! BundleSource port - downloads and unpacks release bundles

use std::path::Path;

use crate::error::MultideployerResult;

/// Name of the downloaded archive inside an app's directory
pub const BUNDLE_ARCHIVE: &str = "bundle.tar.gz";

/// Name of the extracted bundle directory inside an app's directory
pub const BUNDLE_DIR: &str = "bundle";

/// Fetches an application's release bundle into a deploy run directory
pub trait BundleSource {
    /// Download `release` of `source` and extract it to
    /// `dest_root/app/bundle`, keeping the archive at
    /// `dest_root/app/bundle.tar.gz`.
    ///
    /// Fails if `dest_root/app` already exists. An unsupported source is
    /// rejected before anything is created on disk.
    fn fetch(
        &self,
        app: &str,
        source: &str,
        release: &str,
        dest_root: &Path,
    ) -> MultideployerResult<()>;
}
