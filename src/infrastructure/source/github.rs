//! GitHub Bundle Source
//!
//! Downloads `/repos/<owner>/<repo>/tarball/<release>` and unpacks it.

use std::fs::{self, File};
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use sha2::{Digest, Sha256};
use tracing::debug;

use super::archive::extract_stripped;
use crate::domain::ports::bundle_source::{BundleSource, BUNDLE_ARCHIVE, BUNDLE_DIR};
use crate::domain::value_objects::{SourceLocator, GITHUB_API};
use crate::error::{MultideployerError, MultideployerResult};

const CLIENT_USER_AGENT: &str = concat!("multideployer/", env!("CARGO_PKG_VERSION"));

/// Fetches release tarballs from the GitHub API
pub struct GithubBundleSource {
    client: Client,
    token: Option<String>,
    api_base: String,
}

impl GithubBundleSource {
    /// Anonymous access unless `token` is given
    pub fn new(token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            token: token.filter(|t| !t.is_empty()),
            api_base: GITHUB_API.to_string(),
        }
    }

    /// Point at another API root (GitHub Enterprise, tests)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn download(&self, url: reqwest::Url, archive: &Path) -> MultideployerResult<String> {
        let display_url = redact(&url);
        let download_err = |message: String| MultideployerError::Download {
            url: display_url.clone(),
            message,
        };

        debug!(url = %display_url, "downloading bundle");
        let mut response = self
            .client
            .get(url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| download_err(e.to_string()))?;

        let file = File::create(archive)
            .map_err(|e| MultideployerError::io(format!("cannot create {}", archive.display()), e))?;
        let mut writer = HashingWriter::new(file);
        let bytes = response
            .copy_to(&mut writer)
            .map_err(|e| download_err(e.to_string()))?;
        writer
            .flush()
            .map_err(|e| MultideployerError::io(format!("cannot write {}", archive.display()), e))?;

        let digest = writer.hex_digest();
        debug!(bytes, sha256 = %digest, "bundle downloaded");
        Ok(digest)
    }
}

impl BundleSource for GithubBundleSource {
    fn fetch(
        &self,
        app: &str,
        source: &str,
        release: &str,
        dest_root: &Path,
    ) -> MultideployerResult<()> {
        let locator = SourceLocator::parse(source)?;
        let url = locator.tarball_url_at(&self.api_base, release, self.token.as_deref())?;

        let app_dir = dest_root.join(app);
        fs::create_dir_all(dest_root).map_err(|e| {
            MultideployerError::io(format!("cannot create {}", dest_root.display()), e)
        })?;
        fs::create_dir(&app_dir).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => MultideployerError::DestinationExists {
                path: app_dir.clone(),
            },
            _ => MultideployerError::io(format!("cannot create {}", app_dir.display()), e),
        })?;

        let archive = app_dir.join(BUNDLE_ARCHIVE);
        self.download(url, &archive)?;

        let files = extract_stripped(&archive, &app_dir.join(BUNDLE_DIR))?;
        debug!(app, files, "bundle extracted");
        Ok(())
    }
}

/// Strip query credentials before a URL reaches logs or errors
fn redact(url: &reqwest::Url) -> String {
    let mut shown = url.clone();
    shown.set_query(None);
    shown.to_string()
}

/// Writer that hashes everything passing through
struct HashingWriter<W> {
    inner: W,
    hasher: Sha256,
}

impl<W: Write> HashingWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: Sha256::new(),
        }
    }

    fn hex_digest(self) -> String {
        format!("{:x}", self.hasher.finalize())
    }
}

impl<W: Write> Write for HashingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.update(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
