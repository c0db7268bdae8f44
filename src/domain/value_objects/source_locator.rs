//! Source locator value object
//!
//! A source is written as `<provider>://<owner>/<repo>`. Only the `github`
//! provider is known; it resolves to the tarball-by-ref endpoint of the
//! GitHub REST API.

use url::Url;

use crate::error::{MultideployerError, MultideployerResult};

pub const GITHUB_SCHEME: &str = "github";

pub const GITHUB_API: &str = "https://api.github.com";

/// Parsed, provider-checked source URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocator {
    owner: String,
    repo_path: String,
}

impl SourceLocator {
    /// Parse a source URI, rejecting unknown providers.
    pub fn parse(source: &str) -> MultideployerResult<Self> {
        let url = Url::parse(source).map_err(|e| MultideployerError::InvalidSource {
            source_uri: source.to_string(),
            message: e.to_string(),
        })?;

        if url.scheme() != GITHUB_SCHEME {
            return Err(MultideployerError::UnsupportedSource {
                source_uri: source.to_string(),
                scheme: url.scheme().to_string(),
            });
        }

        let owner = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| MultideployerError::InvalidSource {
                source_uri: source.to_string(),
                message: "missing repository owner".to_string(),
            })?
            .to_string();

        let repo_path = url.path().trim_end_matches('/').to_string();
        if repo_path.is_empty() {
            return Err(MultideployerError::InvalidSource {
                source_uri: source.to_string(),
                message: "missing repository name".to_string(),
            });
        }

        Ok(Self { owner, repo_path })
    }

    /// `owner/repo` as GitHub spells it
    pub fn repository(&self) -> String {
        format!("{}{}", self.owner, self.repo_path)
    }

    /// Download URL for `release`, with the token as a query credential
    /// when one is given.
    pub fn tarball_url(&self, release: &str, token: Option<&str>) -> MultideployerResult<Url> {
        self.tarball_url_at(GITHUB_API, release, token)
    }

    /// Same as `tarball_url` against another API root (GitHub Enterprise).
    ///
    /// The release is appended as path segments, so `#` and `?` in a ref
    /// name are percent-encoded instead of starting a fragment or query.
    pub fn tarball_url_at(
        &self,
        api_base: &str,
        release: &str,
        token: Option<&str>,
    ) -> MultideployerResult<Url> {
        let invalid = |message: String| MultideployerError::InvalidSource {
            source_uri: api_base.to_string(),
            message,
        };

        let mut url = Url::parse(api_base).map_err(|e| invalid(e.to_string()))?;
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| invalid("API root cannot carry a path".to_string()))?
            .pop_if_empty()
            .push("repos")
            .push(&self.owner)
            .extend(self.repo_path.split('/').filter(|s| !s.is_empty()))
            .push("tarball")
            .extend(release.split('/'));

        if let Some(token) = token.filter(|t| !t.is_empty()) {
            url.query_pairs_mut().append_pair("access_token", token);
        }
        Ok(url)
    }
}
