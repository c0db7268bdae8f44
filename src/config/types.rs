//! Configuration type definitions

use std::path::Path;

use thiserror::Error;

use crate::error::MultideployerResult;

/// Default configuration file name, resolved against the working directory
pub const DEFAULT_CONFIG_FILE: &str = "multideployer.yaml";

/// The only schema version this build understands
pub const SUPPORTED_VERSION: f64 = 1.0;

/// One application to deploy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSpec {
    /// Unique key, also used for the deployment group name
    pub name: String,
    /// Opaque release identifier (tag or commit)
    pub release: String,
    /// Source locator, e.g. `github://owner/repo`
    pub source: String,
    /// Redeploy even when the recorded release matches
    pub force: bool,
}

impl AppSpec {
    pub fn new(
        name: impl Into<String>,
        release: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            release: release.into(),
            source: source.into(),
            force: false,
        }
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// Validated configuration
///
/// Only constructed by the loader, so `apps` is always non-empty with
/// unique, fully populated entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    apps: Vec<AppSpec>,
}

impl Config {
    pub(crate) fn from_apps(apps: Vec<AppSpec>) -> Self {
        Self { apps }
    }

    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> MultideployerResult<Self> {
        super::loader::load(path)
    }

    /// Schema version of this configuration
    pub fn version(&self) -> f64 {
        SUPPORTED_VERSION
    }

    /// Applications in file order
    pub fn apps(&self) -> &[AppSpec] {
        &self.apps
    }

    pub fn get(&self, name: &str) -> Option<&AppSpec> {
        self.apps.iter().find(|app| app.name == name)
    }

    /// Restrict to the named applications, keeping file order.
    ///
    /// An empty filter selects everything. Returns the selection and the
    /// requested names that are not configured.
    pub fn select(&self, names: &[String]) -> (Vec<&AppSpec>, Vec<String>) {
        if names.is_empty() {
            return (self.apps.iter().collect(), Vec::new());
        }

        let selected = self
            .apps
            .iter()
            .filter(|app| names.iter().any(|n| n == &app.name))
            .collect();
        let unknown = names
            .iter()
            .filter(|n| self.get(n).is_none())
            .cloned()
            .collect();
        (selected, unknown)
    }
}

/// Every way a configuration file can fail validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigFormatError {
    #[error("invalid YAML: {0}")]
    Yaml(String),

    #[error("top level is not a mapping")]
    NotAMapping,

    #[error("version is missing")]
    MissingVersion,

    #[error("version not 1.0 (found {found})")]
    UnsupportedVersion { found: String },

    #[error("\"apps\" does not exist")]
    MissingApps,

    #[error("\"apps\" is not a list")]
    AppsNotAList,

    #[error("\"apps\" is empty")]
    NoApps,

    #[error("app #{index} definition is not a mapping")]
    AppNotAMapping { index: usize },

    #[error("app #{index} does not have all required fields: name, release, source (missing '{field}')")]
    MissingField { index: usize, field: &'static str },

    #[error("app #{index} has an empty '{field}'")]
    EmptyField { index: usize, field: &'static str },

    #[error("app #{index} field '{field}' must be {expected}")]
    InvalidField {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },

    #[error("app name '{name}' is defined more than once")]
    DuplicateName { name: String },
}
