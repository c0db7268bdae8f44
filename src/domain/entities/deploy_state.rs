//! DeployState entity - last deployed release per application
//!
//! Pure data structure; persistence is handled by a `StateRepository`.

use std::collections::BTreeMap;

use crate::config::AppSpec;

/// Recorded state of one application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateEntry {
    release: String,
}

impl StateEntry {
    pub fn new(release: impl Into<String>) -> Self {
        Self {
            release: release.into(),
        }
    }

    pub fn release(&self) -> &str {
        &self.release
    }
}

/// Mapping from application name to the release last deployed for it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployState {
    entries: BTreeMap<String, StateEntry>,
}

impl DeployState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Release recorded for `name`, if any
    pub fn release_of(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(StateEntry::release)
    }

    /// Whether `app` has to be fetched and deployed.
    ///
    /// True when forced (by the app or the caller) or when the configured
    /// release differs from the recorded one. A missing record differs.
    pub fn needs_deploy(&self, app: &AppSpec, force: bool) -> bool {
        force || app.force || self.release_of(&app.name) != Some(app.release.as_str())
    }

    /// Record `release` as deployed for `name`
    pub fn record(&mut self, name: impl Into<String>, release: impl Into<String>) {
        self.entries.insert(name.into(), StateEntry::new(release));
    }

    /// Iterate entries in name order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &StateEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
