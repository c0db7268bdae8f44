//! DeploymentAgent port - runs the local deployment of an extracted bundle

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why a deployment did not succeed
#[derive(Error, Debug)]
pub enum DeploymentError {
    /// Bundle has no `appspec.yml`
    #[error("no appspec found in {path}")]
    MissingAppspec { path: PathBuf },

    /// Agent executable is not installed where expected
    #[error("deployment agent not found at {path}")]
    MissingAgent { path: PathBuf },

    /// Agent could not be started
    #[error("cannot run deployment agent {path}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Agent reported a failed lifecycle script in its output
    #[error("deployment of {app} failed:\n{output}")]
    ScriptFailed { app: String, output: String },

    /// Agent exited with a non-zero status
    #[error("deployment agent exited with {status} while deploying {app}:\n{output}")]
    AgentExited {
        app: String,
        status: String,
        output: String,
    },
}

/// Deploys one application from a deploy run directory
pub trait DeploymentAgent {
    /// Deploy `release` of `app` from `bundle_dir/app/bundle`
    fn deploy(&self, app: &str, release: &str, bundle_dir: &Path) -> Result<(), DeploymentError>;
}
