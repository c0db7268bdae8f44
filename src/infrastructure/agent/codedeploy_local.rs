//! CodeDeploy local agent
//!
//! Runs `codedeploy-local` against an extracted bundle directory.
//!
//! The agent exits 0 even when one of the bundle's lifecycle scripts fails,
//! so its exit status is advisory only. The authoritative failure signal is
//! `SCRIPT_FAILURE_PHRASE` appearing in the captured output.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::domain::ports::bundle_source::BUNDLE_DIR;
use crate::domain::ports::{DeploymentAgent, DeploymentError};

pub const DEFAULT_AGENT_PATH: &str = "/opt/codedeploy-agent/bin/codedeploy-local";

pub const SCRIPT_FAILURE_PHRASE: &str =
    "Your local deployment failed while trying to execute your script";

/// Descriptor names the agent accepts at the bundle root
pub const APPSPEC_FILES: &[&str] = &["appspec.yml", "appspec.yaml"];

/// Environment variable carrying the release to lifecycle scripts
const RELEASE_ENV: &str = "GIT_COMMIT";

pub struct CodedeployLocalAgent {
    agent_path: PathBuf,
}

impl CodedeployLocalAgent {
    pub fn new(agent_path: impl Into<PathBuf>) -> Self {
        Self {
            agent_path: agent_path.into(),
        }
    }

    pub fn agent_path(&self) -> &Path {
        &self.agent_path
    }
}

impl Default for CodedeployLocalAgent {
    fn default() -> Self {
        Self::new(DEFAULT_AGENT_PATH)
    }
}

/// Deployment group name the agent is given for `app`
pub fn deployment_group(app: &str) -> String {
    format!("{}-local-deployment-application", app)
}

impl DeploymentAgent for CodedeployLocalAgent {
    fn deploy(&self, app: &str, release: &str, bundle_dir: &Path) -> Result<(), DeploymentError> {
        let bundle = bundle_dir.join(app).join(BUNDLE_DIR);
        if !APPSPEC_FILES.iter().any(|name| bundle.join(name).is_file()) {
            return Err(DeploymentError::MissingAppspec { path: bundle });
        }
        if !self.agent_path.is_file() {
            return Err(DeploymentError::MissingAgent {
                path: self.agent_path.clone(),
            });
        }

        info!(app, release, agent = %self.agent_path.display(), "running deployment agent");
        let output = Command::new(&self.agent_path)
            .env(RELEASE_ENV, release)
            .arg("--bundle-location")
            .arg(&bundle)
            .arg("--type")
            .arg("directory")
            .arg("--deployment-group")
            .arg(deployment_group(app))
            .output()
            .map_err(|source| DeploymentError::Spawn {
                path: self.agent_path.clone(),
                source,
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        debug!(app, status = ?output.status.code(), output = %combined, "deployment agent finished");

        interpret_agent_output(app, output.status.code(), &combined)
    }
}

/// Decide whether an agent run failed.
///
/// The failure phrase wins over any exit code. Without it, a non-zero or
/// missing exit code (killed by a signal) is still a failure.
pub fn interpret_agent_output(
    app: &str,
    exit_code: Option<i32>,
    output: &str,
) -> Result<(), DeploymentError> {
    if output.contains(SCRIPT_FAILURE_PHRASE) {
        return Err(DeploymentError::ScriptFailed {
            app: app.to_string(),
            output: output.to_string(),
        });
    }

    match exit_code {
        Some(0) => Ok(()),
        code => Err(DeploymentError::AgentExited {
            app: app.to_string(),
            status: code.map_or_else(|| "a signal".to_string(), |c| format!("code {}", c)),
            output: output.to_string(),
        }),
    }
}
