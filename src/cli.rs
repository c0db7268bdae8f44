use std::path::PathBuf;

use clap::Parser;

use multideployer::application::DEFAULT_KEEP_DEPLOYS;
use multideployer::config::DEFAULT_CONFIG_FILE;
use multideployer::domain::value_objects::{DEFAULT_BASE_DIR, GITHUB_API};
use multideployer::infrastructure::agent::DEFAULT_AGENT_PATH;
use multideployer::logging::level_for;

/// Multideployer - deploy several CodeDeploy applications from one file
#[derive(Parser, Debug)]
#[command(name = "multideployer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Application list
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Only deploy this application (repeatable)
    #[arg(short, long = "app", value_name = "NAME")]
    pub apps: Vec<String>,

    /// Redeploy every selected application
    #[arg(short, long)]
    pub force: bool,

    /// GitHub token for private repositories
    #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// GitHub API root
    #[arg(long, env = "GITHUB_API_URL", default_value = GITHUB_API)]
    pub github_api: String,

    /// Path to the codedeploy-local executable
    #[arg(short, long, env = "CODEDEPLOY_LOCAL_PATH", default_value = DEFAULT_AGENT_PATH)]
    pub codedeploy_local_path: PathBuf,

    /// State and deploy directory root
    #[arg(short, long, env = "MULTIDEPLOYER_HOME", default_value = DEFAULT_BASE_DIR)]
    pub base_dir: PathBuf,

    /// Deploy directories to keep
    #[arg(short, long, default_value_t = DEFAULT_KEEP_DEPLOYS)]
    pub keep_deploys: usize,

    /// Also write the log to this file
    #[arg(short, long, value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Debug output
    #[arg(short, long)]
    pub debug: bool,

    /// Informational output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        level_for(self.verbose, self.debug)
    }
}
