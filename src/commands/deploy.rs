//! Deploy command entry point

use anyhow::{Context, Result};
use tracing::{debug, info};

use multideployer::application::{DeployOptions, DeployReport, DeployUseCase};
use multideployer::domain::value_objects::DeployPaths;
use multideployer::infrastructure::{
    CodedeployLocalAgent, GithubBundleSource, MtimeRevisionPruner, RootPrivilegeGuard,
    TracingEventSink, YamlStateRepository,
};

use crate::cli::Cli;

/// Run one deploy pass with the real adapters
pub fn cmd_deploy(cli: &Cli) -> Result<DeployReport> {
    let options = DeployOptions::new(&cli.config, DeployPaths::new(&cli.base_dir))
        .with_apps(cli.apps.clone())
        .with_force(cli.force)
        .with_keep_deploys(cli.keep_deploys);

    debug!(
        config = %options.config_path.display(),
        base_dir = %options.paths.base().display(),
        agent = %cli.codedeploy_local_path.display(),
        authenticated = cli.github_token.is_some(),
        "starting deploy"
    );

    let use_case = DeployUseCase::new(
        YamlStateRepository::new(),
        GithubBundleSource::new(cli.github_token.clone()).with_api_base(&cli.github_api),
        CodedeployLocalAgent::new(&cli.codedeploy_local_path),
        RootPrivilegeGuard,
        MtimeRevisionPruner,
    );

    let report = use_case
        .execute_with_events(&options, &TracingEventSink)
        .with_context(|| format!("deploy from {} failed", options.config_path.display()))?;

    if report.has_changes() {
        info!(
            run_id = %report.run_id,
            deployed = %report.deployed.join(", "),
            "deploy finished"
        );
    } else {
        info!("all applications up to date");
    }

    Ok(report)
}
