//! Deploy Use Case
//!
//! Orchestrates one deploy run:
//! 1. Check privileges
//! 2. Load and validate the application list
//! 3. Load the last deployed state
//! 4. Per application, in config order: skip, or fetch and deploy
//! 5. Persist the state
//! 6. Prune old deploy directories
//!
//! Any failure in steps 1-4 aborts the run before the state is written,
//! so applications deployed earlier in a failed run are not recorded.

use tracing::warn;

use crate::config;
use crate::domain::entities::DeployRun;
use crate::domain::ports::{
    BundleSource, DeployEvent, DeployEventSink, DeploymentAgent, NoopEventSink, PrivilegeGuard,
    RevisionPruner, StateRepository,
};
use crate::error::MultideployerResult;

use super::options::DeployOptions;
use super::result::DeployReport;

/// Deploy use case, parameterized by its ports
pub struct DeployUseCase<SR, BS, DA, PG, RP>
where
    SR: StateRepository,
    BS: BundleSource,
    DA: DeploymentAgent,
    PG: PrivilegeGuard,
    RP: RevisionPruner,
{
    pub(super) state_repo: SR,
    pub(super) bundle_source: BS,
    pub(super) agent: DA,
    pub(super) privileges: PG,
    pub(super) pruner: RP,
}

impl<SR, BS, DA, PG, RP> DeployUseCase<SR, BS, DA, PG, RP>
where
    SR: StateRepository,
    BS: BundleSource,
    DA: DeploymentAgent,
    PG: PrivilegeGuard,
    RP: RevisionPruner,
{
    pub fn new(
        state_repo: SR,
        bundle_source: BS,
        agent: DA,
        privileges: PG,
        pruner: RP,
    ) -> Self {
        Self {
            state_repo,
            bundle_source,
            agent,
            privileges,
            pruner,
        }
    }

    /// Execute a deploy run silently
    pub fn execute(&self, options: &DeployOptions) -> MultideployerResult<DeployReport> {
        self.execute_with_events(options, &NoopEventSink)
    }

    /// Execute a deploy run, reporting progress to `events`
    pub fn execute_with_events(
        &self,
        options: &DeployOptions,
        events: &dyn DeployEventSink,
    ) -> MultideployerResult<DeployReport> {
        self.privileges.ensure_elevated()?;

        let (config, warnings) = config::load_with_warnings(&options.config_path)?;
        for warning in &warnings {
            warn!(
                file = %options.config_path.display(),
                key = %warning.key,
                line = ?warning.line,
                "unknown configuration key ignored"
            );
        }

        let (apps, unknown) = config.select(&options.apps);
        for name in &unknown {
            warn!(app = %name, "application not found in configuration");
        }

        let store_dir = options.paths.base();
        let mut state = self.state_repo.load_last_state(store_dir)?;

        let deploys_root = options.paths.deploys_root();
        let run = DeployRun::new(&deploys_root);
        let mut report = DeployReport::new(run.id());
        events.on_event(DeployEvent::Started {
            run_id: run.id().to_string(),
            app_count: apps.len(),
        });

        for app in apps {
            if !state.needs_deploy(app, options.force) {
                events.on_event(DeployEvent::AppSkipped {
                    app: app.name.clone(),
                    release: app.release.clone(),
                });
                report.skipped.push(app.name.clone());
            } else {
                events.on_event(DeployEvent::FetchStarted {
                    app: app.name.clone(),
                    release: app.release.clone(),
                });
                self.bundle_source
                    .fetch(&app.name, &app.source, &app.release, run.work_dir())?;
                report.work_dir = Some(run.work_dir().to_path_buf());
                events.on_event(DeployEvent::Fetched {
                    app: app.name.clone(),
                    path: run.app_dir(&app.name),
                });

                events.on_event(DeployEvent::DeployStarted {
                    app: app.name.clone(),
                    release: app.release.clone(),
                });
                self.agent
                    .deploy(&app.name, &app.release, run.work_dir())?;
                events.on_event(DeployEvent::AppDeployed {
                    app: app.name.clone(),
                    release: app.release.clone(),
                });
                report.deployed.push(app.name.clone());
            }

            state.record(app.name.clone(), app.release.clone());
        }

        self.state_repo.persist(store_dir, &state)?;
        events.on_event(DeployEvent::StatePersisted {
            path: options.paths.state_file(),
            entries: state.len(),
        });

        report.pruned = self.pruner.prune(&deploys_root, options.keep_deploys)?;
        events.on_event(DeployEvent::Pruned {
            removed: report.pruned.clone(),
        });

        events.on_event(DeployEvent::Completed {
            deployed: report.deployed.len(),
            skipped: report.skipped.len(),
        });
        Ok(report)
    }
}
