//! Multideployer - deploy several CodeDeploy applications on one host
//!
//! A single YAML file lists the applications, their GitHub sources and the
//! release each one should run. Every invocation compares that list against
//! the releases recorded by the previous run, fetches the bundles that
//! changed and hands them to the local CodeDeploy agent.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{DeployOptions, DeployReport, DeployUseCase};
pub use config::{AppSpec, Config};
pub use domain::value_objects::DeployPaths;
pub use error::{MultideployerError, MultideployerResult};
pub use logging::LoggingContext;
