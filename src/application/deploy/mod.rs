//! Deploy Module
//!
//! Orchestrates a multi-application deploy run.
//!
//! ## Structure
//!
//! - `options` - Run configuration (`DeployOptions`)
//! - `result` - Run outcome (`DeployReport`)
//! - `use_case` - The pipeline itself (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use multideployer::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(state_repo, bundle_source, agent, privileges, pruner);
//! let report = use_case.execute(&DeployOptions::new(config_path, paths))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{DeployOptions, DEFAULT_KEEP_DEPLOYS};
pub use result::DeployReport;
pub use use_case::DeployUseCase;
