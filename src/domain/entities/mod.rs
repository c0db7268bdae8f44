//! Domain Entities
//!
//! - `DeployState` - Release last deployed for each application
//! - `DeployRun` - Identity and working directory of one invocation

mod deploy_run;
mod deploy_state;

pub use deploy_run::DeployRun;
pub use deploy_state::{DeployState, StateEntry};
