//! Deployment Agents
//!
//! Implementations of the DeploymentAgent port.

mod codedeploy_local;

pub use codedeploy_local::{
    deployment_group, interpret_agent_output, CodedeployLocalAgent, APPSPEC_FILES, DEFAULT_AGENT_PATH,
    SCRIPT_FAILURE_PHRASE,
};
