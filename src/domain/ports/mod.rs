//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod bundle_source;
pub mod deploy_events;
pub mod deployment_agent;
pub mod privilege_guard;
pub mod revision_pruner;
pub mod state_repository;

pub use bundle_source::BundleSource;
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use deployment_agent::{DeploymentAgent, DeploymentError};
pub use privilege_guard::PrivilegeGuard;
pub use revision_pruner::RevisionPruner;
pub use state_repository::StateRepository;
