//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - validate config, diff against last state, fetch,
//!   invoke the agent, persist state, prune old deploy directories

pub mod deploy;

pub use deploy::{DeployOptions, DeployReport, DeployUseCase, DEFAULT_KEEP_DEPLOYS};
