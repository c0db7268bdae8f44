//! Domain Layer
//!
//! Deploy decisions and the data they act on, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - `DeployState` (last deployed release per app), `DeployRun`
//! - `value_objects/` - `SourceLocator`, `DeployPaths`
//! - `ports/` - Interfaces for state storage, bundle fetching, the
//!   deployment agent, privilege checks and event reporting

pub mod entities;
pub mod ports;
pub mod value_objects;
