//! Configuration module for multideployer
//!
//! The application list lives in a YAML file (`multideployer.yaml` by default):
//!
//! ```yaml
//! version: 1.0
//! apps:
//!   - name: web
//!     release: v1.4.2
//!     source: github://acme/web
//!     force: false
//! ```
//!
//! Parsing and schema validation happen in one pass that yields either a
//! typed `Config` or a single `ConfigFormatError`.

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{load, load_with_warnings, parse_config, ConfigWarning};
pub use types::{AppSpec, Config, ConfigFormatError, DEFAULT_CONFIG_FILE, SUPPORTED_VERSION};
