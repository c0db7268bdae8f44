//! Domain Value Objects

mod deploy_paths;
mod source_locator;

pub use deploy_paths::{DeployPaths, DEFAULT_BASE_DIR, DEPLOYS_DIR_NAME, STATE_FILE_NAME};
pub use source_locator::{SourceLocator, GITHUB_API, GITHUB_SCHEME};
