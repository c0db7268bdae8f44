//! Bundle Sources
//!
//! Implementations of the BundleSource port.

mod archive;
mod github;

pub use archive::extract_stripped;
pub use github::GithubBundleSource;
