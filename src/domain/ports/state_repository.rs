//! StateRepository port - persistence of the last deployed releases
//!
//! Lets the deploy use case load and save `DeployState` without knowing
//! the on-disk format.

use std::path::Path;

use crate::domain::entities::DeployState;
use crate::error::MultideployerResult;

/// Abstract repository for deploy state
///
/// No locking is performed; a single invocation per host is assumed.
pub trait StateRepository {
    /// Load the state stored under `store_dir`.
    ///
    /// A missing state file yields an empty state. Any other read failure
    /// is an I/O error, unparsable content a state error.
    fn load_last_state(&self, store_dir: &Path) -> MultideployerResult<DeployState>;

    /// Overwrite the state stored under `store_dir`
    fn persist(&self, store_dir: &Path, state: &DeployState) -> MultideployerResult<()>;
}
