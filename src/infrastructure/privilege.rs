//! Effective-UID privilege check

use nix::unistd::Uid;

use crate::domain::ports::PrivilegeGuard;
use crate::error::{MultideployerError, MultideployerResult};

/// Requires the process to run as root (the CodeDeploy agent does)
#[derive(Debug, Clone, Copy, Default)]
pub struct RootPrivilegeGuard;

impl PrivilegeGuard for RootPrivilegeGuard {
    fn ensure_elevated(&self) -> MultideployerResult<()> {
        let euid = Uid::effective();
        if euid.is_root() {
            Ok(())
        } else {
            Err(MultideployerError::Permission {
                reason: format!("must run as root (effective uid {})", euid),
            })
        }
    }
}
