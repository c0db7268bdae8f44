//! PrivilegeGuard port - precondition checked before a run touches anything

use crate::error::MultideployerResult;

pub trait PrivilegeGuard {
    /// Fail with a permission error unless running with administrative rights
    fn ensure_elevated(&self) -> MultideployerResult<()>;
}
