//! Reentrancy guard for swap submission
//! Only one swap request may be in flight per caller; the busy flag is the
//! guard's lifetime, so every exit path (settle, failure, trap unwinding the
//! call) releases it. The reserve poller holds no guard and is never blocked
//! by an in-flight swap.

use crate::infrastructure::errors::{Result, SwapError, SystemError};
use candid::Principal;
use std::cell::RefCell;
use std::collections::HashSet;

thread_local! {
    /// Callers with a swap currently in flight
    static ACTIVE_SWAPS: RefCell<HashSet<Principal>> = RefCell::new(HashSet::new());
}

/// Guard for swap execution
pub struct SwapGuard {
    user: Principal,
}

impl SwapGuard {
    /// Acquire the per-caller busy flag
    pub fn acquire(user: Principal) -> Result<Self> {
        let acquired = ACTIVE_SWAPS.with(|swaps| {
            let mut swaps = swaps.borrow_mut();
            if swaps.contains(&user) {
                false // Already swapping
            } else {
                swaps.insert(user);
                true
            }
        });

        if acquired {
            Ok(SwapGuard { user })
        } else {
            Err(SwapError::System(SystemError::OperationInProgress {
                operation: "swap".to_string(),
                user: user.to_text(),
            }))
        }
    }
}

impl Drop for SwapGuard {
    fn drop(&mut self) {
        ACTIVE_SWAPS.with(|swaps| {
            swaps.borrow_mut().remove(&self.user);
        });
    }
}

/// Whether the caller has a swap in flight (drives the UI's busy indicator)
pub fn is_swapping(user: Principal) -> bool {
    ACTIVE_SWAPS.with(|swaps| swaps.borrow().contains(&user))
}
