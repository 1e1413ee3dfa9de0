//! Exchange reserve snapshot

use candid::{CandidType, Deserialize, Nat};
use serde::Serialize;

/// The exchange canister's held balances of both assets at `updated_at`.
/// Read-only from this backend's perspective; refreshed by the poller.
#[derive(CandidType, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ReserveSnapshot {
    pub native_reserve: Nat,
    pub token_reserve: Nat,
    pub updated_at: u64,
}
