//! Swap request lifecycle types

use super::assets::SwapDirection;
use candid::{CandidType, Deserialize, Nat, Principal};
use serde::Serialize;

/// Fully resolved description of one swap attempt. Created at submit time
/// from a fresh quote; never mutated afterwards.
#[derive(CandidType, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SwapRequest {
    pub id: String,
    pub user: Principal,
    pub direction: SwapDirection,
    /// Input amount in base units of the input asset
    pub pay_amount: Nat,
    /// Output quoted at submit time, base units of the output asset
    pub expected_receive: Nat,
    /// Advisory lower bound derived from the quote and the slippage tolerance
    pub min_receive: Nat,
    pub created_at: u64,
}

/// Lifecycle of a SwapRequest. `AwaitingApproval` occurs only when the input
/// asset is the token (an allowance must confirm before the exchange may pull
/// tokens); the native direction goes straight to `AwaitingConfirmation`.
#[derive(CandidType, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum SwapStatus {
    Submitting,
    AwaitingApproval,
    AwaitingConfirmation,
    Settled { receive_amount: Nat },
    Failed { reason: String },
}

impl SwapStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SwapStatus::Settled { .. } | SwapStatus::Failed { .. }
        )
    }
}

/// A request together with its current status; also the history entry shape
#[derive(CandidType, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SwapRecord {
    pub request: SwapRequest,
    pub status: SwapStatus,
    pub last_updated: u64,
}

/// Returned to the caller when a swap settles
#[derive(CandidType, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SwapReceipt {
    pub request_id: String,
    pub direction: SwapDirection,
    pub pay_amount: Nat,
    pub receive_amount: Nat,
    pub expected_receive: Nat,
    pub min_receive: Nat,
    /// True when the settled amount came in under the advisory bound; the
    /// exchange interface cannot enforce the bound on-chain, so this is
    /// surfaced rather than hidden.
    pub below_minimum: bool,
    pub timestamp: u64,
}
