//! Wire types of the external exchange (AMM) canister
//!
//! The exchange owns the pricing formula; this backend only calls
//! `get_amount_of_tokens` for quotes and the two swap methods. Neither swap
//! method takes a minimum-output parameter - slippage protection is advisory
//! on this deployment.

use candid::{CandidType, Deserialize, Nat};
use serde::Serialize;

/// Result shape of `swap_native_to_token` / `swap_token_to_native`:
/// the amount received on success, the revert reason otherwise.
#[derive(CandidType, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum ExchangeSwapResult {
    Ok(Nat),
    Err(String),
}
