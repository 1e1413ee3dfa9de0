//! # Token Approval Module
//!
//! Grants the exchange canister an ICRC-2 allowance so it can pull the input
//! tokens for a token→native swap. The native direction never needs this -
//! the native amount rides on the swap call itself.
//!
//! ## Approval Flow
//! 1. Backend approves the exchange to spend exactly the input amount
//! 2. Approval valid for 15 minutes
//! 3. Exchange executes the swap using `transfer_from`
//! 4. Unused approvals expire automatically
//!
//! ## Safety
//! - 15-minute expiry balances security and network congestion handling
//! - Amount exactly matches the swap requirement
//! - A confirmed approval followed by a failed swap leaves the allowance
//!   granted on-chain; allowances persist until consumed, revoked or expired

use super::ledger::LedgerClient;
use super::runtime::Runtime;
use crate::infrastructure::errors::Result;
use crate::types::icrc::{Account, ApproveArgs};
use candid::{Nat, Principal};
use serde_bytes::ByteBuf;

/// Token approval expiry time in nanoseconds (15 minutes)
const APPROVAL_EXPIRY_NANOS: u64 = 900_000_000_000;

/// Approve the exchange to spend the caller's input tokens for one swap
///
/// Returns the approval block index. The swap transaction MUST NOT be
/// submitted until this has confirmed; the exchange's `transfer_from` would
/// revert without the allowance.
pub async fn approve_exchange_spending<R: Runtime>(
    token_ledger: &LedgerClient<R>,
    exchange: Principal,
    amount: Nat,
    now: u64,
) -> Result<Nat> {
    ic_cdk::println!(
        "📝 Approving {} {} for exchange {}",
        amount,
        token_ledger.asset().default_symbol(),
        exchange.to_text()
    );

    let approve_args = ApproveArgs {
        from_subaccount: None,
        spender: Account {
            owner: exchange,
            subaccount: None,
        },
        amount: amount.clone(),
        expected_allowance: None,
        expires_at: Some(now + APPROVAL_EXPIRY_NANOS),
        fee: None, // Use default
        memo: Some(ByteBuf::from(b"swap allowance".to_vec())),
        created_at_time: Some(now),
    };

    let block_index = token_ledger.approve(approve_args).await?;

    ic_cdk::println!(
        "✅ Approval successful: {} (block: {})",
        amount,
        block_index
    );

    Ok(block_index)
}
