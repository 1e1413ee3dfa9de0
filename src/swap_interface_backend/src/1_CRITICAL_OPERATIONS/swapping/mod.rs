//! # Swap Orchestration Module
//!
//! Drives one swap attempt through its lifecycle:
//! `Submitting → [AwaitingApproval] → AwaitingConfirmation → Settled | Failed`
//!
//! ## Swap Flow
//! 1. Verify a connected account and acquire the per-caller busy guard
//! 2. Re-quote the input against the latest reserves (never settle on a
//!    stale display quote) and derive the minimum-acceptable output
//! 3. Native→token: exactly one exchange transaction
//! 4. Token→native: approve the exchange allowance FIRST and only submit the
//!    swap after the approval confirmed (the exchange's `transfer_from`
//!    would revert otherwise)
//! 5. Compare the settled amount against the advisory bound and record the
//!    outcome
//!
//! ## Key Constraints
//! - **One request in flight per caller**: the busy guard clears on every
//!   exit path, so the UI is re-submittable after any terminal state
//! - **Approval failure aborts**: the swap transaction is never attempted
//! - **Swap failure after approval**: the granted allowance stays on-chain
//!   (it expires or is consumed later); the request still fails cleanly
//! - **Advisory slippage**: the exchange interface has no minimum-output
//!   parameter, so a below-bound settlement is surfaced on the receipt
//!   instead of reverted

pub mod swap_state;

#[cfg(test)]
mod tests;

use crate::infrastructure::errors::{
    Result, SessionError, SwapError, TradingError,
};
use crate::infrastructure::math::parse_display_amount;
use crate::infrastructure::reentrancy::SwapGuard;
use crate::types::swap::{SwapReceipt, SwapRequest, SwapStatus};
use crate::types::SwapDirection;
use crate::_2_CRITICAL_DATA::quotes;
use crate::_3_SESSION_STATE::session;
use crate::_4_TRADING_EXECUTION::{approvals, slippage, ExchangeClient, LedgerClient, Runtime};
use candid::{Nat, Principal};

/// Execute the caller's current swap entry
///
/// ## Parameters
/// - `caller`: the connected account submitting the swap
/// - `now`: submission timestamp (nanoseconds)
/// - `exchange`: client for the AMM canister
/// - `token_ledger`: client for the token ledger (approval leg)
///
/// ## Returns
/// - `Ok(SwapReceipt)` when the swap settled (possibly below the advisory
///   minimum - see `below_minimum`)
/// - `Err` when a precondition failed or the request ended `Failed`
pub async fn execute_swap<R: Runtime>(
    caller: Principal,
    now: u64,
    exchange: &ExchangeClient<R>,
    token_ledger: &LedgerClient<R>,
) -> Result<SwapReceipt> {
    // === STEP 1: Preconditions ===
    // No connected account is a hard failure before any chain interaction
    if caller == Principal::anonymous() {
        return Err(SwapError::Session(SessionError::NoAccount));
    }

    // One request in flight per caller; released on every exit path
    let _guard = SwapGuard::acquire(caller)?;

    let current = session::get_session(caller);
    let direction = current.direction;
    let pay_amount = parse_display_amount(
        &current.input_amount,
        direction.input_asset().decimals(),
    )?;

    if pay_amount == Nat::from(0u64) {
        return Err(SwapError::Trading(TradingError::InvalidSwapAmount {
            reason: "Input amount must be greater than zero".to_string(),
        }));
    }

    ic_cdk::println!(
        "🔄 Executing swap for {}: {} {} (max slippage: {})",
        caller.to_text(),
        current.input_amount,
        direction.input_asset().default_symbol(),
        current.slippage.label()
    );

    // === STEP 2: Fresh Quote ===
    // The displayed quote may be stale; the request is resolved against the
    // current reserves or not at all
    let expected_receive = quotes::fresh_quote(exchange, direction, &pay_amount).await?;

    let min_receive = slippage::minimum_receive(&expected_receive, current.slippage)?;

    ic_cdk::println!(
        "📊 Expected to receive {} (advisory minimum: {})",
        expected_receive,
        min_receive
    );

    // === STEP 3: Register Request ===
    let request = SwapRequest {
        id: format!("swap_{}_{}", caller.to_text(), now),
        user: caller,
        direction,
        pay_amount: pay_amount.clone(),
        expected_receive: expected_receive.clone(),
        min_receive: min_receive.clone(),
        created_at: now,
    };
    let request_id = request.id.clone();
    swap_state::store_new_request(request, now);

    // === STEP 4: Submit Transaction(s) ===
    let receive_amount = match direction {
        SwapDirection::NativeToToken => {
            // Single transaction; the native amount rides on the call
            swap_state::update_swap_status(&request_id, SwapStatus::AwaitingConfirmation, now)?;

            match exchange.swap_native_to_token(pay_amount.clone()).await {
                Ok(received) => received,
                Err(e) => {
                    swap_state::update_swap_status(
                        &request_id,
                        SwapStatus::Failed {
                            reason: format!("Swap failed: {}", e),
                        },
                        now,
                    )?;
                    return Err(e);
                }
            }
        }
        SwapDirection::TokenToNative => {
            // Sequential dependency: the allowance must confirm before the
            // swap is submitted
            swap_state::update_swap_status(&request_id, SwapStatus::AwaitingApproval, now)?;

            let approval_block = match approvals::approve_exchange_spending(
                token_ledger,
                exchange.canister_id(),
                pay_amount.clone(),
                now,
            )
            .await
            {
                Ok(block) => block,
                Err(e) => {
                    // Abort: the swap transaction is never attempted
                    swap_state::update_swap_status(
                        &request_id,
                        SwapStatus::Failed {
                            reason: format!("Approval failed: {}", e),
                        },
                        now,
                    )?;
                    return Err(e);
                }
            };

            ic_cdk::println!("✅ Approval complete (block: {})", approval_block);

            swap_state::update_swap_status(&request_id, SwapStatus::AwaitingConfirmation, now)?;

            match exchange.swap_token_to_native(pay_amount.clone()).await {
                Ok(received) => received,
                Err(e) => {
                    // The allowance already granted stays on-chain; it
                    // expires or is consumed by a later swap
                    swap_state::update_swap_status(
                        &request_id,
                        SwapStatus::Failed {
                            reason: format!("Swap failed after approval: {}", e),
                        },
                        now,
                    )?;
                    return Err(e);
                }
            }
        }
    };

    // === STEP 5: Advisory Slippage Check ===
    let below_minimum = slippage::below_minimum(&receive_amount, &min_receive);
    if below_minimum {
        ic_cdk::println!(
            "⚠️ Settled below advisory minimum: received {} < {} (not enforceable on-chain)",
            receive_amount,
            min_receive
        );
    }

    // === STEP 6: Settle ===
    swap_state::update_swap_status(
        &request_id,
        SwapStatus::Settled {
            receive_amount: receive_amount.clone(),
        },
        now,
    )?;

    // Reset the entry fields so no stale quote survives the settlement
    session::clear_amounts(caller);

    ic_cdk::println!(
        "✅ Swap complete: {} {} → {} {}",
        pay_amount,
        direction.input_asset().default_symbol(),
        receive_amount,
        direction.output_asset().default_symbol()
    );

    Ok(SwapReceipt {
        request_id,
        direction,
        pay_amount,
        receive_amount,
        expected_receive,
        min_receive,
        below_minimum,
        timestamp: now,
    })
}
